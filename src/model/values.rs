// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Closed-set attribute values with typed Rust names.
//!
//! Each enum converts into [`AttrValue::Token`], which renders unquoted. The `TOKENS`
//! tables double as the accepted sets in the attribute catalogue.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::attrs::AttrValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    kind: &'static str,
    value: String,
}

impl ParseTokenError {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseTokenError {}

macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(ParseTokenError { kind: stringify!($name), value: s.to_owned() }),
                }
            }
        }

        impl From<$name> for AttrValue {
            fn from(value: $name) -> Self {
                AttrValue::Token(SmolStr::new(value.as_str()))
            }
        }
    };
}

token_enum! {
    /// `rankdir`: layout direction of the root graph.
    RankDir {
        TopBottom => "TB",
        LeftRight => "LR",
        BottomTop => "BT",
        RightLeft => "RL",
    }
}

token_enum! {
    /// `rank`: rank constraint of a subgraph's nodes.
    Rank {
        Same => "same",
        Min => "min",
        Source => "source",
        Max => "max",
        Sink => "sink",
    }
}

token_enum! {
    /// `dir`: which ends of an edge carry arrowheads.
    EdgeDir {
        Forward => "forward",
        Back => "back",
        Both => "both",
        Neither => "none",
    }
}

token_enum! {
    /// `splines`: how edges are routed.
    Splines {
        Hidden => "none",
        Line => "line",
        Polyline => "polyline",
        Curved => "curved",
        Ortho => "ortho",
        Spline => "spline",
    }
}

token_enum! {
    /// `style` for nodes, edges and clusters. Combined styles use a plain string instead.
    Style {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        Bold => "bold",
        Invis => "invis",
        Filled => "filled",
        Rounded => "rounded",
        Diagonals => "diagonals",
        Striped => "striped",
        Wedged => "wedged",
        Tapered => "tapered",
        Radial => "radial",
    }
}

token_enum! {
    /// `arrowhead` / `arrowtail` primitive shapes.
    ArrowType {
        Normal => "normal",
        Inv => "inv",
        Dot => "dot",
        InvDot => "invdot",
        ODot => "odot",
        InvODot => "invodot",
        NoArrow => "none",
        Tee => "tee",
        Empty => "empty",
        InvEmpty => "invempty",
        Diamond => "diamond",
        ODiamond => "odiamond",
        EDiamond => "ediamond",
        Crow => "crow",
        Box => "box",
        OBox => "obox",
        Open => "open",
        HalfOpen => "halfopen",
        Vee => "vee",
    }
}

token_enum! {
    /// Node `shape`.
    Shape {
        Box => "box",
        Polygon => "polygon",
        Ellipse => "ellipse",
        Oval => "oval",
        Circle => "circle",
        Point => "point",
        Egg => "egg",
        Triangle => "triangle",
        PlainText => "plaintext",
        Plain => "plain",
        Diamond => "diamond",
        Trapezium => "trapezium",
        Parallelogram => "parallelogram",
        House => "house",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Septagon => "septagon",
        Octagon => "octagon",
        DoubleCircle => "doublecircle",
        DoubleOctagon => "doubleoctagon",
        TripleOctagon => "tripleoctagon",
        InvTriangle => "invtriangle",
        InvTrapezium => "invtrapezium",
        InvHouse => "invhouse",
        MDiamond => "Mdiamond",
        MSquare => "Msquare",
        MCircle => "Mcircle",
        Rect => "rect",
        Rectangle => "rectangle",
        Square => "square",
        Star => "star",
        NoShape => "none",
        Underline => "underline",
        Cylinder => "cylinder",
        Note => "note",
        Tab => "tab",
        Folder => "folder",
        Box3d => "box3d",
        Component => "component",
        Record => "record",
        MRecord => "Mrecord",
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrowType, EdgeDir, RankDir, Shape, Style};
    use crate::model::AttrValue;

    #[test]
    fn typed_values_roundtrip_via_str() {
        for shape in Shape::ALL {
            let parsed: Shape = shape.as_str().parse().expect("parse shape");
            assert_eq!(parsed, *shape);
        }
        for arrow in ArrowType::ALL {
            let parsed: ArrowType = arrow.as_str().parse().expect("parse arrow");
            assert_eq!(parsed, *arrow);
        }
        assert_eq!(Shape::ALL.len(), Shape::TOKENS.len());
    }

    #[test]
    fn typed_values_become_unquoted_tokens() {
        assert_eq!(AttrValue::from(RankDir::LeftRight), AttrValue::Token("LR".into()));
        assert_eq!(AttrValue::from(EdgeDir::Neither), AttrValue::Token("none".into()));
        assert_eq!(AttrValue::from(Style::Filled), AttrValue::Token("filled".into()));
    }

    #[test]
    fn unknown_tokens_are_rejected_with_kind() {
        let err = "sideways".parse::<RankDir>().expect_err("should reject");
        assert_eq!(err.kind(), "RankDir");
        assert!(err.to_string().contains("sideways"));
    }
}
