// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hand-declared attribute catalogue.
//!
//! Every attribute an entity may carry is listed here with the kind of value it accepts
//! and the entity kinds it applies to. [`Attributes::set`](super::Attributes::set) checks
//! values against this table, so a table that made it into the model always renders to
//! valid DOT.

use std::fmt;

use super::ids::{is_bare_id, CompassPoint};
use super::values::{ArrowType, EdgeDir, Rank, RankDir, Shape, Splines};

/// The kind of entity an attribute table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrTarget {
    Graph,
    Subgraph,
    Node,
    Edge,
}

impl AttrTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Subgraph => "subgraph",
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for AttrTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text; rendered quoted.
    Str,
    /// Free text or an HTML-like label.
    Label,
    Int,
    /// Floats; integers are accepted as-is.
    Float,
    Bool,
    /// A closed token set; rendered bare.
    Enum(&'static [&'static str]),
}

impl ValueKind {
    pub fn describe(self) -> String {
        match self {
            Self::Str => "string".to_owned(),
            Self::Label => "string or html label".to_owned(),
            Self::Int => "integer".to_owned(),
            Self::Float => "number".to_owned(),
            Self::Bool => "boolean".to_owned(),
            Self::Enum(tokens) => format!("one of {}", tokens.join("/")),
        }
    }

    /// Whether a bare token may stand in for a value of this kind.
    pub(crate) fn accepts_token(self, token: &str) -> bool {
        match self {
            Self::Enum(tokens) => tokens.contains(&token),
            Self::Str | Self::Label => is_bare_id(token),
            Self::Int | Self::Float | Self::Bool => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSpec {
    pub name: &'static str,
    pub kind: ValueKind,
    pub targets: &'static [AttrTarget],
}

impl AttrSpec {
    pub fn applies_to(&self, target: AttrTarget) -> bool {
        self.targets.contains(&target)
    }
}

use AttrTarget::{Edge as E, Graph as G, Node as N, Subgraph as S};

const GRAPH: &[AttrTarget] = &[G];
const SUBGRAPH: &[AttrTarget] = &[S];
const NODE: &[AttrTarget] = &[N];
const EDGE: &[AttrTarget] = &[E];
const GRAPHS: &[AttrTarget] = &[G, S];
const GRAPHS_NODE: &[AttrTarget] = &[G, S, N];
const NODE_EDGE: &[AttrTarget] = &[N, E];
const CLUSTER_NODE_EDGE: &[AttrTarget] = &[S, N, E];
const CLUSTER_NODE: &[AttrTarget] = &[S, N];
const ALL: &[AttrTarget] = &[G, S, N, E];

const fn spec(
    name: &'static str,
    kind: ValueKind,
    targets: &'static [AttrTarget],
) -> AttrSpec {
    AttrSpec { name, kind, targets }
}

const LABEL_JUST: &[&str] = &["l", "r", "c"];
const LABEL_LOC: &[&str] = &["t", "b", "c"];
const ORDERING: &[&str] = &["in", "out"];
const OUTPUT_ORDER: &[&str] = &["breadthfirst", "nodesfirst", "edgesfirst"];
const IMAGE_SCALE: &[&str] = &["true", "false", "width", "height", "both"];

pub static ATTRIBUTES: &[AttrSpec] = &[
    spec("URL", ValueKind::Str, ALL),
    spec("arrowhead", ValueKind::Enum(ArrowType::TOKENS), EDGE),
    spec("arrowsize", ValueKind::Float, EDGE),
    spec("arrowtail", ValueKind::Enum(ArrowType::TOKENS), EDGE),
    spec("bgcolor", ValueKind::Str, GRAPHS),
    spec("center", ValueKind::Bool, GRAPH),
    spec("charset", ValueKind::Str, GRAPH),
    spec("class", ValueKind::Str, ALL),
    spec("color", ValueKind::Str, CLUSTER_NODE_EDGE),
    spec("colorscheme", ValueKind::Str, ALL),
    spec("comment", ValueKind::Str, ALL),
    spec("compound", ValueKind::Bool, GRAPH),
    spec("concentrate", ValueKind::Bool, GRAPH),
    spec("constraint", ValueKind::Bool, EDGE),
    spec("decorate", ValueKind::Bool, EDGE),
    spec("dir", ValueKind::Enum(EdgeDir::TOKENS), EDGE),
    spec("distortion", ValueKind::Float, NODE),
    spec("dpi", ValueKind::Float, GRAPH),
    spec("fillcolor", ValueKind::Str, CLUSTER_NODE_EDGE),
    spec("fixedsize", ValueKind::Bool, NODE),
    spec("fontcolor", ValueKind::Str, ALL),
    spec("fontname", ValueKind::Str, ALL),
    spec("fontsize", ValueKind::Float, ALL),
    spec("forcelabels", ValueKind::Bool, GRAPH),
    spec("group", ValueKind::Str, NODE),
    spec("headclip", ValueKind::Bool, EDGE),
    spec("headlabel", ValueKind::Label, EDGE),
    spec("headport", ValueKind::Enum(CompassPoint::TOKENS), EDGE),
    spec("height", ValueKind::Float, NODE),
    spec("href", ValueKind::Str, ALL),
    spec("id", ValueKind::Str, ALL),
    spec("image", ValueKind::Str, NODE),
    spec("imagescale", ValueKind::Enum(IMAGE_SCALE), NODE),
    spec("label", ValueKind::Label, ALL),
    spec("labelangle", ValueKind::Float, EDGE),
    spec("labeldistance", ValueKind::Float, EDGE),
    spec("labeljust", ValueKind::Enum(LABEL_JUST), GRAPHS),
    spec("labelloc", ValueKind::Enum(LABEL_LOC), GRAPHS_NODE),
    spec("layout", ValueKind::Str, GRAPH),
    spec("lhead", ValueKind::Str, EDGE),
    spec("ltail", ValueKind::Str, EDGE),
    spec("margin", ValueKind::Str, GRAPHS_NODE),
    spec("minlen", ValueKind::Int, EDGE),
    spec("newrank", ValueKind::Bool, GRAPH),
    spec("nodesep", ValueKind::Float, GRAPH),
    spec("nojustify", ValueKind::Bool, GRAPHS_NODE),
    spec("ordering", ValueKind::Enum(ORDERING), GRAPHS_NODE),
    spec("orientation", ValueKind::Float, NODE),
    spec("outputorder", ValueKind::Enum(OUTPUT_ORDER), GRAPH),
    spec("pad", ValueKind::Str, GRAPH),
    spec("pencolor", ValueKind::Str, SUBGRAPH),
    spec("penwidth", ValueKind::Float, CLUSTER_NODE_EDGE),
    spec("peripheries", ValueKind::Int, CLUSTER_NODE),
    spec("rank", ValueKind::Enum(Rank::TOKENS), SUBGRAPH),
    spec("rankdir", ValueKind::Enum(RankDir::TOKENS), GRAPH),
    spec("ranksep", ValueKind::Float, GRAPH),
    spec("ratio", ValueKind::Str, GRAPH),
    spec("regular", ValueKind::Bool, NODE),
    spec("rotate", ValueKind::Int, GRAPH),
    spec("samehead", ValueKind::Str, EDGE),
    spec("sametail", ValueKind::Str, EDGE),
    spec("shape", ValueKind::Enum(Shape::TOKENS), NODE),
    spec("sides", ValueKind::Int, NODE),
    spec("size", ValueKind::Str, GRAPH),
    spec("skew", ValueKind::Float, NODE),
    spec("splines", ValueKind::Enum(Splines::TOKENS), GRAPH),
    spec("style", ValueKind::Str, CLUSTER_NODE_EDGE),
    spec("tailclip", ValueKind::Bool, EDGE),
    spec("taillabel", ValueKind::Label, EDGE),
    spec("tailport", ValueKind::Enum(CompassPoint::TOKENS), EDGE),
    spec("target", ValueKind::Str, ALL),
    spec("tooltip", ValueKind::Str, ALL),
    spec("weight", ValueKind::Int, EDGE),
    spec("width", ValueKind::Float, NODE),
    spec("xlabel", ValueKind::Label, NODE_EDGE),
];

/// Looks up `name` regardless of target.
pub fn find(name: &str) -> Option<&'static AttrSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Looks up `name` as declared for `target`.
pub fn lookup(target: AttrTarget, name: &str) -> Option<&'static AttrSpec> {
    find(name).filter(|spec| spec.applies_to(target))
}

/// All attribute specs that apply to `target`, in catalogue order.
pub fn for_target(target: AttrTarget) -> impl Iterator<Item = &'static AttrSpec> {
    ATTRIBUTES.iter().filter(move |spec| spec.applies_to(target))
}
