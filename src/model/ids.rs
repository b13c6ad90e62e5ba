// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Port direction attached to a node reference (`a:ne`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    C,
    Default,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 10] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
        Self::C,
        Self::Default,
    ];

    pub const TOKENS: &'static [&'static str] =
        &["n", "ne", "e", "se", "s", "sw", "w", "nw", "c", "_"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
            Self::C => "c",
            Self::Default => "_",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCompassPointError {
    value: String,
}

impl fmt::Display for ParseCompassPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid compass point: {:?} (expected one of n/ne/e/se/s/sw/w/nw/c/_)",
            self.value
        )
    }
}

impl std::error::Error for ParseCompassPointError {}

impl FromStr for CompassPoint {
    type Err = ParseCompassPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|point| point.as_str() == s)
            .ok_or_else(|| ParseCompassPointError { value: s.to_owned() })
    }
}

/// A node reference: a name plus an optional compass port.
///
/// Mentions are not deduplicated; two statements naming `a` are two independent
/// statements that DOT itself folds into one logical node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    name: SmolStr,
    port: Option<CompassPoint>,
}

impl NodeId {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            port: None,
        }
    }

    pub fn with_port(name: impl Into<SmolStr>, port: CompassPoint) -> Self {
        Self {
            name: name.into(),
            port: Some(port),
        }
    }

    /// Returns the same node name pointing at `port`.
    pub fn at(mut self, port: CompassPoint) -> Self {
        self.port = Some(port);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> Option<CompassPoint> {
        self.port
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<SmolStr> for NodeId {
    fn from(name: SmolStr) -> Self {
        Self::new(name)
    }
}

impl From<(&str, CompassPoint)> for NodeId {
    fn from((name, port): (&str, CompassPoint)) -> Self {
        Self::with_port(name, port)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node_id(f, self)
    }
}

/// Writes `id` as `name` or `name:port`.
pub fn write_node_id<W: fmt::Write + ?Sized>(out: &mut W, id: &NodeId) -> fmt::Result {
    write_id(out, &id.name)?;
    if let Some(port) = id.port {
        out.write_char(':')?;
        out.write_str(port.as_str())?;
    }
    Ok(())
}

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Whether `s` can be written as a DOT ID without surrounding quotes.
///
/// Accepts identifiers (letters, digits, `_` and non-ASCII, not starting with a digit) and
/// numerals (`-?(.[0-9]+|[0-9]+(.[0-9]*)?)`). Keywords are never bare.
pub fn is_bare_id(s: &str) -> bool {
    if s.is_empty() || KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(s)) {
        return false;
    }
    is_identifier(s) || is_numeral(s)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let id_char = |c: char| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii();
    (first == '_' || first.is_ascii_alphabetic() || !first.is_ascii()) && chars.all(id_char)
}

fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match frac {
        None => !int.is_empty() && all_digits(int),
        Some(frac) => {
            all_digits(int) && all_digits(frac) && (!int.is_empty() || !frac.is_empty())
        }
    }
}

/// Writes `s` as a DOT ID, quoting (and escaping `"`) when it is not bare.
pub fn write_id<W: fmt::Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    if is_bare_id(s) {
        return out.write_str(s);
    }
    out.write_char('"')?;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        // A backslash right before a quote (escaped or closing) would swallow it.
        let doubled = ch == '\\' && matches!(chars.peek(), None | Some(&'"'));
        if ch == '"' || doubled {
            out.write_char('\\')?;
        }
        out.write_char(ch)?;
    }
    out.write_char('"')
}
