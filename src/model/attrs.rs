// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::ids::is_bare_id;
use super::schema::{self, AttrSpec, AttrTarget, ValueKind};

/// A scalar attribute value.
///
/// `Str` renders quoted; every other variant renders as its bare text (`Html` inside
/// `<...>`).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(SmolStr),
    Int(i64),
    Float(f64),
    Bool(bool),
    Token(SmolStr),
    Html(SmolStr),
}

impl AttrValue {
    pub fn html(markup: impl Into<SmolStr>) -> Self {
        Self::Html(markup.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Token(_) => "token",
            Self::Html(_) => "html label",
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<SmolStr> for AttrValue {
    fn from(value: SmolStr) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    UnknownAttribute {
        name: String,
        target: AttrTarget,
    },
    InvalidValue {
        name: String,
        expected: String,
        found: String,
    },
    InvalidName {
        name: String,
    },
    UnescapedQuote {
        name: String,
    },
    TrailingBackslash {
        name: String,
    },
    UnbalancedHtml {
        name: String,
    },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute { name, target } => {
                write!(f, "unknown {target} attribute: {name}")
            }
            Self::InvalidValue {
                name,
                expected,
                found,
            } => write!(f, "invalid value for attribute {name}: expected {expected}, got {found}"),
            Self::InvalidName { name } => write!(f, "invalid attribute name: {name:?}"),
            Self::UnescapedQuote { name } => write!(
                f,
                "invalid value for attribute {name}: contains an unescaped '\"' (escape it as \\\")"
            ),
            Self::TrailingBackslash { name } => write!(
                f,
                "invalid value for attribute {name}: ends in an unescaped '\\' (escape it as \\\\)"
            ),
            Self::UnbalancedHtml { name } => {
                write!(f, "invalid value for attribute {name}: unbalanced '<' and '>' in html label")
            }
        }
    }
}

impl std::error::Error for AttrError {}

/// Name → value table owned by one graph, subgraph, defaults block, node or edge.
///
/// Keys are unique and keep the position of their first `set`; a later `set` replaces the
/// value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    target: AttrTarget,
    entries: SmallVec<[(SmolStr, AttrValue); 4]>,
}

impl Attributes {
    pub fn new(target: AttrTarget) -> Self {
        Self {
            target,
            entries: SmallVec::new(),
        }
    }

    pub fn target(&self) -> AttrTarget {
        self.target
    }

    /// The catalogue entry `name` resolves to for this table's target, if any.
    pub fn spec(&self, name: &str) -> Option<&'static AttrSpec> {
        schema::lookup(self.target, name)
    }

    /// Sets `name` after checking the value against the attribute catalogue.
    ///
    /// Strings naming a member of an enum-kind attribute are stored as bare tokens. On
    /// error the table is left unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError> {
        let checked = self.check(name, value.into());
        self.store(name, checked)
    }

    /// Sets an attribute the catalogue does not know (or knows with a narrower kind).
    ///
    /// `name` must be a bare DOT identifier. The value is still checked so that it renders
    /// as valid DOT: strings are checked for escapes, html labels for balanced brackets,
    /// tokens must be bare identifiers and floats finite.
    pub fn set_raw(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError> {
        let checked = if is_bare_id(name) {
            check_raw(name, value.into())
        } else {
            Err(AttrError::InvalidName {
                name: name.to_owned(),
            })
        };
        self.store(name, checked)
    }

    fn store(
        &mut self,
        name: &str,
        checked: Result<AttrValue, AttrError>,
    ) -> Result<&mut Self, AttrError> {
        let checked = match checked {
            Ok(checked) => checked,
            Err(err) => {
                tracing::trace!(attr = name, target = %self.target, %err, "rejected attribute");
                return Err(err);
            }
        };

        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = checked,
            None => self.entries.push((SmolStr::new(name), checked)),
        }
        Ok(self)
    }

    /// Sets `name` to `value`, or removes it when `value` is `None`.
    pub fn set_opt<V: Into<AttrValue>>(
        &mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<&mut Self, AttrError> {
        match value {
            Some(value) => self.set(name, value),
            None => {
                self.unset(name);
                Ok(self)
            }
        }
    }

    pub fn unset(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn check(&self, name: &str, value: AttrValue) -> Result<AttrValue, AttrError> {
        let Some(spec) = self.spec(name) else {
            return Err(AttrError::UnknownAttribute {
                name: name.to_owned(),
                target: self.target,
            });
        };

        let invalid = |found: &AttrValue| AttrError::InvalidValue {
            name: name.to_owned(),
            expected: spec.kind.describe(),
            found: describe_value(found),
        };

        match (spec.kind, value) {
            (ValueKind::Enum(_), AttrValue::Str(text) | AttrValue::Token(text)) => {
                if spec.kind.accepts_token(&text) {
                    Ok(AttrValue::Token(text))
                } else {
                    Err(invalid(&AttrValue::Str(text)))
                }
            }
            (ValueKind::Str | ValueKind::Label, AttrValue::Str(text)) => {
                check_escapes(name, &text)?;
                Ok(AttrValue::Str(text))
            }
            (ValueKind::Str | ValueKind::Label, AttrValue::Token(token)) => {
                if spec.kind.accepts_token(&token) {
                    Ok(AttrValue::Token(token))
                } else {
                    Err(invalid(&AttrValue::Token(token)))
                }
            }
            (ValueKind::Label, AttrValue::Html(markup)) => {
                check_html(name, &markup)?;
                Ok(AttrValue::Html(markup))
            }
            (ValueKind::Int, value @ AttrValue::Int(_)) => Ok(value),
            (ValueKind::Float, value @ AttrValue::Int(_)) => Ok(value),
            (ValueKind::Float, AttrValue::Float(number)) if number.is_finite() => {
                Ok(AttrValue::Float(number))
            }
            (ValueKind::Bool, value @ AttrValue::Bool(_)) => Ok(value),
            (_, other) => Err(invalid(&other)),
        }
    }
}

fn describe_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Str(text) => format!("string {text:?}"),
        AttrValue::Token(text) => format!("token {text}"),
        AttrValue::Html(_) => "html label".to_owned(),
        AttrValue::Int(number) => format!("integer {number}"),
        AttrValue::Float(number) => format!("number {number}"),
        AttrValue::Bool(flag) => format!("boolean {flag}"),
    }
}

fn check_raw(name: &str, value: AttrValue) -> Result<AttrValue, AttrError> {
    let invalid = |expected: &str, found: &AttrValue| AttrError::InvalidValue {
        name: name.to_owned(),
        expected: expected.to_owned(),
        found: describe_value(found),
    };

    match value {
        AttrValue::Str(text) => {
            check_escapes(name, &text)?;
            Ok(AttrValue::Str(text))
        }
        AttrValue::Html(markup) => {
            check_html(name, &markup)?;
            Ok(AttrValue::Html(markup))
        }
        AttrValue::Token(token) if is_bare_id(&token) => Ok(AttrValue::Token(token)),
        value @ AttrValue::Token(_) => Err(invalid("bare identifier", &value)),
        AttrValue::Float(number) if !number.is_finite() => {
            Err(invalid("finite number", &AttrValue::Float(number)))
        }
        value => Ok(value),
    }
}

// Escape pairs (`\x`) are skipped. A lone `"` ends the quoted string early and a final `\`
// escapes its closing quote.
fn check_escapes(name: &str, text: &str) -> Result<(), AttrError> {
    let bytes = text.as_bytes();
    let mut at = 0;
    while let Some(offset) = memchr::memchr2(b'\\', b'"', &bytes[at..]) {
        let found = at + offset;
        if bytes[found] == b'"' {
            return Err(AttrError::UnescapedQuote {
                name: name.to_owned(),
            });
        }
        if found + 1 == bytes.len() {
            return Err(AttrError::TrailingBackslash {
                name: name.to_owned(),
            });
        }
        at = found + 2;
    }
    Ok(())
}

fn check_html(name: &str, markup: &str) -> Result<(), AttrError> {
    let mut depth = 0usize;
    for byte in markup.bytes() {
        match byte {
            b'<' => depth += 1,
            b'>' => {
                depth = depth.checked_sub(1).ok_or_else(|| AttrError::UnbalancedHtml {
                    name: name.to_owned(),
                })?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(AttrError::UnbalancedHtml {
            name: name.to_owned(),
        })
    }
}
