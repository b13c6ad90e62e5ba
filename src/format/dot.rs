// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! DOT text emission.
//!
//! A depth-first, pre-order walk over the statement lists. Each nesting level adds one
//! [`INDENT`]. Subgraphs print their whole body wherever they occur: at their statement
//! position and again at every edge that uses them as an endpoint.

use std::fmt;

use crate::model::ids::{write_id, write_node_id};
use crate::model::{AttrValue, Attributed, Attributes, Body, Edge, Graph, Stmt, Subgraph, Vertex};

pub const INDENT: &str = "  ";

// Plain decimal text stays readable inside this magnitude range; outside it floats are
// written in exponent form, which DOT only accepts quoted.
const PLAIN_FLOAT_MIN: f64 = 1e-6;
const PLAIN_FLOAT_MAX: f64 = 1e16;

/// How an attribute table is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrLayout {
    /// `[a=1,b="x"]` after a node, edge or defaults keyword.
    Inline,
    /// One `a=1` line per entry, as used for bare graph and subgraph settings.
    Block,
}

struct Emit<F>(F);

impl<F> fmt::Display for Emit<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

// Collects a writer routine into a `String` through `Display`.
fn render<F>(routine: F) -> String
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    Emit(routine).to_string()
}

pub fn export_dot(graph: &Graph) -> String {
    let out = render(|f| write_dot(f, graph));
    tracing::debug!(
        kind = graph.op().keyword(),
        statements = graph.body().len(),
        bytes = out.len(),
        "exported dot graph"
    );
    out
}

/// Streams the whole graph into `out`.
pub fn write_dot<W: fmt::Write + ?Sized>(out: &mut W, graph: &Graph) -> fmt::Result {
    if graph.is_strict() {
        out.write_str("strict ")?;
    }
    out.write_str(graph.op().keyword())?;
    out.write_char(' ')?;
    if let Some(name) = graph.name() {
        write_id(out, name)?;
        out.write_char(' ')?;
    }
    out.write_str("{\n")?;

    let body = graph.body();
    if !body.attrs().is_empty() {
        write_attr_block(out, body.attrs(), 0)?;
        out.write_char('\n')?;
    }
    write_statements(out, body, 1)?;
    out.write_str("}\n")
}

/// Renders one subgraph as it appears at `indent`: leading indent included, no trailing
/// newline.
pub fn export_subgraph(subgraph: &Subgraph, indent: usize) -> String {
    render(|f| {
        write_indent(f, indent)?;
        write_subgraph(f, subgraph, indent)
    })
}

/// Renders one statement line (without newline), or `None` for a defaults statement
/// that produces no output.
pub fn export_stmt(stmt: &Stmt, indent: usize) -> Option<String> {
    stmt_renders(stmt).then(|| render(|f| write_stmt(f, stmt, indent)))
}

pub fn export_attrs(attrs: &Attributes, layout: AttrLayout, indent: usize) -> String {
    render(|f| match layout {
        AttrLayout::Inline => write_attr_list(f, attrs),
        AttrLayout::Block => write_attr_block(f, attrs, indent),
    })
}

fn write_indent<W: fmt::Write + ?Sized>(out: &mut W, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn stmt_renders(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Defaults(defaults) => defaults.renders(),
        _ => true,
    }
}

fn write_statements<W: fmt::Write + ?Sized>(out: &mut W, body: &Body, indent: usize) -> fmt::Result {
    for stmt in body.statements().iter().filter(|stmt| stmt_renders(stmt)) {
        write_stmt(out, stmt, indent)?;
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_stmt<W: fmt::Write + ?Sized>(out: &mut W, stmt: &Stmt, indent: usize) -> fmt::Result {
    write_indent(out, indent)?;
    match stmt {
        Stmt::Node(node) => {
            write_node_id(out, node.id())?;
            write_trailing_attrs(out, node.attrs())
        }
        Stmt::Edge(edge) => {
            write_edge(out, edge.edge(), indent)?;
            write_trailing_attrs(out, edge.attrs())
        }
        Stmt::Defaults(defaults) => {
            out.write_str(defaults.kind().as_str())?;
            write_attr_list(out, defaults.attrs())
        }
        Stmt::Subgraph(subgraph) => write_subgraph(out, subgraph, indent),
    }
}

fn write_edge<W: fmt::Write + ?Sized>(out: &mut W, edge: &Edge, indent: usize) -> fmt::Result {
    write_vertex(out, edge.from(), indent)?;
    out.write_char(' ')?;
    out.write_str(edge.op().as_str())?;
    out.write_char(' ')?;
    write_vertex(out, edge.to(), indent)
}

fn write_vertex<W: fmt::Write + ?Sized>(out: &mut W, vertex: &Vertex, indent: usize) -> fmt::Result {
    match vertex {
        Vertex::Node(id) => write_node_id(out, id),
        Vertex::Subgraph(subgraph) => write_subgraph(out, subgraph, indent),
    }
}

// Header starts at the current cursor; the caller has already indented.
fn write_subgraph<W: fmt::Write + ?Sized>(
    out: &mut W,
    subgraph: &Subgraph,
    indent: usize,
) -> fmt::Result {
    out.write_str("subgraph ")?;
    if let Some(name) = subgraph.name() {
        write_id(out, name)?;
        out.write_char(' ')?;
    }
    out.write_str("{\n")?;

    let body = subgraph.body();
    write_attr_block(out, body.attrs(), indent)?;
    write_statements(out, body, indent + 1)?;

    write_indent(out, indent)?;
    out.write_char('}')
}

fn write_trailing_attrs<W: fmt::Write + ?Sized>(out: &mut W, attrs: &Attributes) -> fmt::Result {
    if attrs.is_empty() {
        return Ok(());
    }
    write_attr_list(out, attrs)
}

fn write_attr_list<W: fmt::Write + ?Sized>(out: &mut W, attrs: &Attributes) -> fmt::Result {
    out.write_char('[')?;
    for (index, (name, value)) in attrs.iter().enumerate() {
        if index > 0 {
            out.write_char(',')?;
        }
        out.write_str(name)?;
        out.write_char('=')?;
        write_value(out, value)?;
    }
    out.write_char(']')
}

fn write_attr_block<W: fmt::Write + ?Sized>(
    out: &mut W,
    attrs: &Attributes,
    indent: usize,
) -> fmt::Result {
    for (name, value) in attrs.iter() {
        write_indent(out, indent)?;
        out.write_str(name)?;
        out.write_char('=')?;
        write_value(out, value)?;
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_value<W: fmt::Write + ?Sized>(out: &mut W, value: &AttrValue) -> fmt::Result {
    match value {
        AttrValue::Str(text) => {
            out.write_char('"')?;
            out.write_str(text)?;
            out.write_char('"')
        }
        AttrValue::Int(number) => {
            let mut buf = itoa::Buffer::new();
            out.write_str(buf.format(*number))
        }
        AttrValue::Float(number) => write_float(out, *number),
        AttrValue::Bool(flag) => out.write_str(if *flag { "true" } else { "false" }),
        AttrValue::Token(token) => out.write_str(token),
        AttrValue::Html(markup) => {
            out.write_char('<')?;
            out.write_str(markup)?;
            out.write_char('>')
        }
    }
}

fn write_float<W: fmt::Write + ?Sized>(out: &mut W, number: f64) -> fmt::Result {
    let magnitude = number.abs();
    if number == 0.0 || (PLAIN_FLOAT_MIN..PLAIN_FLOAT_MAX).contains(&magnitude) {
        write!(out, "{number}")
    } else {
        write!(out, "\"{number:e}\"")
    }
}
