// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use super::attrs::{AttrError, AttrValue, Attributes};
use super::ids::NodeId;
use super::schema::AttrTarget;
use super::stmt::{AttrStmt, DefaultsKind, Edge, EdgeStmt, NodeStmt, Stmt, Vertex};

/// Edge operator, fixed by the root graph and inherited by every subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeOp {
    Directed,
    Undirected,
}

impl EdgeOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directed => "->",
            Self::Undirected => "--",
        }
    }

    /// Root keyword: `digraph` or `graph`.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Directed => "digraph",
            Self::Undirected => "graph",
        }
    }
}

impl fmt::Display for EdgeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge endpoint subgraph whose operator differs from the body it is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOpMismatch {
    pub expected: EdgeOp,
    pub found: EdgeOp,
}

impl fmt::Display for EdgeOpMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge endpoint subgraph uses `{}` but this {} uses `{}`",
            self.found,
            self.expected.keyword(),
            self.expected
        )
    }
}

impl std::error::Error for EdgeOpMismatch {}

/// The ordered statement list of a graph or subgraph, plus its bare `key=value` settings.
///
/// Every append returns a handle to the new statement so attributes are attached to
/// exactly that statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    op: EdgeOp,
    attrs: Attributes,
    statements: Vec<Stmt>,
}

impl Body {
    fn new(op: EdgeOp, target: AttrTarget) -> Self {
        Self {
            op,
            attrs: Attributes::new(target),
            statements: Vec::new(),
        }
    }

    pub fn op(&self) -> EdgeOp {
        self.op
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    /// Sets a bare body-level attribute (`rank=same`, `center=true`).
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError> {
        self.attrs.set(name, value)?;
        Ok(self)
    }

    /// Bare body-level attribute outside the catalogue; see [`Attributes::set_raw`].
    pub fn set_raw(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError> {
        self.attrs.set_raw(name, value)?;
        Ok(self)
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn node(&mut self, id: impl Into<NodeId>) -> &mut NodeStmt {
        self.statements.push(Stmt::Node(NodeStmt::new(id.into())));
        match self.statements.last_mut() {
            Some(Stmt::Node(stmt)) => stmt,
            _ => unreachable!("last statement is the node just pushed"),
        }
    }

    /// Appends `from -> to` (or `--`).
    ///
    /// # Panics
    ///
    /// If an endpoint is a subgraph built under the other edge operator. Use
    /// [`Body::try_edge`] when endpoints come from another graph.
    pub fn edge(&mut self, from: impl Into<Vertex>, to: impl Into<Vertex>) -> &mut EdgeStmt {
        match self.try_edge(from, to) {
            Ok(stmt) => stmt,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_edge(
        &mut self,
        from: impl Into<Vertex>,
        to: impl Into<Vertex>,
    ) -> Result<&mut EdgeStmt, EdgeOpMismatch> {
        let (from, to) = (from.into(), to.into());
        for vertex in [&from, &to] {
            if let Vertex::Subgraph(subgraph) = vertex {
                if subgraph.op() != self.op {
                    return Err(EdgeOpMismatch {
                        expected: self.op,
                        found: subgraph.op(),
                    });
                }
            }
        }

        let edge = Edge::new(from, to, self.op);
        self.statements.push(Stmt::Edge(EdgeStmt::new(edge)));
        match self.statements.last_mut() {
            Some(Stmt::Edge(stmt)) => Ok(stmt),
            _ => unreachable!("last statement is the edge just pushed"),
        }
    }

    /// `node[...]`, rendered even when left empty.
    pub fn node_defaults(&mut self) -> &mut AttrStmt {
        self.push_defaults(DefaultsKind::Node, true)
    }

    /// `edge[...]`, rendered even when left empty.
    pub fn edge_defaults(&mut self) -> &mut AttrStmt {
        self.push_defaults(DefaultsKind::Edge, true)
    }

    /// `graph[...]`, rendered even when left empty.
    pub fn graph_defaults(&mut self) -> &mut AttrStmt {
        self.push_defaults(DefaultsKind::Graph, true)
    }

    /// A defaults statement that is dropped from the output if no attribute is set on it.
    pub fn defaults(&mut self, kind: DefaultsKind) -> &mut AttrStmt {
        self.push_defaults(kind, false)
    }

    fn push_defaults(&mut self, kind: DefaultsKind, standalone: bool) -> &mut AttrStmt {
        let stmt = AttrStmt::new(kind, self.attrs.target(), standalone);
        self.statements.push(Stmt::Defaults(stmt));
        match self.statements.last_mut() {
            Some(Stmt::Defaults(stmt)) => stmt,
            _ => unreachable!("last statement is the defaults block just pushed"),
        }
    }

    /// Builds a subgraph, appends it to this body and returns a shared handle that can
    /// also be used as an edge endpoint.
    pub fn subgraph(&mut self, name: Option<&str>, build: impl FnOnce(&mut Body)) -> Rc<Subgraph> {
        match self.try_subgraph(name, |body| {
            build(body);
            Ok::<(), Infallible>(())
        }) {
            Ok(subgraph) => subgraph,
            Err(never) => match never {},
        }
    }

    pub fn try_subgraph<E>(
        &mut self,
        name: Option<&str>,
        build: impl FnOnce(&mut Body) -> Result<(), E>,
    ) -> Result<Rc<Subgraph>, E> {
        let subgraph = self.try_floating_subgraph(name, build)?;
        self.statements.push(Stmt::Subgraph(Rc::clone(&subgraph)));
        Ok(subgraph)
    }

    /// Builds a subgraph without appending it. It only appears in the output where an
    /// edge uses it as an endpoint.
    pub fn floating_subgraph(
        &self,
        name: Option<&str>,
        build: impl FnOnce(&mut Body),
    ) -> Rc<Subgraph> {
        match self.try_floating_subgraph(name, |body| {
            build(body);
            Ok::<(), Infallible>(())
        }) {
            Ok(subgraph) => subgraph,
            Err(never) => match never {},
        }
    }

    pub fn try_floating_subgraph<E>(
        &self,
        name: Option<&str>,
        build: impl FnOnce(&mut Body) -> Result<(), E>,
    ) -> Result<Rc<Subgraph>, E> {
        let mut subgraph = Subgraph::new(name, self.op);
        build(&mut subgraph.body)?;
        Ok(Rc::new(subgraph))
    }

    /// Appends a `cluster_<name>` subgraph, which layout engines draw as a boxed group.
    pub fn cluster(&mut self, name: &str, build: impl FnOnce(&mut Body)) -> Rc<Subgraph> {
        let name = format!("{CLUSTER_PREFIX}{name}");
        self.subgraph(Some(&name), build)
    }

    pub fn try_cluster<E>(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut Body) -> Result<(), E>,
    ) -> Result<Rc<Subgraph>, E> {
        let name = format!("{CLUSTER_PREFIX}{name}");
        self.try_subgraph(Some(&name), build)
    }
}

pub const CLUSTER_PREFIX: &str = "cluster_";

/// A nested body. Shared through `Rc` because one subgraph can be both a statement and
/// any number of edge endpoints; it is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Subgraph {
    name: Option<SmolStr>,
    body: Body,
}

impl Subgraph {
    pub(crate) fn new(name: Option<&str>, op: EdgeOp) -> Self {
        Self {
            name: name.map(SmolStr::new),
            body: Body::new(op, AttrTarget::Subgraph),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_cluster(&self) -> bool {
        self.name().is_some_and(|name| name.starts_with("cluster"))
    }

    pub fn op(&self) -> EdgeOp {
        self.body.op
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// The root of a DOT document.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: Option<SmolStr>,
    strict: bool,
    body: Body,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        let op = if directed { EdgeOp::Directed } else { EdgeOp::Undirected };
        Self {
            name: None,
            strict: false,
            body: Body::new(op, AttrTarget::Graph),
        }
    }

    pub fn digraph() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn set_name<T: Into<SmolStr>>(&mut self, name: Option<T>) {
        self.name = name.map(Into::into);
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Runs `build` against the root body.
    pub fn build(mut self, build: impl FnOnce(&mut Body)) -> Self {
        build(&mut self.body);
        self
    }

    pub fn try_build<E>(mut self, build: impl FnOnce(&mut Body) -> Result<(), E>) -> Result<Self, E> {
        build(&mut self.body)?;
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn op(&self) -> EdgeOp {
        self.body.op
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn to_dot(&self) -> String {
        crate::format::dot::export_dot(self)
    }

    /// Streams the DOT text into `out` without building it in memory first.
    pub fn write_dot<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        crate::format::dot::write_dot(out, self)
    }
}
