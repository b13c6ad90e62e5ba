// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::rc::Rc;

use super::attrs::{AttrError, AttrValue, Attributes};
use super::graph::{EdgeOp, Subgraph};
use super::ids::{CompassPoint, NodeId};
use super::schema::AttrTarget;

/// Shared attribute access for everything that owns an [`Attributes`] table.
pub trait Attributed {
    fn attrs(&self) -> &Attributes;

    fn attrs_mut(&mut self) -> &mut Attributes;

    fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError>
    where
        Self: Sized,
    {
        self.attrs_mut().set(name, value)?;
        Ok(self)
    }

    /// Sets an attribute outside the catalogue; see [`Attributes::set_raw`].
    fn set_raw(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self, AttrError>
    where
        Self: Sized,
    {
        self.attrs_mut().set_raw(name, value)?;
        Ok(self)
    }

    fn set_opt<V: Into<AttrValue>>(
        &mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<&mut Self, AttrError>
    where
        Self: Sized,
    {
        self.attrs_mut().set_opt(name, value)?;
        Ok(self)
    }

    fn unset(&mut self, name: &str) -> Option<AttrValue> {
        self.attrs_mut().unset(name)
    }
}

/// An edge endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Vertex {
    Node(NodeId),
    Subgraph(Rc<Subgraph>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Node,
    Subgraph,
}

impl Vertex {
    pub fn kind(&self) -> VertexKind {
        match self {
            Self::Node(_) => VertexKind::Node,
            Self::Subgraph(_) => VertexKind::Subgraph,
        }
    }
}

impl From<NodeId> for Vertex {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::Node(name.into())
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Self::Node(name.into())
    }
}

impl From<(&str, CompassPoint)> for Vertex {
    fn from(id: (&str, CompassPoint)) -> Self {
        Self::Node(id.into())
    }
}

impl From<Rc<Subgraph>> for Vertex {
    fn from(subgraph: Rc<Subgraph>) -> Self {
        Self::Subgraph(subgraph)
    }
}

impl From<&Rc<Subgraph>> for Vertex {
    fn from(subgraph: &Rc<Subgraph>) -> Self {
        Self::Subgraph(Rc::clone(subgraph))
    }
}

/// One connection. The operator comes from the body the edge was declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    from: Vertex,
    to: Vertex,
    op: EdgeOp,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, op: EdgeOp) -> Self {
        Self { from, to, op }
    }

    pub fn from(&self) -> &Vertex {
        &self.from
    }

    pub fn to(&self) -> &Vertex {
        &self.to
    }

    pub fn op(&self) -> EdgeOp {
        self.op
    }

    /// Endpoint kinds, e.g. `(Node, Subgraph)`.
    pub fn shape(&self) -> (VertexKind, VertexKind) {
        (self.from.kind(), self.to.kind())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeStmt {
    id: NodeId,
    attrs: Attributes,
}

impl NodeStmt {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            attrs: Attributes::new(AttrTarget::Node),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

impl Attributed for NodeStmt {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStmt {
    edge: Edge,
    attrs: Attributes,
}

impl EdgeStmt {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            attrs: Attributes::new(AttrTarget::Edge),
        }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }
}

impl Attributed for EdgeStmt {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

/// Which entities a defaults statement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultsKind {
    Graph,
    Node,
    Edge,
}

impl DefaultsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for DefaultsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `graph[...]`, `node[...]` or `edge[...]`.
///
/// A standalone block renders even when empty (`node[]`); a non-standalone one is only
/// written once it holds attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrStmt {
    kind: DefaultsKind,
    attrs: Attributes,
    standalone: bool,
}

impl AttrStmt {
    /// `graph_target` is the table kind `graph[...]` validates against: the root graph's
    /// or a subgraph's.
    pub fn new(kind: DefaultsKind, graph_target: AttrTarget, standalone: bool) -> Self {
        let target = match kind {
            DefaultsKind::Graph => graph_target,
            DefaultsKind::Node => AttrTarget::Node,
            DefaultsKind::Edge => AttrTarget::Edge,
        };
        Self {
            kind,
            attrs: Attributes::new(target),
            standalone,
        }
    }

    pub fn kind(&self) -> DefaultsKind {
        self.kind
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    /// Whether this statement produces a line.
    pub fn renders(&self) -> bool {
        self.standalone || !self.attrs.is_empty()
    }
}

impl Attributed for AttrStmt {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

/// One element of a graph or subgraph body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Node(NodeStmt),
    Edge(EdgeStmt),
    Defaults(AttrStmt),
    Subgraph(Rc<Subgraph>),
}
