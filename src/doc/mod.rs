// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON graph documents.
//!
//! A [`GraphDoc`] describes a graph as data. Converting it goes through the same
//! construction calls a Rust caller would make, so every attribute is checked against the
//! catalogue and errors carry the path of the offending entity (`body[2].subgraph.body[0]`).

mod types;

use std::fmt;

pub use types::{
    AttrLiteral, AttrMap, DefaultsDoc, DefaultsKindDoc, EdgeDoc, GraphDoc, NodeDoc, StmtDoc,
    SubgraphDoc, VertexDoc,
};

use crate::model::{
    AttrError, AttrValue, Attributed, Attributes, Body, CompassPoint, Graph, NodeId, ValueKind,
    Vertex,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    Json { message: String },
    Attr { path: String, source: AttrError },
    InvalidPort { path: String, port: String },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { message } => write!(f, "invalid graph document: {message}"),
            Self::Attr { path, source } => write!(f, "{path}: {source}"),
            Self::InvalidPort { path, port } => write!(
                f,
                "{path}: invalid port {port:?} (expected one of n/ne/e/se/s/sw/w/nw/c/_)"
            ),
        }
    }
}

impl std::error::Error for DocError {}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

pub fn parse_document(src: &str) -> Result<GraphDoc, DocError> {
    Ok(serde_json::from_str(src)?)
}

/// Parses a JSON document and returns its DOT text.
pub fn render_document(src: &str) -> Result<String, DocError> {
    let doc = parse_document(src)?;
    let graph = doc.to_graph()?;
    Ok(graph.to_dot())
}

/// JSON Schema describing [`GraphDoc`], pretty-printed.
pub fn document_schema() -> Result<String, DocError> {
    let schema = schemars::schema_for!(GraphDoc);
    Ok(serde_json::to_string_pretty(&schema)?)
}

impl GraphDoc {
    pub fn to_graph(&self) -> Result<Graph, DocError> {
        let mut graph = Graph::new(self.directed).with_strict(self.strict);
        graph.set_name(self.name.as_deref());

        let body = graph.body_mut();
        apply_attrs(body.attrs_mut(), &self.attrs, "attrs")?;
        build_body(body, &self.body, "body")?;

        tracing::trace!(
            statements = graph.body().len(),
            directed = self.directed,
            "converted graph document"
        );
        Ok(graph)
    }
}

fn build_body(body: &mut Body, stmts: &[StmtDoc], path: &str) -> Result<(), DocError> {
    for (index, stmt) in stmts.iter().enumerate() {
        let path = format!("{path}[{index}]");
        match stmt {
            StmtDoc::Node(node) => {
                let id = node_id(&node.id, node.port.as_deref(), &path)?;
                let stmt = body.node(id);
                apply_attrs(stmt.attrs_mut(), &node.attrs, &path)?;
            }
            StmtDoc::Edge(edge) => {
                let from = vertex(body, &edge.from, &format!("{path}.from"))?;
                let to = vertex(body, &edge.to, &format!("{path}.to"))?;
                let stmt = body.edge(from, to);
                apply_attrs(stmt.attrs_mut(), &edge.attrs, &path)?;
            }
            StmtDoc::Defaults(defaults) => {
                let stmt = match defaults.kind {
                    DefaultsKindDoc::Graph => body.graph_defaults(),
                    DefaultsKindDoc::Node => body.node_defaults(),
                    DefaultsKindDoc::Edge => body.edge_defaults(),
                };
                apply_attrs(stmt.attrs_mut(), &defaults.attrs, &path)?;
            }
            StmtDoc::Subgraph(subgraph) => {
                let path = format!("{path}.subgraph");
                body.try_subgraph(subgraph.name.as_deref(), |inner| {
                    fill_subgraph(inner, subgraph, &path)
                })?;
            }
        }
    }
    Ok(())
}

fn fill_subgraph(body: &mut Body, doc: &SubgraphDoc, path: &str) -> Result<(), DocError> {
    apply_attrs(body.attrs_mut(), &doc.attrs, path)?;
    build_body(body, &doc.body, &format!("{path}.body"))
}

fn vertex(body: &Body, doc: &VertexDoc, path: &str) -> Result<Vertex, DocError> {
    match doc {
        VertexDoc::Id(id) => Ok(Vertex::Node(NodeId::new(id.as_str()))),
        VertexDoc::Port { id, port } => {
            Ok(Vertex::Node(node_id(id, Some(port.as_str()), path)?))
        }
        VertexDoc::Subgraph { subgraph } => {
            let path = format!("{path}.subgraph");
            let floating = body.try_floating_subgraph(subgraph.name.as_deref(), |inner| {
                fill_subgraph(inner, subgraph, &path)
            })?;
            Ok(Vertex::Subgraph(floating))
        }
    }
}

fn node_id(name: &str, port: Option<&str>, path: &str) -> Result<NodeId, DocError> {
    let Some(port) = port else {
        return Ok(NodeId::new(name));
    };
    let port: CompassPoint = port.parse().map_err(|_| DocError::InvalidPort {
        path: path.to_owned(),
        port: port.to_owned(),
    })?;
    Ok(NodeId::with_port(name, port))
}

fn apply_attrs(attrs: &mut Attributes, map: &AttrMap, path: &str) -> Result<(), DocError> {
    for (name, literal) in map {
        let value = literal_value(attrs, name, literal);
        attrs.set(name, value).map_err(|source| DocError::Attr {
            path: path.to_owned(),
            source,
        })?;
    }
    Ok(())
}

fn literal_value(attrs: &Attributes, name: &str, literal: &AttrLiteral) -> AttrValue {
    match literal {
        AttrLiteral::Bool(flag) => AttrValue::Bool(*flag),
        AttrLiteral::Int(number) => AttrValue::Int(*number),
        AttrLiteral::Float(number) => AttrValue::Float(*number),
        AttrLiteral::Text(text) => {
            // `<...>` on a label kind is markup; the text itself is the html body, so
            // `"<b>A</b>"` renders as `<<b>A</b>>`.
            let is_label = attrs.spec(name).is_some_and(|spec| spec.kind == ValueKind::Label);
            if is_label && text.starts_with('<') && text.ends_with('>') {
                AttrValue::html(text.as_str())
            } else {
                AttrValue::from(text.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{document_schema, parse_document, render_document, DocError};
    use crate::model::AttrError;

    #[test]
    fn renders_a_minimal_document() {
        let dot = render_document(r#"{"directed": true, "body": [{"edge": {"from": "a", "to": "b"}}]}"#)
            .expect("render");
        assert_eq!(dot, "digraph {\n  a -> b\n}\n");
    }

    #[test]
    fn renders_every_statement_kind() {
        let src = r#"{
            "name": "G",
            "strict": true,
            "attrs": {"rankdir": "LR"},
            "body": [
                {"defaults": {"kind": "node", "attrs": {"shape": "box"}}},
                {"defaults": {"kind": "edge"}},
                {"node": {"id": "a", "attrs": {"label": "<b>A</b>", "fontsize": 12}}},
                {"subgraph": {"attrs": {"rank": "same"}, "body": [{"node": {"id": "x"}}]}},
                {"edge": {"from": {"id": "a", "port": "e"}, "to": {"subgraph": {"body": [{"node": {"id": "y"}}]}}, "attrs": {"constraint": false}}}
            ]
        }"#;
        let expected = concat!(
            "strict graph G {\n",
            "rankdir=LR\n",
            "\n",
            "  node[shape=box]\n",
            "  edge[]\n",
            "  a[fontsize=12,label=<<b>A</b>>]\n",
            "  subgraph {\n",
            "  rank=same\n",
            "    x\n",
            "  }\n",
            "  a:e -- subgraph {\n",
            "    y\n",
            "  }[constraint=false]\n",
            "}\n",
        );
        assert_eq!(render_document(src).expect("render"), expected);
    }

    #[test]
    fn attribute_errors_carry_their_path() {
        let src = r#"{"body": [
            {"node": {"id": "a"}},
            {"subgraph": {"body": [{"node": {"id": "b", "attrs": {"shape": "blob"}}}]}}
        ]}"#;
        let err = render_document(src).expect_err("invalid shape");
        let DocError::Attr { path, source } = err else {
            panic!("expected attribute error, got {err:?}");
        };
        assert_eq!(path, "body[1].subgraph.body[0]");
        assert!(matches!(source, AttrError::InvalidValue { .. }));
    }

    #[test]
    fn html_labels_keep_their_outer_brackets() {
        let dot = render_document(r#"{"body": [{"node": {"id": "hub", "attrs": {"label": "<i>hub</i>"}}}]}"#)
            .expect("render");
        assert_eq!(dot, "graph {\n  hub[label=<<i>hub</i>>]\n}\n");

        let err = render_document(r#"{"body": [{"node": {"id": "a", "attrs": {"label": "<b>A</b>>"}}}]}"#)
            .expect_err("unbalanced markup");
        assert_eq!(
            err,
            DocError::Attr {
                path: "body[0]".to_owned(),
                source: AttrError::UnbalancedHtml {
                    name: "label".to_owned(),
                },
            }
        );
    }

    #[test]
    fn invalid_ports_are_reported() {
        let src = r#"{"body": [{"node": {"id": "a", "port": "up"}}]}"#;
        let err = render_document(src).expect_err("invalid port");
        assert_eq!(
            err,
            DocError::InvalidPort {
                path: "body[0]".to_owned(),
                port: "up".to_owned(),
            }
        );
    }

    #[test]
    fn unknown_fields_are_json_errors() {
        let err = parse_document(r#"{"directed": true, "colour": "red"}"#).expect_err("unknown field");
        assert!(matches!(err, DocError::Json { .. }));
        assert!(err.to_string().starts_with("invalid graph document:"));
    }

    #[test]
    fn schema_mentions_statement_kinds() {
        let schema = document_schema().expect("schema");
        for key in ["\"node\"", "\"edge\"", "\"defaults\"", "\"subgraph\""] {
            assert!(schema.contains(key), "schema should mention {key}");
        }
    }
}
