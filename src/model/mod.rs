// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! DOT object model.
//!
//! A [`Graph`] owns a [`Body`] of ordered [`Stmt`]s; subgraphs nest further bodies and can
//! double as edge endpoints. Attribute tables are checked against [`schema`] when set.

pub mod attrs;
pub mod graph;
pub mod ids;
pub mod schema;
pub mod stmt;
pub mod values;

pub use attrs::{AttrError, AttrValue, Attributes};
pub use graph::{Body, EdgeOp, EdgeOpMismatch, Graph, Subgraph, CLUSTER_PREFIX};
pub use ids::{CompassPoint, NodeId, ParseCompassPointError};
pub use schema::{AttrSpec, AttrTarget, ValueKind};
pub use stmt::{
    AttrStmt, Attributed, DefaultsKind, Edge, EdgeStmt, NodeStmt, Stmt, Vertex, VertexKind,
};
pub use values::{ArrowType, EdgeDir, ParseTokenError, Rank, RankDir, Shape, Splines, Style};
