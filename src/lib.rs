// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dotgen: build Graphviz DOT graphs as typed Rust values and print them as DOT text.
//!
//! ```
//! use dotgen::model::Graph;
//!
//! let graph = Graph::digraph().build(|g| {
//!     g.edge("a", "b");
//! });
//! assert_eq!(graph.to_dot(), "digraph {\n  a -> b\n}\n");
//! ```

pub mod doc;
pub mod format;
pub mod model;

pub use format::dot::{export_dot, write_dot};
pub use model::{Body, Graph, Subgraph};
