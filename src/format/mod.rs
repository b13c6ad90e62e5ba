// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text export of the object model.

pub mod dot;

pub use dot::{export_attrs, export_dot, export_stmt, export_subgraph, write_dot, AttrLayout};
