// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Visual layer kept in sync with the logical graph.
//!
//! [`GraphView`] owns the [`crate::model::Graph`] for an editing session together with one
//! [`NodeView`] per node, the draw order, and the connection segments derived from current
//! positions.

pub mod geometry;
pub mod graph_view;
pub mod node_view;

pub use geometry::{Point, Rect, Size};
pub use graph_view::{GraphView, Segment, ViewConfig, ViewError, NEW_NODE_TEXT};
pub use node_view::NodeView;
