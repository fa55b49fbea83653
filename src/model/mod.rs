// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logical graph model.
//!
//! A [`Graph`] owns its [`Node`]s; everything visual lives in [`crate::view`] and refers back to
//! nodes by [`NodeId`].

pub mod fixtures;
pub mod graph;
pub mod ids;
pub mod node;

pub use graph::{DuplicateIdError, Graph};
pub use ids::{NodeId, GENERATED_ID_PREFIX};
pub use node::Node;
