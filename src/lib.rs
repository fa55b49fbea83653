// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphedit: an interactive node-graph editor.
//!
//! The logical [`model::Graph`] is persisted as JSON by [`store::GraphFile`], mirrored visually by
//! [`view::GraphView`], and edited through the pointer gesture state machine in [`interaction`].
//! [`editor::Editor`] ties one session together and [`tui`] hosts it in a terminal.

pub mod editor;
pub mod format;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
pub mod tui;
pub mod view;
