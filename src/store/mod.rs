// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for graph documents on disk.
//!
//! Load and save are synchronous whole-document operations; saves replace the destination
//! atomically.

pub mod graph_file;

pub use graph_file::{GraphFile, StoreError, WriteDurability};
