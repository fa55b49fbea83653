// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;

/// A graph vertex: immutable id, mutable text label and ordered outgoing connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    text: String,
    connected_ids: Vec<NodeId>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            connected_ids: Vec::new(),
        }
    }

    pub fn with_connections<I, T>(id: impl Into<NodeId>, text: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self {
            id: id.into(),
            text: text.into(),
            connected_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn connected_ids(&self) -> &[NodeId] {
        &self.connected_ids
    }

    /// Appends an outgoing connection. Duplicates and self-loops are kept.
    pub fn push_connection(&mut self, target: NodeId) {
        self.connected_ids.push(target);
    }
}
