// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::{Point, Rect};
use crate::model::NodeId;

/// Visual state of one node. Refers to its node by id; the graph stays the owner of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    node_id: NodeId,
    rect: Rect,
    is_selected: bool,
    is_dragged: bool,
}

impl NodeView {
    pub fn new(node_id: NodeId, rect: Rect) -> Self {
        Self {
            node_id,
            rect,
            is_selected: false,
            is_dragged: false,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_dragged(&self) -> bool {
        self.is_dragged
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub(crate) fn set_flags(&mut self, is_selected: bool, is_dragged: bool) {
        self.is_selected = is_selected;
        self.is_dragged = is_dragged;
    }
}
