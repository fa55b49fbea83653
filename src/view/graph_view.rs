// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::geometry::{Point, Rect, Size};
use super::node_view::NodeView;
use crate::model::{DuplicateIdError, Graph, Node, NodeId};

/// Label given to nodes created from the canvas.
pub const NEW_NODE_TEXT: &str = "New Node";

/// Default placement of node views.
///
/// Units are canvas units; the terminal host maps one unit to one cell, so the defaults are
/// sized for that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub node_size: Size,
    /// Top-left corner of the first node in the initial grid.
    pub origin: Point,
    /// Gap between neighbouring nodes in the initial grid.
    pub spacing: Size,
    /// Nodes per grid row before wrapping; zero is treated as one.
    pub columns: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(22.0, 5.0),
            origin: Point::new(2.0, 1.0),
            spacing: Size::new(8.0, 3.0),
            columns: 4,
        }
    }
}

impl ViewConfig {
    /// Top-left corner of the `position`-th node when a view is first built.
    pub fn default_origin(&self, position: usize) -> Point {
        let columns = self.columns.max(1);
        let column = (position % columns) as f32;
        let row = (position / columns) as f32;
        Point::new(
            self.origin.x + column * (self.node_size.width + self.spacing.width),
            self.origin.y + row * (self.node_size.height + self.spacing.height),
        )
    }
}

/// A directed line from the source node's right edge to the target node's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: NodeId,
    pub to: NodeId,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    UnknownNode(NodeId),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "no node view for id {:?}", id.as_str()),
        }
    }
}

impl std::error::Error for ViewError {}

/// Session-level owner of the graph, one [`NodeView`] per node, and derived render data.
///
/// `views[i]` always belongs to the `i`-th node of the graph in insertion order, so the
/// id → view mapping is the graph's own index and cannot drift from it. Every mutation that adds
/// a node goes through [`GraphView::add_node`], which inserts into both or neither.
#[derive(Debug, Clone)]
pub struct GraphView {
    graph: Graph,
    config: ViewConfig,
    views: Vec<NodeView>,
    /// Positions into `views`, back to front.
    draw_order: Vec<usize>,
    /// Outgoing segments, indexed like `views`.
    segments: Vec<Vec<Segment>>,
}

impl GraphView {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, ViewConfig::default())
    }

    pub fn with_config(graph: Graph, config: ViewConfig) -> Self {
        let views = graph
            .iter()
            .enumerate()
            .map(|(position, node)| {
                NodeView::new(
                    node.id().clone(),
                    Rect::new(config.default_origin(position), config.node_size),
                )
            })
            .collect::<Vec<_>>();
        let count = views.len();

        let mut view = Self {
            graph,
            config,
            views,
            draw_order: (0..count).collect(),
            segments: vec![Vec::new(); count],
        };
        view.refresh_segments();
        view.debug_check_one_to_one();
        view
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Views in graph insertion order.
    pub fn node_views(&self) -> std::slice::Iter<'_, NodeView> {
        self.views.iter()
    }

    pub fn node_view(&self, id: &str) -> Option<&NodeView> {
        self.graph.position_of(id).map(|position| &self.views[position])
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    /// The first view, in insertion order, whose rectangle contains `point`.
    pub fn node_view_at(&self, point: Point) -> Option<&NodeView> {
        self.views.iter().find(|view| view.contains(point))
    }

    /// Views back to front; the last one is drawn on top.
    pub fn draw_order(&self) -> impl Iterator<Item = &NodeView> + '_ {
        self.draw_order.iter().map(|&position| &self.views[position])
    }

    pub fn bring_to_front(&mut self, id: &str) -> Result<(), ViewError> {
        let position = self.position(id)?;
        self.draw_order.retain(|&p| p != position);
        self.draw_order.push(position);
        Ok(())
    }

    /// Appends `to` to the connections of `from`. Duplicates and self-loops are not rejected.
    pub fn connect(&mut self, from: &str, to: &str) -> Result<(), ViewError> {
        let from_position = self.position(from)?;
        let to_id = self.views[self.position(to)?].node_id().clone();

        let Some(node) = self.graph.node_mut(from) else {
            return Err(unknown(from));
        };
        node.push_connection(to_id.clone());
        self.refresh_segments_for(from_position);

        tracing::debug!(from, to = %to_id, "connection added");
        Ok(())
    }

    /// Adds `node` to the graph with a view at `origin`. Neither side changes on error.
    pub fn add_node(&mut self, node: Node, origin: Point) -> Result<(), DuplicateIdError> {
        let node_id = node.id().clone();
        self.graph.add_node(node)?;

        let position = self.views.len();
        self.views
            .push(NodeView::new(node_id, Rect::new(origin, self.config.node_size)));
        self.draw_order.push(position);
        self.segments.push(Vec::new());
        self.refresh_segments();
        self.debug_check_one_to_one();
        Ok(())
    }

    /// Creates a `"New Node"` with a fresh id whose view's top-left corner is `origin`.
    pub fn create_node(&mut self, origin: Point) -> NodeId {
        let node_id = self.graph.allocate_node_id();
        if let Err(err) = self.add_node(Node::new(node_id.clone(), NEW_NODE_TEXT), origin) {
            unreachable!("allocator returned a taken id: {err}");
        }

        tracing::debug!(node = %node_id, x = origin.x, y = origin.y, "node created");
        node_id
    }

    /// Repositions a view so its center is `center`. The graph is not touched.
    pub fn move_node(&mut self, id: &str, center: Point) -> Result<(), ViewError> {
        let position = self.position(id)?;
        let size = self.views[position].rect().size;
        self.views[position].set_rect(Rect::centered_at(center, size));
        self.refresh_segments();
        Ok(())
    }

    pub fn set_node_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), ViewError> {
        let Some(node) = self.graph.node_mut(id) else {
            return Err(unknown(id));
        };
        node.set_text(text);
        Ok(())
    }

    /// Marks `id` as the only selected view.
    pub fn set_selection(&mut self, id: &str, dragging: bool) -> Result<(), ViewError> {
        let position = self.position(id)?;
        self.clear_selection();
        self.views[position].set_flags(true, dragging);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for view in &mut self.views {
            view.set_flags(false, false);
        }
    }

    pub fn selected(&self) -> Option<&NodeView> {
        self.views.iter().find(|view| view.is_selected())
    }

    /// All derived segments, grouped by source node in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().flatten()
    }

    pub fn outgoing_segments(&self, id: &str) -> &[Segment] {
        match self.graph.position_of(id) {
            Some(position) => &self.segments[position],
            None => &[],
        }
    }

    /// Recomputes every segment from current view positions.
    pub fn refresh_segments(&mut self) {
        for position in 0..self.views.len() {
            self.refresh_segments_for(position);
        }
    }

    /// Ids that do not resolve to a view are skipped here but stay in the node's data.
    fn refresh_segments_for(&mut self, position: usize) {
        let Some(node) = self.graph.node_at(position) else {
            return;
        };
        let start = self.views[position].rect().right_mid();

        let segments = node
            .connected_ids()
            .iter()
            .filter_map(|target| {
                let target_position = self.graph.position_of(target.as_str())?;
                Some(Segment {
                    from: node.id().clone(),
                    to: target.clone(),
                    start,
                    end: self.views[target_position].rect().left_mid(),
                })
            })
            .collect();
        self.segments[position] = segments;
    }

    fn position(&self, id: &str) -> Result<usize, ViewError> {
        self.graph.position_of(id).ok_or_else(|| unknown(id))
    }

    /// True when the view mapping covers exactly the graph's ids, in the same order.
    pub fn is_one_to_one(&self) -> bool {
        self.views.len() == self.graph.len()
            && self.segments.len() == self.views.len()
            && self.draw_order.len() == self.views.len()
            && self
                .views
                .iter()
                .zip(self.graph.iter())
                .all(|(view, node)| view.node_id() == node.id())
    }

    fn debug_check_one_to_one(&self) {
        debug_assert!(self.is_one_to_one(), "graph view out of sync with graph");
    }
}

fn unknown(id: &str) -> ViewError {
    ViewError::UnknownNode(NodeId::new(id))
}

#[cfg(test)]
mod tests;
