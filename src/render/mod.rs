// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render step.
//!
//! [`build_scene`] flattens a [`GraphView`] and the controller's transient state into plain
//! drawing primitives. Hosts paint a [`Scene`] and never reach back into the graph.

use crate::interaction::InteractionController;
use crate::model::NodeId;
use crate::view::{GraphView, Point, Rect, Segment};

/// How far the arrow head's base sits behind the segment end, along the segment.
pub const ARROW_HEAD_LENGTH: f32 = 10.0;
/// Half width of the arrow head's base.
pub const ARROW_HEAD_HALF_WIDTH: f32 = 5.0;
/// Horizontal offset of both bezier control points.
pub const BEZIER_CONTROL_OFFSET: f32 = 50.0;

const BEZIER_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStyle {
    #[default]
    Straight,
    Bezier,
}

impl ConnectionStyle {
    pub fn toggled(self) -> Self {
        match self {
            Self::Straight => Self::Bezier,
            Self::Bezier => Self::Straight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Bezier => "bezier",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: NodeId,
    pub rect: Rect,
    pub label: String,
    pub selected: bool,
    pub dragged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub from: NodeId,
    pub to: NodeId,
    /// Polyline from the source's right edge to the target's left edge. Two points for
    /// [`ConnectionStyle::Straight`].
    pub path: Vec<Point>,
    /// Arrow head wings; `None` for zero-length connections.
    pub head: Option<(Point, Point)>,
}

impl Arrow {
    pub fn tip(&self) -> Option<Point> {
        self.path.last().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Node boxes back to front.
    pub boxes: Vec<NodeBox>,
    pub arrows: Vec<Arrow>,
    pub rubber_band: Option<(Point, Point)>,
}

pub fn build_scene(
    view: &GraphView,
    controller: &InteractionController,
    style: ConnectionStyle,
) -> Scene {
    let boxes = view
        .draw_order()
        .map(|node_view| NodeBox {
            id: node_view.node_id().clone(),
            rect: node_view.rect(),
            label: view
                .node(node_view.node_id().as_str())
                .map(|node| node.text().to_owned())
                .unwrap_or_default(),
            selected: node_view.is_selected(),
            dragged: node_view.is_dragged(),
        })
        .collect();

    let arrows = view
        .segments()
        .map(|segment| arrow_for(segment, style))
        .collect();

    Scene {
        boxes,
        arrows,
        rubber_band: controller.rubber_band(view),
    }
}

fn arrow_for(segment: &Segment, style: ConnectionStyle) -> Arrow {
    let path = match style {
        ConnectionStyle::Straight => vec![segment.start, segment.end],
        ConnectionStyle::Bezier => {
            let (c1, c2) = bezier_controls(segment.start, segment.end);
            sample_cubic(segment.start, c1, c2, segment.end, BEZIER_SAMPLES)
        }
    };

    // Head follows the straight direction so both styles point the same way into the target.
    Arrow {
        from: segment.from.clone(),
        to: segment.to.clone(),
        path,
        head: arrow_head(segment.start, segment.end),
    }
}

/// Wing points of an arrow pointing at `end`.
pub fn arrow_head(start: Point, end: Point) -> Option<(Point, Point)> {
    let direction = (end - start).normalized()?;
    let base = end - direction.scale(ARROW_HEAD_LENGTH);
    let side = direction.perpendicular().scale(ARROW_HEAD_HALF_WIDTH);
    Some((base + side, base - side))
}

pub fn bezier_controls(start: Point, end: Point) -> (Point, Point) {
    let offset = Point::new(BEZIER_CONTROL_OFFSET, 0.0);
    (start - offset, end + offset)
}

/// Samples a cubic bezier into `segments + 1` points, endpoints included.
pub fn sample_cubic(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|step| {
            let t = step as f32 / segments as f32;
            let u = 1.0 - t;
            p0.scale(u * u * u)
                + p1.scale(3.0 * u * u * t)
                + p2.scale(3.0 * u * t * t)
                + p3.scale(t * t * t)
        })
        .collect()
}
