// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer gesture state machine.
//!
//! An [`InteractionController`] turns pointer events into [`GraphView`] mutations: primary
//! press/drag/release selects and drags a node, secondary press/release on two different nodes
//! connects them, and secondary press/release on empty canvas creates a node at the press point.
//! Each event is handled to completion before the next one is accepted.
//!
//! While a node is selected every event is routed to the selected-node handling; presses are not
//! hit-tested again until a primary release ends the selection.

use crate::model::NodeId;
use crate::view::{GraphView, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Release,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub button: PointerButton,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, button: PointerButton, position: Point) -> Self {
        Self {
            kind,
            button,
            position,
        }
    }

    pub fn press(button: PointerButton, position: Point) -> Self {
        Self::new(PointerEventKind::Press, button, position)
    }

    pub fn release(button: PointerButton, position: Point) -> Self {
        Self::new(PointerEventKind::Release, button, position)
    }

    pub fn drag(button: PointerButton, position: Point) -> Self {
        Self::new(PointerEventKind::Drag, button, position)
    }
}

/// Current gesture. Dragging implies selected, so there is no separate drag flag to disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Selected without dragging (keyboard selection).
    Selected(NodeId),
    /// Selected by a primary press and following the pointer.
    Dragging(NodeId),
    /// Secondary press landed on `source`; waiting for the release.
    ConnectionPending { source: NodeId },
    /// Secondary press landed on empty canvas at `origin`; waiting for the release.
    CreatingNode { origin: Point },
}

impl GestureState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Selected(_) => "selected",
            Self::Dragging(_) => "dragging",
            Self::ConnectionPending { .. } => "connecting",
            Self::CreatingNode { .. } => "creating",
        }
    }
}

/// What an event did, so the host can decide whether to repaint.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    Ignored,
    Selected(NodeId),
    Moved(NodeId),
    Released(NodeId),
    ConnectionStarted(NodeId),
    /// Only the rubber band changed.
    PointerTracked,
    Connected { from: NodeId, to: NodeId },
    ConnectionDiscarded(NodeId),
    CreationStarted(Point),
    NodeCreated(NodeId),
}

impl InteractionOutcome {
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn mutated_graph(&self) -> bool {
        matches!(self, Self::Connected { .. } | Self::NodeCreated(_))
    }
}

/// Gesture state for one editing session.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: GestureState,
    pointer: Option<Point>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// True while a press is waiting for its release.
    pub fn gesture_in_progress(&self) -> bool {
        matches!(
            self.state,
            GestureState::Dragging(_)
                | GestureState::ConnectionPending { .. }
                | GestureState::CreatingNode { .. }
        )
    }

    /// Last pointer position seen by [`Self::handle`].
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        match &self.state {
            GestureState::Selected(id) | GestureState::Dragging(id) => Some(id),
            _ => None,
        }
    }

    /// Drops any gesture without touching a view. Used when the view is replaced.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.pointer = None;
    }

    pub fn handle(&mut self, view: &mut GraphView, event: PointerEvent) -> InteractionOutcome {
        self.pointer = Some(event.position);

        let (next, outcome) = match std::mem::take(&mut self.state) {
            GestureState::Idle => on_idle(view, event),
            GestureState::Selected(id) => on_selected(view, id, false, event),
            GestureState::Dragging(id) => on_selected(view, id, true, event),
            GestureState::ConnectionPending { source } => on_connection_pending(view, source, event),
            GestureState::CreatingNode { origin } => on_creating_node(view, origin, event),
        };

        self.state = next;
        outcome
    }

    /// Keyboard selection. Only allowed when no press is waiting for its release.
    pub fn select(&mut self, view: &mut GraphView, id: &str) -> InteractionOutcome {
        if self.gesture_in_progress() {
            return InteractionOutcome::Ignored;
        }
        if view.set_selection(id, false).is_err() {
            return InteractionOutcome::Ignored;
        }
        let _ = view.bring_to_front(id);

        let id = NodeId::new(id);
        self.state = GestureState::Selected(id.clone());
        InteractionOutcome::Selected(id)
    }

    /// Selects the node after the current selection in insertion order, wrapping around.
    pub fn select_next(&mut self, view: &mut GraphView) -> InteractionOutcome {
        let next_position = match self.selected_id() {
            Some(id) => view
                .graph()
                .position_of(id.as_str())
                .map_or(0, |position| position + 1),
            None => 0,
        };
        let count = view.len();
        if count == 0 {
            return InteractionOutcome::Ignored;
        }

        let Some(next) = view.graph().node_at(next_position % count).map(|n| n.id().clone())
        else {
            return InteractionOutcome::Ignored;
        };
        self.select(view, next.as_str())
    }

    /// Ends a keyboard selection. A drag selection ends only with its release.
    pub fn clear_selection(&mut self, view: &mut GraphView) -> InteractionOutcome {
        let GestureState::Selected(id) = &self.state else {
            return InteractionOutcome::Ignored;
        };
        let id = id.clone();
        self.state = GestureState::Idle;
        view.clear_selection();
        InteractionOutcome::Released(id)
    }

    /// Current value for the text field shown while exactly one node is selected.
    pub fn selected_text<'a>(&self, view: &'a GraphView) -> Option<&'a str> {
        let id = self.selected_id()?;
        view.node(id.as_str()).map(|node| node.text())
    }

    /// Writes the text field's value straight into the selected node. Returns whether the text
    /// changed.
    pub fn sync_text_field(&self, view: &mut GraphView, new_value: &str) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        if view.node(id.as_str()).map(|node| node.text()) == Some(new_value) {
            return false;
        }
        view.set_node_text(id.as_str(), new_value).is_ok()
    }

    /// Line from the pending connection's source to the pointer, while a connection is pending.
    pub fn rubber_band(&self, view: &GraphView) -> Option<(Point, Point)> {
        let GestureState::ConnectionPending { source } = &self.state else {
            return None;
        };
        let start = view.node_view(source.as_str())?.rect().right_mid();
        Some((start, self.pointer?))
    }
}

fn hit(view: &GraphView, position: Point) -> Option<NodeId> {
    view.node_view_at(position).map(|v| v.node_id().clone())
}

fn on_idle(view: &mut GraphView, event: PointerEvent) -> (GestureState, InteractionOutcome) {
    if event.kind != PointerEventKind::Press {
        return (GestureState::Idle, InteractionOutcome::Ignored);
    }

    match (event.button, hit(view, event.position)) {
        (PointerButton::Primary, Some(id)) => {
            if view.set_selection(id.as_str(), true).is_err() {
                return (GestureState::Idle, InteractionOutcome::Ignored);
            }
            let _ = view.bring_to_front(id.as_str());
            (GestureState::Dragging(id.clone()), InteractionOutcome::Selected(id))
        }
        (PointerButton::Primary, None) => (GestureState::Idle, InteractionOutcome::Ignored),
        (PointerButton::Secondary, Some(source)) => (
            GestureState::ConnectionPending {
                source: source.clone(),
            },
            InteractionOutcome::ConnectionStarted(source),
        ),
        (PointerButton::Secondary, None) => (
            GestureState::CreatingNode {
                origin: event.position,
            },
            InteractionOutcome::CreationStarted(event.position),
        ),
    }
}

fn on_selected(
    view: &mut GraphView,
    id: NodeId,
    dragging: bool,
    event: PointerEvent,
) -> (GestureState, InteractionOutcome) {
    let keep = |id: NodeId| {
        if dragging {
            GestureState::Dragging(id)
        } else {
            GestureState::Selected(id)
        }
    };

    match (event.kind, event.button) {
        (PointerEventKind::Drag, _) if dragging => {
            if view.move_node(id.as_str(), event.position).is_err() {
                view.clear_selection();
                return (GestureState::Idle, InteractionOutcome::Ignored);
            }
            (keep(id.clone()), InteractionOutcome::Moved(id))
        }
        (PointerEventKind::Release, PointerButton::Primary) => {
            view.clear_selection();
            (GestureState::Idle, InteractionOutcome::Released(id))
        }
        _ => (keep(id), InteractionOutcome::Ignored),
    }
}

fn on_connection_pending(
    view: &mut GraphView,
    source: NodeId,
    event: PointerEvent,
) -> (GestureState, InteractionOutcome) {
    match (event.kind, event.button) {
        (PointerEventKind::Release, PointerButton::Secondary) => {
            let outcome = match hit(view, event.position) {
                Some(target) if target != source => {
                    match view.connect(source.as_str(), target.as_str()) {
                        Ok(()) => InteractionOutcome::Connected {
                            from: source,
                            to: target,
                        },
                        Err(_) => InteractionOutcome::ConnectionDiscarded(source),
                    }
                }
                _ => InteractionOutcome::ConnectionDiscarded(source),
            };
            (GestureState::Idle, outcome)
        }
        (PointerEventKind::Drag, _) => (
            GestureState::ConnectionPending { source },
            InteractionOutcome::PointerTracked,
        ),
        _ => (
            GestureState::ConnectionPending { source },
            InteractionOutcome::Ignored,
        ),
    }
}

fn on_creating_node(
    view: &mut GraphView,
    origin: Point,
    event: PointerEvent,
) -> (GestureState, InteractionOutcome) {
    match (event.kind, event.button) {
        (PointerEventKind::Release, PointerButton::Secondary) => {
            let id = view.create_node(origin);
            (GestureState::Idle, InteractionOutcome::NodeCreated(id))
        }
        _ => (GestureState::CreatingNode { origin }, InteractionOutcome::Ignored),
    }
}
