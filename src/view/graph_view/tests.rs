// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::{GraphView, Segment, ViewConfig, ViewError, NEW_NODE_TEXT};
use crate::model::fixtures::sample_graph;
use crate::model::{Graph, Node, NodeId};
use crate::view::{Point, Rect, Size};

fn config() -> ViewConfig {
    ViewConfig {
        node_size: Size::new(10.0, 4.0),
        origin: Point::new(0.0, 0.0),
        spacing: Size::new(5.0, 2.0),
        columns: 2,
    }
}

fn sample_view() -> GraphView {
    GraphView::with_config(sample_graph(), config())
}

fn view_ids(view: &GraphView) -> BTreeSet<String> {
    view.node_views().map(|v| v.node_id().to_string()).collect()
}

fn graph_ids(view: &GraphView) -> BTreeSet<String> {
    view.graph().ids().map(NodeId::to_string).collect()
}

fn draw_order_ids(view: &GraphView) -> Vec<String> {
    view.draw_order().map(|v| v.node_id().to_string()).collect()
}

fn rect_of(view: &GraphView, id: &str) -> Rect {
    view.node_view(id).expect("view").rect()
}

#[test]
fn construction_places_nodes_in_wrapping_grid() {
    let view = sample_view();

    assert_eq!(rect_of(&view, "MAIN_1").origin, Point::new(0.0, 0.0));
    assert_eq!(rect_of(&view, "MAIN_2").origin, Point::new(15.0, 0.0));
    assert_eq!(rect_of(&view, "MAIN_3").origin, Point::new(0.0, 6.0));
    assert_eq!(rect_of(&view, "MAIN_4").origin, Point::new(15.0, 6.0));
    assert_eq!(rect_of(&view, "MAIN_4").size, Size::new(10.0, 4.0));
    assert!(view.is_one_to_one());
    assert_eq!(view_ids(&view), graph_ids(&view));
}

#[test]
fn zero_columns_stacks_vertically() {
    let view = GraphView::with_config(sample_graph(), ViewConfig { columns: 0, ..config() });
    assert_eq!(rect_of(&view, "MAIN_2").origin, Point::new(0.0, 6.0));
}

#[test]
fn construction_derives_segments_from_edges() {
    let view = sample_view();

    let segments = view.segments().cloned().collect::<Vec<_>>();
    assert_eq!(
        segments,
        vec![
            Segment {
                from: NodeId::from("MAIN_1"),
                to: NodeId::from("MAIN_2"),
                start: Point::new(10.0, 2.0),
                end: Point::new(15.0, 2.0),
            },
            Segment {
                from: NodeId::from("MAIN_1"),
                to: NodeId::from("MAIN_3"),
                start: Point::new(10.0, 2.0),
                end: Point::new(0.0, 8.0),
            },
            Segment {
                from: NodeId::from("MAIN_3"),
                to: NodeId::from("MAIN_4"),
                start: Point::new(10.0, 8.0),
                end: Point::new(15.0, 8.0),
            },
        ]
    );
}

#[test]
fn dangling_connections_produce_no_segment_but_stay_in_data() {
    let mut graph = Graph::new();
    graph
        .add_node(Node::with_connections("a", "A", ["ghost", "b"]))
        .expect("insert");
    graph.add_node(Node::new("b", "B")).expect("insert");

    let view = GraphView::with_config(graph, config());

    assert_eq!(view.outgoing_segments("a").len(), 1);
    assert_eq!(view.outgoing_segments("a")[0].to.as_str(), "b");
    assert_eq!(view.graph().connected_ids("a").map(<[NodeId]>::len), Some(2));
}

#[test]
fn node_view_at_returns_first_match_in_insertion_order() {
    let mut view = sample_view();
    // Stack MAIN_3 exactly on top of MAIN_1 and raise it.
    view.move_node("MAIN_3", rect_of(&view, "MAIN_1").center())
        .expect("move");
    view.bring_to_front("MAIN_3").expect("front");

    let hit = view.node_view_at(Point::new(1.0, 1.0)).expect("hit");
    assert_eq!(hit.node_id().as_str(), "MAIN_1");
    assert!(view.node_view_at(Point::new(100.0, 100.0)).is_none());
}

#[test]
fn bring_to_front_reorders_draw_order_only() {
    let mut view = sample_view();
    let graph_before = view.graph().clone();

    view.bring_to_front("MAIN_2").expect("front");
    view.bring_to_front("MAIN_1").expect("front");

    assert_eq!(draw_order_ids(&view), vec!["MAIN_3", "MAIN_4", "MAIN_2", "MAIN_1"]);
    assert_eq!(view.graph(), &graph_before);
    assert_eq!(
        view.bring_to_front("nope"),
        Err(ViewError::UnknownNode(NodeId::from("nope")))
    );
}

#[test]
fn connect_appends_without_dedup_and_refreshes_source_segments() {
    let mut view = sample_view();

    view.connect("MAIN_2", "MAIN_4").expect("connect");
    view.connect("MAIN_2", "MAIN_4").expect("connect again");
    view.connect("MAIN_2", "MAIN_2").expect("self loop");

    let ids = view
        .graph()
        .connected_ids("MAIN_2")
        .expect("node")
        .iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["MAIN_4", "MAIN_4", "MAIN_2"]);
    assert_eq!(view.outgoing_segments("MAIN_2").len(), 3);
    assert_eq!(
        view.graph().connected_ids("MAIN_1").map(<[NodeId]>::len),
        Some(2)
    );
}

#[test]
fn connect_rejects_unknown_ids() {
    let mut view = sample_view();
    let before = view.graph().clone();

    assert!(view.connect("MAIN_1", "ghost").is_err());
    assert!(view.connect("ghost", "MAIN_1").is_err());
    assert_eq!(view.graph(), &before);
}

#[test]
fn create_node_uses_origin_and_default_text() {
    let mut view = sample_view();

    let id = view.create_node(Point::new(40.0, 30.0));

    assert_eq!(id.as_str(), "Node_5");
    assert_eq!(view.node(id.as_str()).map(Node::text), Some(NEW_NODE_TEXT));
    assert_eq!(rect_of(&view, "Node_5"), Rect::new(Point::new(40.0, 30.0), config().node_size));
    assert_eq!(draw_order_ids(&view).last().map(String::as_str), Some("Node_5"));
    assert!(view.is_one_to_one());
}

#[test]
fn create_node_avoids_loaded_generated_ids() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("Node_2", "loaded")).expect("insert");
    let mut view = GraphView::with_config(graph, config());

    let first = view.create_node(Point::default());
    let second = view.create_node(Point::default());

    assert_eq!(first.as_str(), "Node_3");
    assert_eq!(second.as_str(), "Node_4");
    assert_eq!(view.graph().node("Node_2").map(Node::text), Some("loaded"));
    assert_eq!(view_ids(&view), graph_ids(&view));
}

#[test]
fn add_node_with_taken_id_changes_nothing() {
    let mut view = sample_view();

    let err = view
        .add_node(Node::new("MAIN_1", "dup"), Point::default())
        .unwrap_err();

    assert_eq!(err.id().as_str(), "MAIN_1");
    assert_eq!(view.len(), 4);
    assert!(view.is_one_to_one());
}

#[test]
fn move_node_centers_rect_and_updates_incoming_and_outgoing_segments() {
    let mut view = sample_view();
    let graph_before = view.graph().clone();

    view.move_node("MAIN_3", Point::new(50.0, 50.0)).expect("move");

    assert_eq!(rect_of(&view, "MAIN_3").center(), Point::new(50.0, 50.0));
    assert_eq!(view.outgoing_segments("MAIN_1")[1].end, Point::new(45.0, 50.0));
    assert_eq!(view.outgoing_segments("MAIN_3")[0].start, Point::new(55.0, 50.0));
    assert_eq!(view.graph(), &graph_before);
}

#[test]
fn selection_is_exclusive() {
    let mut view = sample_view();

    view.set_selection("MAIN_1", true).expect("select");
    view.set_selection("MAIN_2", false).expect("select");

    let selected = view
        .node_views()
        .filter(|v| v.is_selected())
        .map(|v| v.node_id().as_str())
        .collect::<Vec<_>>();
    assert_eq!(selected, vec!["MAIN_2"]);
    assert!(!view.node_view("MAIN_1").expect("view").is_dragged());
    assert!(!view.node_view("MAIN_2").expect("view").is_dragged());

    view.clear_selection();
    assert!(view.selected().is_none());
}

#[test]
fn set_node_text_accepts_empty_string() {
    let mut view = sample_view();

    view.set_node_text("MAIN_4", "").expect("set text");

    assert_eq!(view.node("MAIN_4").map(Node::text), Some(""));
    assert!(view.set_node_text("ghost", "x").is_err());
}
