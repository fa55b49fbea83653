// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use graphedit::editor::Editor;
use graphedit::interaction::{GestureState, PointerButton, PointerEvent};
use graphedit::model::fixtures::sample_graph;
use graphedit::model::NodeId;
use graphedit::store::{GraphFile, WriteDurability};
use graphedit::view::{Point, Rect, ViewConfig};

fn edges(editor: &Editor) -> Vec<(String, Vec<String>)> {
    editor
        .graph()
        .iter()
        .map(|node| {
            (
                node.id().to_string(),
                node.connected_ids().iter().map(NodeId::to_string).collect(),
            )
        })
        .collect()
}

fn rects(editor: &Editor) -> Vec<(String, Rect)> {
    editor
        .view()
        .node_views()
        .map(|view| (view.node_id().to_string(), view.rect()))
        .collect()
}

#[test]
fn saved_sample_graph_reopens_with_identical_edges() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = GraphFile::new(tmp.path().join("graph.json")).with_durability(WriteDurability::Durable);
    file.save(&sample_graph()).expect("save");

    let editor = Editor::open_or_new(file, ViewConfig::default()).expect("open");

    assert_eq!(
        edges(&editor),
        vec![
            ("MAIN_1".to_owned(), vec!["MAIN_2".to_owned(), "MAIN_3".to_owned()]),
            ("MAIN_2".to_owned(), vec![]),
            ("MAIN_3".to_owned(), vec!["MAIN_4".to_owned()]),
            ("MAIN_4".to_owned(), vec![]),
        ]
    );
    assert_eq!(editor.graph(), &sample_graph());
}

#[test]
fn dragging_main_2_changes_only_its_rect() {
    let mut editor = Editor::new(sample_graph());
    let graph_before = editor.graph().clone();
    let rects_before = rects(&editor);
    let start = editor.view().node_view("MAIN_2").expect("view").rect().center();
    let target = Point::new(70.0, 25.0);

    editor.handle_pointer(PointerEvent::press(PointerButton::Primary, start));
    assert_eq!(
        editor.controller().state(),
        &GestureState::Dragging(NodeId::from("MAIN_2"))
    );
    editor.handle_pointer(PointerEvent::drag(PointerButton::Primary, Point::new(50.0, 12.0)));
    editor.handle_pointer(PointerEvent::drag(PointerButton::Primary, target));
    editor.handle_pointer(PointerEvent::release(PointerButton::Primary, target));

    assert_eq!(editor.graph(), &graph_before);
    let rects_after = rects(&editor);
    for ((id, before), (_, after)) in rects_before.iter().zip(&rects_after) {
        if id == "MAIN_2" {
            assert_eq!(after.center(), target);
            assert_eq!(after.size, before.size);
        } else {
            assert_eq!(after, before, "{id} moved");
        }
    }
    assert!(editor.controller().is_idle());
}

#[test]
fn edits_survive_save_and_reopen() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = GraphFile::new(tmp.path().join("graph.json"));
    let mut editor = Editor::open_or_new(file.clone(), ViewConfig::default()).expect("open");
    assert!(editor.graph().is_empty());

    for at in [Point::new(5.0, 5.0), Point::new(60.0, 5.0)] {
        editor.handle_pointer(PointerEvent::press(PointerButton::Secondary, at));
        editor.handle_pointer(PointerEvent::release(PointerButton::Secondary, at));
    }
    let first = editor.view().node_view("Node_1").expect("view").rect().center();
    let second = editor.view().node_view("Node_2").expect("view").rect().center();
    editor.handle_pointer(PointerEvent::press(PointerButton::Secondary, first));
    editor.handle_pointer(PointerEvent::release(PointerButton::Secondary, second));
    editor.select_next();
    editor.sync_text_field("renamed");
    editor.save().expect("save");

    let reopened = Editor::open_or_new(file, ViewConfig::default()).expect("reopen");
    let node = reopened.graph().node("Node_1").expect("node");
    assert_eq!(node.text(), "renamed");
    assert_eq!(
        node.connected_ids().iter().map(NodeId::as_str).collect::<Vec<_>>(),
        vec!["Node_2"]
    );
    assert_eq!(reopened.graph().len(), 2);
}
