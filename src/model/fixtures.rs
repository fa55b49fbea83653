// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::Graph;
use super::node::Node;

/// The four-node graph the editor opens with in demo mode.
///
/// `MAIN_1 -> {MAIN_2, MAIN_3}`, `MAIN_3 -> {MAIN_4}`.
pub fn sample_graph() -> Graph {
    let nodes = [
        Node::with_connections("MAIN_1", "Hello, World 1", ["MAIN_2", "MAIN_3"]),
        Node::new("MAIN_2", "Hello, World 2"),
        Node::with_connections("MAIN_3", "Hello, World 3", ["MAIN_4"]),
        Node::new("MAIN_4", "Hello, World 4"),
    ];

    let mut graph = Graph::new();
    for node in nodes {
        if graph.add_node(node).is_err() {
            unreachable!("sample graph ids are distinct");
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::sample_graph;
    use crate::model::NodeId;

    #[test]
    fn sample_graph_has_expected_edges() {
        let graph = sample_graph();
        let edges = graph
            .iter()
            .map(|node| {
                (
                    node.id().as_str(),
                    node.connected_ids().iter().map(NodeId::as_str).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(
            edges,
            vec![
                ("MAIN_1", vec!["MAIN_2", "MAIN_3"]),
                ("MAIN_2", vec![]),
                ("MAIN_3", vec!["MAIN_4"]),
                ("MAIN_4", vec![]),
            ]
        );
    }
}
