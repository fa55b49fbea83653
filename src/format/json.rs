// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON graph document codec.
//!
//! Wire schema (field names are fixed):
//!
//! ```json
//! { "Nodes": [ { "ID": "MAIN_1", "TEXT": "Hello", "Connected": ["MAIN_2"] } ] }
//! ```
//!
//! Nodes are written in graph insertion order and `Connected` is always present. On input a
//! missing or `null` `Connected` is read as empty and unknown fields are ignored. Connection ids
//! are never checked against the node set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{DuplicateIdError, Graph, Node, NodeId};

#[derive(Debug)]
pub enum GraphCodecError {
    /// The text is not JSON, or does not match the document schema.
    Json(serde_json::Error),
    /// Two entries in `Nodes` share an `ID`.
    DuplicateId(DuplicateIdError),
}

impl fmt::Display for GraphCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "malformed graph document: {source}"),
            Self::DuplicateId(source) => write!(f, "invalid graph document: {source}"),
        }
    }
}

impl std::error::Error for GraphCodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::DuplicateId(source) => Some(source),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphJson {
    #[serde(rename = "Nodes")]
    nodes: Vec<NodeJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeJson {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "TEXT")]
    text: String,
    #[serde(rename = "Connected", default)]
    connected: Option<Vec<String>>,
}

fn graph_to_json(graph: &Graph) -> GraphJson {
    GraphJson {
        nodes: graph
            .iter()
            .map(|node| NodeJson {
                id: node.id().to_string(),
                text: node.text().to_owned(),
                connected: Some(node.connected_ids().iter().map(NodeId::to_string).collect()),
            })
            .collect(),
    }
}

fn graph_from_json(json: GraphJson) -> Result<Graph, GraphCodecError> {
    let mut graph = Graph::new();
    for node in json.nodes {
        let connected = node.connected.unwrap_or_default();
        graph
            .add_node(Node::with_connections(node.id, node.text, connected))
            .map_err(GraphCodecError::DuplicateId)?;
    }
    Ok(graph)
}

/// Encodes `graph` as a pretty-printed document terminated by a newline.
pub fn encode_graph(graph: &Graph) -> Result<String, GraphCodecError> {
    let json = graph_to_json(graph);
    let text = serde_json::to_string_pretty(&json).map_err(GraphCodecError::Json)?;
    Ok(format!("{text}\n"))
}

/// Decodes a document into a new graph. Nothing is returned unless every entry is accepted.
pub fn decode_graph(text: &str) -> Result<Graph, GraphCodecError> {
    let json: GraphJson = serde_json::from_str(text).map_err(GraphCodecError::Json)?;
    graph_from_json(json)
}
