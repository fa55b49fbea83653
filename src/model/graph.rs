// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use super::ids::{generated_id, NodeId};
use super::node::Node;

/// The authoritative set of nodes, keyed by id, in insertion order.
///
/// Insertion order drives both save order and hit-testing order, so the nodes live in a vector
/// and the id lookup table only stores positions into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    id: NodeId,
}

impl DuplicateIdError {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn into_id(self) -> NodeId {
        self.id
    }
}

impl fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node id {:?} already exists", self.id.as_str())
    }
}

impl std::error::Error for DuplicateIdError {}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` unless its id is already taken. The graph is unchanged on error.
    pub fn add_node(&mut self, node: Node) -> Result<(), DuplicateIdError> {
        if self.index.contains_key(node.id()) {
            return Err(DuplicateIdError {
                id: node.id().clone(),
            });
        }

        self.index.insert(node.id().clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        let position = *self.index.get(id)?;
        self.nodes.get_mut(position)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of `id` in insertion order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node_at(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }

    pub fn connected_ids(&self, id: &str) -> Option<&[NodeId]> {
        self.node(id).map(Node::connected_ids)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an id that is not present in the graph.
    ///
    /// Starts at `Node_<len + 1>` and counts upward, so loaded documents that already contain
    /// `Node_<n>` ids never produce a collision.
    pub fn allocate_node_id(&self) -> NodeId {
        let mut counter = self.nodes.len() + 1;
        loop {
            let candidate = generated_id(counter);
            if !self.contains(candidate.as_str()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
