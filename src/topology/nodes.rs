//! Node table.
//!
//! The host's record of nodes on the surface: kind, last known position and
//! antenna markers. Edges reach it only through [`NodeLookup`].

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::types::{NodeLookup, TopologyNode};
use crate::canvas::Point;
use crate::link::{NodeId, NodeKind};

#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeTable {
    nodes: BTreeMap<NodeId, TopologyNode>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a node, returning the node it replaced
    pub fn insert(&mut self, id: NodeId, kind: NodeKind, position: Point) -> Option<TopologyNode> {
        self.nodes.insert(id, TopologyNode::new(id, kind, position))
    }

    pub fn get(&self, id: NodeId) -> Option<&TopologyNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Record a node's new position. Returns false for unknown nodes.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopologyNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeLookup for NodeTable {
    fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
        self.nodes.get(&node).map(|n| n.kind)
    }

    fn node_position(&self, node: NodeId) -> Option<Point> {
        self.nodes.get(&node).map(|n| n.position)
    }

    fn add_antenna(&mut self, node: NodeId) {
        match self.nodes.get_mut(&node) {
            Some(n) => n.antennas += 1,
            None => debug!("Ignoring antenna for unknown node {}", node),
        }
    }
}
