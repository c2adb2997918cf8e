//! Topology type definitions.
//!
//! The node-lookup seam edges use to resolve handles into node kinds and
//! positions, and the node records the host keeps.

use serde::{Deserialize, Serialize};

use crate::canvas::Point;
use crate::link::{NodeId, NodeKind};

/// Resolves node handles for the edge model.
///
/// Edges never own node entities; they ask through this trait.
pub trait NodeLookup {
    fn node_kind(&self, node: NodeId) -> Option<NodeKind>;

    fn node_position(&self, node: NodeId) -> Option<Point>;

    /// Draw an antenna marker on `node`
    fn add_antenna(&mut self, node: NodeId);

    /// Whether `node` models a shared wireless medium. Unknown nodes are not.
    fn is_wireless(&self, node: NodeId) -> bool {
        self.node_kind(node).is_some_and(|kind| kind.is_wireless())
    }
}

/// A node placed on the topology surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub position: Point,
    /// Antenna markers drawn on this node
    #[serde(default)]
    pub antennas: usize,
}

impl TopologyNode {
    pub fn new(id: NodeId, kind: NodeKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            antennas: 0,
        }
    }
}
