//! Order-independent edge identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::link::NodeId;

/// Canonical identifier of a node pair.
///
/// The two handles are stored in ascending order, so the token of an edge
/// does not depend on which endpoint was the source when it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeToken {
    low: NodeId,
    high: NodeId,
}

/// Create the canonical token for the pair `(a, b)`.
///
/// `create_edge_token(a, b) == create_edge_token(b, a)` for every pair,
/// including the degenerate self loop `(a, a)`.
pub fn create_edge_token(a: NodeId, b: NodeId) -> EdgeToken {
    let token = if a <= b {
        EdgeToken { low: a, high: b }
    } else {
        EdgeToken { low: b, high: a }
    };
    debug_assert!(token.low <= token.high, "edge token not canonical: {:?}", token);
    token
}

impl EdgeToken {
    /// Both handles in canonical (ascending) order
    pub fn nodes(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.low == node || self.high == node
    }

    /// The handle opposite `node`, if `node` is part of this token
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.low == node {
            Some(self.high)
        } else if self.high == node {
            Some(self.low)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for EdgeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
