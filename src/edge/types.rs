//! Edge type definitions: lifecycle state, errors and the common edge seam.

use serde::Serialize;

use super::base::Edge;
use super::token::EdgeToken;
use crate::canvas::Canvas;
use crate::context::EdgeAction;
use crate::link::NodeId;

/// Lifecycle of an interactive edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeState {
    /// Drawn from the source toward the pointer, no destination yet
    Pending,
    /// Destination known, token assigned, wireless classification done
    Completed,
    /// Line and labels removed from the surface
    Deleted,
}

/// Errors raised by the edge model.
///
/// Most UI-ordering anomalies are tolerated silently. These are the
/// conditions a caller has to hear about.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeError {
    #[error("Edge from node {src} is already completed")]
    AlreadyCompleted { src: NodeId },

    #[error("Edge from node {src} has no destination yet")]
    NotCompleted { src: NodeId },

    #[error("Edge from node {src} is already drawn")]
    AlreadyDrawn { src: NodeId },

    #[error("Edge from node {src} has been deleted")]
    Deleted { src: NodeId },

    #[error("Token {token} does not belong to nodes {src} and {dst}")]
    TokenMismatch {
        token: EdgeToken,
        src: NodeId,
        dst: NodeId,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Cannot link node {0} to itself")]
    SelfLoop(NodeId),

    #[error("A link between {0} already exists")]
    DuplicateLink(EdgeToken),

    #[error("No edge is being drawn")]
    NoPendingEdge,

    #[error("An edge from node {0} is already being drawn")]
    PendingEdgeExists(NodeId),

    #[error("Unknown edge: {0}")]
    UnknownEdge(EdgeToken),

    #[error("Action {0:?} is disabled while the session is running")]
    ActionDisabled(EdgeAction),
}

/// Behavior shared by every edge kind the host keeps on its surface
pub trait CanvasEdge {
    /// The underlying line entity
    fn edge(&self) -> &Edge;

    /// Follow a node to `(x, y)`. Returns false when `node` is not an endpoint.
    fn move_node(&mut self, canvas: &mut dyn Canvas, node: NodeId, x: f64, y: f64) -> bool;

    /// Remove every primitive the edge owns. Returns false when already deleted.
    fn delete(&mut self, canvas: &mut dyn Canvas) -> bool;

    fn token(&self) -> Option<EdgeToken> {
        self.edge().token()
    }

    /// Whether `node` is one of the edge's endpoints
    fn touches(&self, node: NodeId) -> bool {
        self.edge().src() == node || self.edge().dst() == Some(node)
    }
}
