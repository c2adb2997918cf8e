//! Topology edges.
//!
//! This module contains the edge model: canonical tokens, geometry, the
//! base line entity and the two specializations kept by the host graph.

pub mod base;
pub mod geometry;
pub mod interactive;
pub mod labels;
pub mod token;
pub mod types;
pub mod wireless;

// Re-export key types and functions for easier access
pub use base::Edge;
pub use interactive::InteractiveEdge;
pub use labels::{interface_label, throughput_label};
pub use token::{create_edge_token, EdgeToken};
pub use types::{CanvasEdge, EdgeError, EdgeState};
pub use wireless::WirelessEdge;
