//! Host topology.
//!
//! This module contains the node table, the node-lookup seam edges use,
//! and the graph that owns edges, the surface and the broadcast domains.

pub mod graph;
pub mod nodes;
pub mod types;

// Re-export key types for easier access
pub use graph::{EdgeSummary, Snapshot, TopologyGraph};
pub use nodes::NodeTable;
pub use types::{NodeLookup, TopologyNode};
