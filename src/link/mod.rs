//! Link data consumed from the emulation backend.

pub mod types;

pub use types::{Interface, Link, LinkOptions, NodeId, NodeKind};
