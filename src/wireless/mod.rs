//! Wireless aggregation.
//!
//! Wireless connectivity is many-to-one: stations attach to a shared medium.
//! Rather than drawing every pairwise line, edges touching a wireless hub
//! hide themselves, register the station under the hub, and ask for an
//! antenna marker on the station.

pub mod network;
pub mod types;

pub use network::WirelessNetwork;
pub use types::Classification;
