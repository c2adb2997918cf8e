//! Tags attached to primitives so surfaces can group and hit-test them.

/// Wired edge lines
pub const EDGE: &str = "edge";
/// Resolved wireless edge lines
pub const WIRELESS_EDGE: &str = "wireless";
/// Endpoint interface labels
pub const LINK_INFO: &str = "linkinfo";
/// Midpoint throughput labels
pub const THROUGHPUT: &str = "throughput";
