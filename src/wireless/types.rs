//! Wireless classification of a completed edge.

use serde::Serialize;

use crate::link::NodeId;

/// How a completed edge relates to wireless broadcast domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Neither endpoint is wireless: an ordinary visible line
    Wired,
    /// Exactly one endpoint is a wireless hub; `station` joins its domain
    Attached { hub: NodeId, station: NodeId },
    /// Both endpoints are wireless; the source endpoint takes the antenna
    BothWireless { antenna: NodeId },
}

impl Classification {
    /// Classify an edge from `src` to `dst` given each endpoint's wireless
    /// capability. Ties go to the source.
    pub fn classify(src: NodeId, src_wireless: bool, dst: NodeId, dst_wireless: bool) -> Self {
        match (src_wireless, dst_wireless) {
            (false, false) => Classification::Wired,
            (true, false) => Classification::Attached {
                hub: src,
                station: dst,
            },
            (false, true) => Classification::Attached {
                hub: dst,
                station: src,
            },
            (true, true) => Classification::BothWireless { antenna: src },
        }
    }

    /// Whether the edge's own line should be hidden
    pub fn is_wireless(&self) -> bool {
        !matches!(self, Classification::Wired)
    }

    /// The node that gets an antenna marker instead of the line
    pub fn antenna_node(&self) -> Option<NodeId> {
        match self {
            Classification::Wired => None,
            Classification::Attached { station, .. } => Some(*station),
            Classification::BothWireless { antenna } => Some(*antenna),
        }
    }

    pub fn hub(&self) -> Option<NodeId> {
        match self {
            Classification::Attached { hub, .. } => Some(*hub),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wired() {
        let c = Classification::classify(1, false, 2, false);
        assert_eq!(c, Classification::Wired);
        assert!(!c.is_wireless());
        assert_eq!(c.antenna_node(), None);
        assert_eq!(c.hub(), None);
    }

    #[test]
    fn test_hub_at_either_end() {
        let c = Classification::classify(3, true, 4, false);
        assert_eq!(c, Classification::Attached { hub: 3, station: 4 });
        assert_eq!(c.antenna_node(), Some(4));

        let c = Classification::classify(4, false, 3, true);
        assert_eq!(c, Classification::Attached { hub: 3, station: 4 });
        assert_eq!(c.antenna_node(), Some(4));
    }

    #[test]
    fn test_both_wireless_source_wins() {
        let c = Classification::classify(5, true, 6, true);
        assert!(c.is_wireless());
        assert_eq!(c.antenna_node(), Some(5));
        assert_eq!(c.hub(), None);
    }
}
