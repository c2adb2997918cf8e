//! Link, interface and node-kind records.
//!
//! These mirror what the emulation backend reports. The edge model treats
//! them as opaque data: it reads addresses for label text and node ids to
//! pair interfaces with endpoints, nothing more.

use serde::{Deserialize, Serialize};

/// Handle of a node on the topology surface
pub type NodeId = u32;

/// Node types known to the emulation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Emulated host or router
    Default,
    Physical,
    Switch,
    Hub,
    /// Wireless LAN broadcast domain
    WirelessLan,
    Rj45,
    Tunnel,
    /// EMANE wireless network
    Emane,
    Docker,
    Lxc,
}

impl NodeKind {
    /// Whether nodes of this kind model a shared wireless medium
    pub fn is_wireless(&self) -> bool {
        matches!(self, NodeKind::WirelessLan | NodeKind::Emane)
    }

    /// Returns a string representation of the node kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Default => "default",
            NodeKind::Physical => "physical",
            NodeKind::Switch => "switch",
            NodeKind::Hub => "hub",
            NodeKind::WirelessLan => "wireless_lan",
            NodeKind::Rj45 => "rj45",
            NodeKind::Tunnel => "tunnel",
            NodeKind::Emane => "emane",
            NodeKind::Docker => "docker",
            NodeKind::Lxc => "lxc",
        }
    }
}

/// A network interface attached to one end of a link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip4: Option<String>,
    #[serde(default)]
    pub ip4mask: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    #[serde(default)]
    pub ip6mask: u8,
}

/// Link shaping parameters, also used for the reverse direction of an
/// asymmetric link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkOptions {
    /// Bandwidth in bits per second
    #[serde(default)]
    pub bandwidth: u64,
    /// Delay in microseconds
    #[serde(default)]
    pub delay: u64,
    /// Jitter in microseconds
    #[serde(default)]
    pub jitter: u64,
    /// Loss percentage
    #[serde(default)]
    pub loss: f64,
    /// Duplicate percentage
    #[serde(default)]
    pub dup: u32,
    #[serde(default)]
    pub unidirectional: bool,
}

/// A link as defined by the emulation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub node_one_id: NodeId,
    pub node_two_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_one: Option<Interface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_two: Option<Interface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LinkOptions>,
}

impl Link {
    pub fn new(node_one_id: NodeId, node_two_id: NodeId) -> Self {
        Self {
            node_one_id,
            node_two_id,
            interface_one: None,
            interface_two: None,
            options: None,
        }
    }

    /// Interface on the side of `node`, if this link touches it
    pub fn interface_for(&self, node: NodeId) -> Option<&Interface> {
        if self.node_one_id == node {
            self.interface_one.as_ref()
        } else if self.node_two_id == node {
            self.interface_two.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wireless_kinds() {
        assert!(NodeKind::WirelessLan.is_wireless());
        assert!(NodeKind::Emane.is_wireless());
        assert!(!NodeKind::Default.is_wireless());
        assert!(!NodeKind::Switch.is_wireless());
        assert!(!NodeKind::Hub.is_wireless());
    }

    #[test]
    fn test_interface_for_matches_either_side() {
        let mut link = Link::new(4, 2);
        link.interface_one = Some(Interface { id: 0, ..Default::default() });
        link.interface_two = Some(Interface { id: 1, ..Default::default() });

        assert_eq!(link.interface_for(4).map(|i| i.id), Some(0));
        assert_eq!(link.interface_for(2).map(|i| i.id), Some(1));
        assert!(link.interface_for(9).is_none());
    }

    #[test]
    fn test_node_kind_yaml_names() {
        let kind: NodeKind = serde_yaml::from_str("wireless_lan").unwrap();
        assert_eq!(kind, NodeKind::WirelessLan);
        assert_eq!(kind.as_str(), "wireless_lan");
    }
}
