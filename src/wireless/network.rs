//! Per-hub broadcast domains.
//!
//! The host topology owns one [`WirelessNetwork`] and lends it to edges
//! while they classify themselves. Within a topology build, stations are
//! only ever added.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Serialize;

use super::types::Classification;
use crate::link::NodeId;

/// Mapping of wireless hub → stations attached to its medium
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WirelessNetwork {
    domains: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl WirelessNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `station` to `hub`'s domain. Returns false if it was already attached.
    pub fn attach(&mut self, hub: NodeId, station: NodeId) -> bool {
        let added = self.domains.entry(hub).or_default().insert(station);
        if added {
            debug!("Attached node {} to wireless hub {}", station, hub);
        }
        added
    }

    /// Record a classification. Only hub attachments change the mapping.
    pub fn register(&mut self, classification: &Classification) -> bool {
        match classification {
            Classification::Attached { hub, station } => self.attach(*hub, *station),
            Classification::Wired | Classification::BothWireless { .. } => false,
        }
    }

    pub fn stations(&self, hub: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.domains.get(&hub)
    }

    /// Number of stations attached to `hub`
    pub fn station_count(&self, hub: NodeId) -> usize {
        self.domains.get(&hub).map_or(0, BTreeSet::len)
    }

    pub fn is_attached(&self, hub: NodeId, station: NodeId) -> bool {
        self.domains.get(&hub).is_some_and(|s| s.contains(&station))
    }

    pub fn hubs(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.domains.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Forget every domain, e.g. before loading a new topology
    pub fn clear(&mut self) {
        self.domains.clear();
    }
}
