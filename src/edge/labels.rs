//! Label text for interfaces and throughput samples.

use crate::link::Interface;

/// Factor converting a raw throughput sample to kbps
pub const KBPS_SCALE: f64 = 0.001;

/// Address label of an interface: `ip4/mask`, then `ip6/mask` on a second
/// line when present.
pub fn interface_label(interface: &Interface) -> String {
    let mut label = String::new();
    if let Some(ip4) = interface.ip4.as_deref().filter(|ip| !ip.is_empty()) {
        label = format!("{}/{}", ip4, interface.ip4mask);
    }
    if let Some(ip6) = interface.ip6.as_deref().filter(|ip| !ip.is_empty()) {
        label = format!("{}\n{}/{}", label, ip6, interface.ip6mask);
    }
    label
}

/// Label text of an optional interface; empty when absent
pub fn endpoint_label(interface: Option<&Interface>) -> String {
    interface.map(interface_label).unwrap_or_default()
}

/// Scale a raw throughput sample to kbps
pub fn to_kbps(throughput: f64) -> f64 {
    KBPS_SCALE * throughput
}

/// Display text for a kbps value, three decimals
pub fn throughput_label(kbps: f64) -> String {
    format!("{:.3} kbps", kbps)
}
