//! # Interface Discovery
//!
//! Decides where a magic packet goes. For every usable interface this picks a local source
//! address and the multicast groups that reach every host on the attached link:
//!
//! * IPv6: the first non link-local address, sending to the all-nodes group `ff02::1`.
//! * IPv4: the first address, sending to the all-hosts group `224.0.0.1`.
//!
//! Multicast avoids relying on subnet broadcast, which some switches and VPNs drop. When no
//! interface qualifies, discovery falls back to the limited broadcast address.

use std::net::{IpAddr, Ipv6Addr};

use lanwake_common::config::{DiscoveryOptions, FamilyFilter};
use lanwake_common::network::endpoint::{Endpoint, InterfaceBinding};
use lanwake_common::network::multicast::MulticastTable;
use lanwake_common::utils::interface::NetworkInterfaceExtension;
use pnet::datalink::NetworkInterface;
use tracing::{debug, warn};

use crate::network::interface::SystemInterfaces;

/// Textual prefix of the IPv4 groups accepted as wake destinations.
pub const IPV4_ALL_HOSTS_PREFIX: &str = "224.0.0.1";
pub const IPV6_ALL_NODES: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 1);

/// Where discovery gets its view of the host's network configuration from.
pub trait InterfaceSource {
    /// All interfaces, in the order the system reports them.
    fn interfaces(&self) -> Vec<NetworkInterface>;

    /// Multicast memberships of the given interfaces.
    fn multicast_groups(&self, interfaces: &[NetworkInterface]) -> anyhow::Result<MulticastTable>;

    /// Whether the interface runs on a self-assigned (APIPA) IPv4 address.
    ///
    /// Only meaningful where the platform exposes it.
    fn automatic_private_addressing(&self, _interface: &NetworkInterface) -> bool {
        false
    }
}

/// Runs discovery against the host's interfaces.
pub fn discover(options: &DiscoveryOptions) -> Vec<InterfaceBinding> {
    discover_with(&SystemInterfaces, options)
}

/// Runs discovery against an arbitrary [`InterfaceSource`].
///
/// The result is only empty when `options.family` is [`FamilyFilter::Ipv6`]; every other
/// configuration ends with at least the broadcast fallback.
pub fn discover_with(source: &dyn InterfaceSource, options: &DiscoveryOptions) -> Vec<InterfaceBinding> {
    let mut bindings: Vec<InterfaceBinding> = Vec::new();

    if !options.prefer_broadcast {
        let candidates: Vec<NetworkInterface> = source
            .interfaces()
            .into_iter()
            .filter(|i| i.is_up() && !i.is_loopback())
            .collect();

        let memberships = source.multicast_groups(&candidates).unwrap_or_else(|e| {
            warn!("Could not read multicast memberships: {e:#}");
            MulticastTable::new()
        });
        if memberships.is_empty() {
            debug!("No multicast memberships reported for {} interface(s)", candidates.len());
        }

        for interface in &candidates {
            if options.single_interface && !bindings.is_empty() {
                break;
            }

            let apipa = source.automatic_private_addressing(interface);
            query_interface(interface, memberships.groups(&interface.name), apipa, options, &mut bindings);
        }
    }

    if bindings.is_empty() && options.family != FamilyFilter::Ipv6 {
        debug!("No multicast capable interface selected, using broadcast fallback");
        bindings.push(InterfaceBinding::broadcast_fallback(options.port));
    }

    bindings
}

fn query_interface(
    interface: &NetworkInterface,
    groups: &[IpAddr],
    apipa: bool,
    options: &DiscoveryOptions,
    bindings: &mut Vec<InterfaceBinding>,
) {
    if options.family.includes_ipv6() {
        if let Some(local) = interface.first_routable_ipv6() {
            let endpoints: Vec<Endpoint> = groups
                .iter()
                .filter_map(|group| match group {
                    IpAddr::V6(v6) if *v6 == IPV6_ALL_NODES => {
                        Some(Endpoint::scoped(*v6, options.port, interface.index))
                    }
                    _ => None,
                })
                .collect();

            push_binding(interface, IpAddr::V6(local), endpoints, bindings);
        }
    }

    if options.family.includes_ipv4() && !apipa {
        if let Some(local) = interface.first_ipv4() {
            let endpoints: Vec<Endpoint> = groups
                .iter()
                .filter(|group| group.is_ipv4() && group.to_string().starts_with(IPV4_ALL_HOSTS_PREFIX))
                .map(|group| Endpoint::new(*group, options.port))
                .collect();

            push_binding(interface, IpAddr::V4(local), endpoints, bindings);
        }
    }
}

fn push_binding(
    interface: &NetworkInterface,
    local: IpAddr,
    endpoints: Vec<Endpoint>,
    bindings: &mut Vec<InterfaceBinding>,
) {
    if endpoints.is_empty() {
        debug!("{} has no all-hosts membership for {local}", interface.name);
        return;
    }

    debug!("{} sends from {local} to {endpoints:?}", interface.name);
    bindings.push(InterfaceBinding::new(local, endpoints));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
