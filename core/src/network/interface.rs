use pnet::datalink::{self, NetworkInterface};

#[cfg(target_os = "linux")]
use linux_impl::{automatic_private_addressing, multicast_groups};
#[cfg(not(target_os = "linux"))]
use fallback_impl::{automatic_private_addressing, multicast_groups};

use lanwake_common::network::multicast::MulticastTable;

use crate::discovery::InterfaceSource;

/// The host's real interfaces, as seen through `pnet` and the kernel's multicast tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }

    fn multicast_groups(&self, interfaces: &[NetworkInterface]) -> anyhow::Result<MulticastTable> {
        multicast_groups(interfaces)
    }

    fn automatic_private_addressing(&self, interface: &NetworkInterface) -> bool {
        automatic_private_addressing(interface)
    }
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::{fs, io};

    use anyhow::Context;
    use tracing::debug;

    const IGMP_PATH: &str = "/proc/net/igmp";
    const IGMP6_PATH: &str = "/proc/net/igmp6";

    pub fn multicast_groups(_interfaces: &[NetworkInterface]) -> anyhow::Result<MulticastTable> {
        let mut table = MulticastTable::new();

        let igmp = fs::read_to_string(IGMP_PATH).with_context(|| format!("reading {IGMP_PATH}"))?;
        table.extend_from_igmp(&igmp);

        match fs::read_to_string(IGMP6_PATH) {
            Ok(igmp6) => table.extend_from_igmp6(&igmp6),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{IGMP6_PATH} is missing, IPv6 appears to be disabled");
            }
            Err(e) => return Err(e).with_context(|| format!("reading {IGMP6_PATH}")),
        }

        Ok(table)
    }

    /// Linux does not flag self-assigned addresses.
    pub fn automatic_private_addressing(_interface: &NetworkInterface) -> bool {
        false
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback_impl {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    use lanwake_common::utils::interface::NetworkInterfaceExtension;

    use crate::discovery::IPV6_ALL_NODES;

    const IPV4_ALL_HOSTS: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 1);

    /// Without a kernel table, every multicast capable interface is assumed to have joined the
    /// all-hosts and all-nodes groups; IGMP and MLD hosts join both unconditionally.
    pub fn multicast_groups(interfaces: &[NetworkInterface]) -> anyhow::Result<MulticastTable> {
        let mut table = MulticastTable::new();
        for interface in interfaces.iter().filter(|i| i.is_multicast()) {
            table.insert(&interface.name, IpAddr::V4(IPV4_ALL_HOSTS));
            table.insert(&interface.name, IpAddr::V6(IPV6_ALL_NODES));
        }
        Ok(table)
    }

    pub fn automatic_private_addressing(interface: &NetworkInterface) -> bool {
        cfg!(windows) && interface.first_ipv4().is_some_and(|ip| ip.is_link_local())
    }
}
