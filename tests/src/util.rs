use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{Ipv4Addr, Ipv6Addr};

use lanwake_common::network::multicast::MulticastTable;
use lanwake_core::discovery::InterfaceSource;

pub const IFF_UP: u32 = 1;
pub const IFF_LOOPBACK: u32 = 1 << 3;

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Fixed interface list and membership table.
pub struct StaticSource {
    pub interfaces: Vec<NetworkInterface>,
    pub table: MulticastTable,
}

impl InterfaceSource for StaticSource {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        self.interfaces.clone()
    }

    fn multicast_groups(&self, _interfaces: &[NetworkInterface]) -> anyhow::Result<MulticastTable> {
        Ok(self.table.clone())
    }
}

/// A dual-stack LAN adapter that joined both all-hosts groups, next to loopback.
pub fn lan_host() -> StaticSource {
    let lo = ni("lo", 1, None, &[v4(127, 0, 0, 1, 8), v6("::1", 128)], IFF_UP | IFF_LOOPBACK);
    let eth0 = ni(
        "eth0",
        2,
        Some(MacAddr(0x00, 0x11, 0x22, 0x33, 0x44, 0x55)),
        &[v4(192, 168, 1, 10, 24), v6("fe80::211:22ff:fe33:4455", 64), v6("2001:db8::10", 64)],
        IFF_UP,
    );

    let mut table = MulticastTable::new();
    table.insert("lo", "224.0.0.1".parse().unwrap());
    table.insert("eth0", "224.0.0.1".parse().unwrap());
    table.insert("eth0", "224.0.0.251".parse().unwrap());
    table.insert("eth0", "ff02::1".parse().unwrap());

    StaticSource {
        interfaces: vec![lo, eth0],
        table,
    }
}
