use std::net::{Ipv4Addr, Ipv6Addr};

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

/// Address selection helpers on top of `pnet`'s interface description.
pub trait NetworkInterfaceExtension {
    fn ipv4_addrs(&self) -> impl Iterator<Item = Ipv4Addr> + '_;
    fn ipv6_addrs(&self) -> impl Iterator<Item = Ipv6Addr> + '_;

    /// First IPv4 address in the order the system reported them.
    fn first_ipv4(&self) -> Option<Ipv4Addr> {
        self.ipv4_addrs().next()
    }

    /// First IPv6 address that is usable as a routable source (not link-local).
    fn first_routable_ipv6(&self) -> Option<Ipv6Addr> {
        self.ipv6_addrs().find(|ip| !ip.is_unicast_link_local())
    }
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn ipv4_addrs(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.ips.iter().filter_map(|net| match net {
            IpNetwork::V4(v4) => Some(v4.ip()),
            IpNetwork::V6(_) => None,
        })
    }

    fn ipv6_addrs(&self) -> impl Iterator<Item = Ipv6Addr> + '_ {
        self.ips.iter().filter_map(|net| match net {
            IpNetwork::V6(v6) => Some(v6.ip()),
            IpNetwork::V4(_) => None,
        })
    }
}
