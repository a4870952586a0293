//! # Wake Destinations
//!
//! An [`Endpoint`] is one UDP destination of a magic packet. An [`InterfaceBinding`] ties the
//! endpoints reachable over one network interface to the local address the packet is sent from.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV6};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    address: SocketAddr,
}

impl Endpoint {
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Self {
            address: SocketAddr::new(ip, port),
        }
    }

    /// An IPv6 destination scoped to an interface index.
    ///
    /// Link-local multicast groups such as `ff02::1` are ambiguous without the scope.
    pub fn scoped(ip: Ipv6Addr, port: u16, scope_id: u32) -> Self {
        Self {
            address: SocketAddr::V6(SocketAddrV6::new(ip, port, 0, scope_id)),
        }
    }

    /// The limited broadcast address `255.255.255.255`.
    pub fn broadcast(port: u16) -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::BROADCAST), port)
    }

    pub fn ip(&self) -> IpAddr {
        self.address.ip()
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.address
    }

    /// Sending to this endpoint requires `SO_BROADCAST`.
    pub fn is_broadcast(&self) -> bool {
        self.address.ip() == IpAddr::V4(Ipv4Addr::BROADCAST)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.address.fmt(f)
    }
}

/// One usable network interface: its source address and every destination reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBinding {
    local: IpAddr,
    endpoints: Vec<Endpoint>,
}

impl InterfaceBinding {
    pub fn new(local: IpAddr, endpoints: Vec<Endpoint>) -> Self {
        Self { local, endpoints }
    }

    /// Loopback source with the limited broadcast address as its only destination.
    ///
    /// Used when no multicast capable interface could be found, or when broadcast is preferred.
    pub fn broadcast_fallback(port: u16) -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::LOCALHOST), vec![Endpoint::broadcast(port)])
    }

    pub fn local(&self) -> IpAddr {
        self.local
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}
