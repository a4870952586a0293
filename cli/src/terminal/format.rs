use std::net::IpAddr;

use colored::*;
use lanwake_common::network::endpoint::Endpoint;

use crate::terminal::colors;

/// Labels an endpoint by the kind of destination it is.
pub fn endpoint_to_detail(endpoint: &Endpoint) -> (String, ColoredString) {
    let (key, color) = match endpoint.ip() {
        _ if endpoint.is_broadcast() => ("Bcast", colors::BROADCAST),
        IpAddr::V4(_) => ("IPv4", colors::IPV4_ADDR),
        IpAddr::V6(_) => ("IPv6", colors::IPV6_ADDR),
    };
    (key.to_string(), endpoint.to_string().color(color))
}
