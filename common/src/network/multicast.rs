//! # Multicast Membership
//!
//! Interface enumeration only reports unicast addresses, so the multicast groups joined by
//! each interface are read separately. On Linux the kernel exposes them in two tables:
//!
//! * `/proc/net/igmp`: a device header line followed by one tab-indented line per IPv4 group,
//!   the group printed as the raw network-order word in hex.
//! * `/proc/net/igmp6`: one line per IPv6 group: `index name group users flags timer`.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::trace;

/// Multicast groups joined per interface name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MulticastTable {
    groups: HashMap<String, Vec<IpAddr>>,
}

impl MulticastTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a membership, ignoring duplicates.
    pub fn insert(&mut self, interface: &str, group: IpAddr) {
        let groups = self.groups.entry(interface.to_owned()).or_default();
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    /// Groups joined by `interface`, in the order they were recorded.
    pub fn groups(&self, interface: &str) -> &[IpAddr] {
        self.groups.get(interface).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Adds the IPv4 memberships listed in the contents of `/proc/net/igmp`.
    pub fn extend_from_igmp(&mut self, contents: &str) {
        let mut device: Option<&str> = None;

        for line in contents.lines().skip(1) {
            if line.starts_with(char::is_whitespace) {
                let Some(name) = device else { continue };
                match line.split_whitespace().next().and_then(parse_igmp_group) {
                    Some(group) => self.insert(name, IpAddr::V4(group)),
                    None => trace!("skipping igmp group line {line:?}"),
                }
            } else {
                // "<idx>\t<name padded to 10>: <count> <querier>"; long names swallow the space.
                device = line
                    .split_whitespace()
                    .nth(1)
                    .map(|name| name.trim_end_matches(':'));
            }
        }
    }

    /// Adds the IPv6 memberships listed in the contents of `/proc/net/igmp6`.
    pub fn extend_from_igmp6(&mut self, contents: &str) {
        for line in contents.lines() {
            let mut fields = line.split_whitespace();
            let (Some(_index), Some(name), Some(group)) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };

            match u128::from_str_radix(group, 16) {
                Ok(bits) if group.len() == 32 => self.insert(name, IpAddr::V6(Ipv6Addr::from(bits))),
                _ => trace!("skipping igmp6 line {line:?}"),
            }
        }
    }
}

// The kernel prints the big-endian word with %08X, so the host's native byte order recovers
// the octets.
fn parse_igmp_group(hex: &str) -> Option<Ipv4Addr> {
    if hex.len() != 8 {
        return None;
    }
    let raw = u32::from_str_radix(hex, 16).ok()?;
    Some(Ipv4Addr::from(raw.to_ne_bytes()))
}
