//! IP to MAC resolution through the operating system's ARP cache.
//!
//! Only entries the kernel already knows about can be resolved, so the target must be online
//! or have been seen recently.

use std::net::Ipv4Addr;

use anyhow::anyhow;
use lanwake_common::network::mac::PhysicalAddress;
use tracing::info;

/// ATF_COM: the entry holds a completed hardware address.
const ATF_COM: u32 = 0x2;

/// Parses `input` as a MAC address, or looks it up as an IPv4 address.
pub fn resolve_target(input: &str) -> anyhow::Result<PhysicalAddress> {
    if let Ok(address) = PhysicalAddress::parse(input) {
        return Ok(address);
    }

    let ip: Ipv4Addr = input
        .parse()
        .map_err(|_| anyhow!("Invalid MAC/IP address: {input}"))?;

    let address = arp_lookup(ip)?;
    info!("Resolved {ip} to {address}");
    Ok(address)
}

#[cfg(target_os = "linux")]
fn arp_lookup(ip: Ipv4Addr) -> anyhow::Result<PhysicalAddress> {
    use anyhow::Context;

    const ARP_PATH: &str = "/proc/net/arp";

    let table = std::fs::read_to_string(ARP_PATH).with_context(|| format!("reading {ARP_PATH}"))?;
    find_in_arp_table(&table, ip).ok_or_else(|| anyhow!("{ip} has no complete entry in the ARP cache"))
}

#[cfg(not(target_os = "linux"))]
fn arp_lookup(_ip: Ipv4Addr) -> anyhow::Result<PhysicalAddress> {
    anyhow::bail!("Resolving MAC addresses from an IP address is only supported on Linux")
}

/// Finds `ip` in the contents of `/proc/net/arp`.
///
/// Columns: `IP address, HW type, Flags, HW address, Mask, Device`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn find_in_arp_table(table: &str, ip: Ipv4Addr) -> Option<PhysicalAddress> {
    table.lines().skip(1).find_map(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [entry_ip, _hw_type, flags, hw_address, ..] = fields.as_slice() else {
            return None;
        };

        if entry_ip.parse::<Ipv4Addr>().ok()? != ip {
            return None;
        }

        let flags = u32::from_str_radix(flags.trim_start_matches("0x"), 16).ok()?;
        if flags & ATF_COM == 0 {
            return None;
        }

        PhysicalAddress::parse(hw_address).ok()
    })
}
