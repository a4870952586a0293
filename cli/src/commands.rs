pub mod format;
pub mod interfaces;
pub mod wake;

use clap::{Args, Parser, Subcommand};
use lanwake_common::config::{DEFAULT_PORT, DiscoveryOptions, FamilyFilter};
use lanwake_common::network::mac::{FormatSpec, PhysicalAddress};

#[derive(Parser)]
#[command(name = "lanwake")]
#[command(about = "Wake machines on the local network.")]
pub struct CommandLine {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send magic packets to a device
    #[command(alias = "w")]
    Wake(WakeArgs),
    /// Show the interfaces and destinations magic packets would use
    #[command(alias = "i")]
    Interfaces {
        #[command(flatten)]
        discovery: DiscoveryArgs,
    },
    /// Print a MAC address in another notation
    #[command(alias = "f")]
    Format {
        address: PhysicalAddress,
        /// One of M (compact), D (dashed), C (colon), X (dotted); lowercase for lowercase hex
        #[arg(short = 'f', long = "format", default_value = "D")]
        spec: FormatSpec,
    },
}

#[derive(Args)]
pub struct WakeArgs {
    /// MAC address of the target (EUI-48 or EUI-64), or an IPv4 address to look up in the ARP
    /// cache. Lookups only succeed while the device is online or still cached.
    pub address: String,

    /// Number of magic packets to send
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Milliseconds between magic packets
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

#[derive(Args)]
pub struct DiscoveryArgs {
    /// Destination UDP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Only use IPv4
    #[arg(short = '4', long, conflicts_with = "ipv6_only")]
    pub ipv4_only: bool,

    /// Only use IPv6
    #[arg(short = '6', long)]
    pub ipv6_only: bool,

    /// Stop after the first usable network interface
    #[arg(short, long)]
    pub single_interface: bool,

    /// Skip interface discovery and send to 255.255.255.255
    #[arg(short, long)]
    pub broadcast: bool,
}

impl DiscoveryArgs {
    pub fn to_options(&self) -> DiscoveryOptions {
        let family = match (self.ipv4_only, self.ipv6_only) {
            (true, _) => FamilyFilter::Ipv4,
            (false, true) => FamilyFilter::Ipv6,
            (false, false) => FamilyFilter::Unspecified,
        };

        DiscoveryOptions {
            family,
            port: self.port,
            single_interface: self.single_interface,
            prefer_broadcast: self.broadcast,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
