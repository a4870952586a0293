/// Default Wake-on-LAN destination port (discard).
pub const DEFAULT_PORT: u16 = 9;

/// Restricts discovery to one IP family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FamilyFilter {
    #[default]
    Unspecified,
    Ipv4,
    Ipv6,
}

impl FamilyFilter {
    pub fn includes_ipv4(self) -> bool {
        matches!(self, FamilyFilter::Unspecified | FamilyFilter::Ipv4)
    }

    pub fn includes_ipv6(self) -> bool {
        matches!(self, FamilyFilter::Unspecified | FamilyFilter::Ipv6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Which IP families to look for on each interface.
    pub family: FamilyFilter,
    /// Destination UDP port of every endpoint.
    pub port: u16,
    /// Stop after the first interface that yields a binding.
    pub single_interface: bool,
    /// Skips interface enumeration entirely.
    ///
    /// Discovery then returns the limited broadcast fallback only.
    pub prefer_broadcast: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            family: FamilyFilter::Unspecified,
            port: DEFAULT_PORT,
            single_interface: false,
            prefer_broadcast: false,
        }
    }
}
