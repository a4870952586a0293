use std::sync::Arc;

use lanwake_common::config::DiscoveryOptions;
use lanwake_common::error::WakeError;
use lanwake_common::network::endpoint::InterfaceBinding;
use lanwake_common::network::mac::PhysicalAddress;
use lanwake_common::network::packet::MagicPacket;
use tracing::debug;

use crate::cancel::Cancellation;
use crate::discovery::{self, InterfaceSource};
use crate::network::broadcast::{self, SendReport};

/// A discovery result ready to send magic packets.
///
/// Cloning is cheap; clones share the same binding list.
#[derive(Debug, Clone)]
pub struct WolClient {
    bindings: Arc<[InterfaceBinding]>,
}

impl WolClient {
    /// Discovers the host's interfaces.
    pub fn new(options: &DiscoveryOptions) -> Self {
        Self::from_bindings(discovery::discover(options))
    }

    pub fn with_source(source: &dyn InterfaceSource, options: &DiscoveryOptions) -> Self {
        Self::from_bindings(discovery::discover_with(source, options))
    }

    pub fn from_bindings(bindings: Vec<InterfaceBinding>) -> Self {
        Self {
            bindings: Arc::from(bindings),
        }
    }

    pub fn bindings(&self) -> &[InterfaceBinding] {
        &self.bindings
    }

    /// True when both clients were produced by the same discovery pass.
    pub fn shares_bindings(&self, other: &WolClient) -> bool {
        Arc::ptr_eq(&self.bindings, &other.bindings)
    }

    /// Builds the magic packet for `address` once and sends it over every binding.
    pub async fn wake(
        &self,
        address: &PhysicalAddress,
        cancellation: &Cancellation,
    ) -> Result<SendReport, WakeError> {
        if cancellation.is_cancelled() {
            return Err(WakeError::Cancelled);
        }
        if self.bindings.is_empty() {
            return Err(WakeError::NoInterfacesAvailable);
        }

        let packet = MagicPacket::new(address);
        debug!("Waking {address} over {} binding(s)", self.bindings.len());
        broadcast::send(&self.bindings, &packet, cancellation).await
    }
}
