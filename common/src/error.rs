use std::io;
use std::net::IpAddr;

use thiserror::Error;

use crate::network::endpoint::Endpoint;

/// Errors raised while turning text or raw bytes into a [`PhysicalAddress`](crate::network::mac::PhysicalAddress).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid MAC address: {0:?}")]
    InvalidFormat(String),
    #[error("MAC address must be either EUI-48 or EUI-64, got {0} bytes")]
    InvalidLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format specifier was invalid")]
    InvalidSpecifier,
    /// Returned by the bounded-buffer entry points; nothing has been written.
    #[error("destination holds {available} bytes but {required} are required")]
    BufferTooSmall { required: usize, available: usize },
}

/// A socket operation that failed at the OS level.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to bind UDP socket to {local}")]
    Bind {
        local: IpAddr,
        #[source]
        source: io::Error,
    },
    #[error("failed to set SO_BROADCAST={enable} before sending to {endpoint}")]
    SetBroadcast {
        endpoint: Endpoint,
        enable: bool,
        #[source]
        source: io::Error,
    },
    #[error("failed to send magic packet from {local} to {endpoint}")]
    Send {
        local: IpAddr,
        endpoint: Endpoint,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum WakeError {
    /// Discovery produced no binding at all. Only reachable when restricted to IPv6.
    #[error("no usable network interface for the requested address family")]
    NoInterfacesAvailable,
    /// One or more destinations could not be reached. Every destination was still attempted.
    #[error("magic packet reached {sent} of {attempted} destinations")]
    Transport {
        sent: usize,
        attempted: usize,
        failures: Vec<TransportError>,
    },
    #[error("wake request was cancelled")]
    Cancelled,
}
