//! # lanwake common
//!
//! Value types shared by the discovery/broadcast core and the command line:
//!
//! * **[`network::mac`]**: the EUI-48/EUI-64 address codec.
//! * **[`network::endpoint`]**: destinations and per-interface bindings.
//! * **[`network::packet`]**: the magic packet payload.
//! * **[`network::multicast`]**: kernel multicast membership tables.
//! * **[`config`]**: discovery options.
//! * **[`error`]**: the error taxonomy of the workspace.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
