//! # lanwake core
//!
//! Interface discovery and magic packet transmission.
//!
//! * **[`discovery`]**: picks source addresses and multicast/broadcast destinations.
//! * **[`network`]**: the system interface source and the UDP broadcaster.
//! * **[`client`]**: a discovery result bound to the broadcaster.
//! * **[`cache`]**: time-limited reuse of discovery results.
//! * **[`cancel`]**: cooperative cancellation of a wake request.

pub mod cache;
pub mod cancel;
pub mod client;
pub mod discovery;
pub mod network;
