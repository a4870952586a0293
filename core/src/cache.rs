//! # Client Cache
//!
//! Interface enumeration is comparatively slow and the result rarely changes, so long running
//! callers keep one [`ClientCache`] and ask it for a [`WolClient`] per request. The cached
//! discovery result is reused until its time-to-live has passed, then replaced wholesale.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use lanwake_common::config::DiscoveryOptions;
use tracing::debug;

use crate::client::WolClient;
use crate::discovery::InterfaceSource;
use crate::network::interface::SystemInterfaces;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock> Clock for Arc<C> {
    fn now(&self) -> Instant {
        self.as_ref().now()
    }
}

struct Cached {
    client: WolClient,
    expires_at: Instant,
}

/// Memoizes discovery for a bounded time window.
///
/// Refreshes are serialized: concurrent callers that find the entry stale wait for a single
/// discovery pass instead of racing their own.
pub struct ClientCache<C: Clock = SystemClock> {
    clock: C,
    options: DiscoveryOptions,
    source: Box<dyn InterfaceSource + Send + Sync>,
    ttl: Duration,
    current: Mutex<Option<Cached>>,
}

impl ClientCache<SystemClock> {
    pub fn new(options: DiscoveryOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: Clock> ClientCache<C> {
    pub fn with_clock(clock: C, options: DiscoveryOptions) -> Self {
        Self::with_source(clock, options, Box::new(SystemInterfaces))
    }

    pub fn with_source(
        clock: C,
        options: DiscoveryOptions,
        source: Box<dyn InterfaceSource + Send + Sync>,
    ) -> Self {
        Self {
            clock,
            options,
            source,
            ttl: DEFAULT_TTL,
            current: Mutex::new(None),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the cached client, running discovery first when there is none or the clock has
    /// moved past its expiry.
    pub fn get(&self) -> WolClient {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();

        if let Some(cached) = current.as_ref() {
            if now <= cached.expires_at {
                return cached.client.clone();
            }
            debug!("Discovery result expired, refreshing");
        }

        let client = WolClient::with_source(self.source.as_ref(), &self.options);
        *current = Some(Cached {
            client: client.clone(),
            expires_at: now + self.ttl,
        });
        client
    }

    /// Drops the cached result so the next [`get`](Self::get) rediscovers.
    pub fn invalidate(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
