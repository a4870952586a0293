#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::thread;

use lanwake_common::config::{DiscoveryOptions, FamilyFilter};
use lanwake_common::network::endpoint::Endpoint;
use lanwake_core::cache::{ClientCache, SystemClock};

use crate::util::lan_host;

#[test]
fn system_cache_hands_out_the_same_client() {
    let cache = ClientCache::new(DiscoveryOptions::default());

    let first = cache.get();
    let second = cache.get();

    assert!(first.shares_bindings(&second));
}

#[test]
fn concurrent_callers_share_one_discovery_pass() {
    let options = DiscoveryOptions {
        family: FamilyFilter::Ipv4,
        ..DiscoveryOptions::default()
    };
    let cache = Arc::new(ClientCache::with_source(SystemClock, options, Box::new(lan_host())));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            thread::spawn(move || cache.get())
        })
        .collect();
    let clients: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for client in &clients[1..] {
        assert!(clients[0].shares_bindings(client));
    }
    assert_eq!(clients[0].bindings().len(), 1);
    assert_eq!(
        clients[0].bindings()[0].endpoints(),
        &[Endpoint::new(IpAddr::V4(Ipv4Addr::new(224, 0, 0, 1)), 9)]
    );
}

#[test]
fn invalidated_cache_rediscovers() {
    let cache = ClientCache::with_source(SystemClock, DiscoveryOptions::default(), Box::new(lan_host()));

    let first = cache.get();
    cache.invalidate();
    let second = cache.get();

    assert!(!first.shares_bindings(&second));
    assert_eq!(first.bindings(), second.bindings());
}
