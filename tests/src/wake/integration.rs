#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use lanwake_common::config::{DiscoveryOptions, FamilyFilter};
use lanwake_common::error::WakeError;
use lanwake_common::network::endpoint::{Endpoint, InterfaceBinding};
use lanwake_common::network::mac::PhysicalAddress;
use lanwake_core::cancel::Cancellation;
use lanwake_core::client::WolClient;
use lanwake_core::discovery;
use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::util::lan_host;

/// Text address in, magic packet out on a loopback listener.
#[tokio::test]
async fn wake_delivers_magic_packet_over_loopback() {
    let listener = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let client = WolClient::from_bindings(vec![InterfaceBinding::new(
        loopback,
        vec![Endpoint::new(loopback, port)],
    )]);

    let address: PhysicalAddress = "01.23.45.67.89.ab".parse().unwrap();
    let report = client.wake(&address, &Cancellation::new()).await.unwrap();
    assert_eq!(report.sent, 1);

    let mut buffer = [0u8; 256];
    let (len, _) = timeout(Duration::from_secs(2), listener.recv_from(&mut buffer))
        .await
        .expect("no magic packet received")
        .unwrap();

    assert_eq!(len, 102);
    assert_eq!(&buffer[..6], &[0xFF; 6]);
    for repetition in buffer[6..len].chunks(6) {
        assert_eq!(repetition, &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB]);
    }
}

#[tokio::test]
async fn repeated_wakes_reuse_one_discovery_result() {
    let listener = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let client = WolClient::from_bindings(vec![InterfaceBinding::new(
        loopback,
        vec![Endpoint::new(loopback, port)],
    )]);
    let address = PhysicalAddress::from([0x02, 0, 0, 0, 0, 0x01]);
    let cancellation = Cancellation::new();

    for _ in 0..3 {
        client.wake(&address, &cancellation).await.unwrap();
    }

    let mut buffer = [0u8; 256];
    for _ in 0..3 {
        let (len, _) = timeout(Duration::from_secs(2), listener.recv_from(&mut buffer))
            .await
            .expect("missing repetition")
            .unwrap();
        assert_eq!(len, 102);
    }
}

#[tokio::test]
async fn cancelled_wake_is_reported() {
    let client = WolClient::from_bindings(vec![InterfaceBinding::broadcast_fallback(9)]);
    let cancellation = Cancellation::new();
    cancellation.cancel();

    let result = client.wake(&PhysicalAddress::from([0u8; 8]), &cancellation).await;
    assert!(matches!(result, Err(WakeError::Cancelled)), "got {result:?}");
}

#[test]
fn system_discovery_with_preferred_broadcast_uses_fallback() {
    let options = DiscoveryOptions {
        prefer_broadcast: true,
        port: 7,
        ..DiscoveryOptions::default()
    };

    assert_eq!(discovery::discover(&options), vec![InterfaceBinding::broadcast_fallback(7)]);
}

#[test]
fn system_discovery_is_never_empty_for_ipv4() {
    let options = DiscoveryOptions {
        family: FamilyFilter::Ipv4,
        ..DiscoveryOptions::default()
    };

    let bindings = discovery::discover(&options);
    assert!(!bindings.is_empty());
    for binding in &bindings {
        assert!(binding.local().is_ipv4());
        assert!(!binding.endpoints().is_empty());
    }
}

#[test]
fn lan_host_discovery_orders_ipv6_before_ipv4() {
    let source = lan_host();
    let client = WolClient::with_source(&source, &DiscoveryOptions::default());

    let expected = vec![
        InterfaceBinding::new(
            "2001:db8::10".parse().unwrap(),
            vec![Endpoint::scoped("ff02::1".parse().unwrap(), 9, 2)],
        ),
        InterfaceBinding::new(
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)),
            vec![Endpoint::new(IpAddr::V4(Ipv4Addr::new(224, 0, 0, 1)), 9)],
        ),
    ];
    assert_eq!(client.bindings(), expected.as_slice());
}
