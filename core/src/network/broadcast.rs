use std::net::{IpAddr, SocketAddr};

use lanwake_common::error::{TransportError, WakeError};
use lanwake_common::network::endpoint::{Endpoint, InterfaceBinding};
use lanwake_common::network::packet::MagicPacket;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

use crate::cancel::Cancellation;

/// Outcome of a fully successful [`send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReport {
    /// Destinations the packet was transmitted to.
    pub sent: usize,
}

/// Sends `packet` from every binding's local address to each of its endpoints.
///
/// Sends are strictly sequential with one socket open at a time; a binding's socket is closed
/// once its endpoints have been served. A failed bind or send does not stop the remaining
/// destinations from being tried. All failures are returned together in
/// [`WakeError::Transport`].
pub async fn send(
    bindings: &[InterfaceBinding],
    packet: &MagicPacket,
    cancellation: &Cancellation,
) -> Result<SendReport, WakeError> {
    if cancellation.is_cancelled() {
        return Err(WakeError::Cancelled);
    }

    let attempted: usize = bindings.iter().map(|b| b.endpoints().len()).sum();
    let mut sent = 0;
    let mut failures: Vec<TransportError> = Vec::new();

    for binding in bindings {
        let local = binding.local();
        let socket = match UdpSocket::bind(SocketAddr::new(local, 0)).await {
            Ok(socket) => socket,
            Err(source) => {
                warn!("Could not bind to {local}, skipping {} endpoint(s)", binding.endpoints().len());
                failures.push(TransportError::Bind { local, source });
                continue;
            }
        };

        for endpoint in binding.endpoints() {
            if cancellation.is_cancelled() {
                debug!("Cancelled after {sent} of {attempted} sends");
                return Err(WakeError::Cancelled);
            }

            match send_to(&socket, local, endpoint, packet).await {
                Ok(()) => {
                    debug!("Sent {} bytes from {local} to {endpoint}", packet.as_bytes().len());
                    sent += 1;
                }
                Err(e) => {
                    warn!("{e}");
                    failures.push(e);
                }
            }
        }
    }

    if failures.is_empty() {
        Ok(SendReport { sent })
    } else {
        Err(WakeError::Transport {
            sent,
            attempted,
            failures,
        })
    }
}

async fn send_to(
    socket: &UdpSocket,
    local: IpAddr,
    endpoint: &Endpoint,
    packet: &MagicPacket,
) -> Result<(), TransportError> {
    let enable = endpoint.is_broadcast();
    socket
        .set_broadcast(enable)
        .map_err(|source| TransportError::SetBroadcast {
            endpoint: *endpoint,
            enable,
            source,
        })?;

    socket
        .send_to(packet.as_bytes(), endpoint.socket_addr())
        .await
        .map_err(|source| TransportError::Send {
            local,
            endpoint: *endpoint,
            source,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::time::Duration;

    use lanwake_common::network::mac::PhysicalAddress;
    use tokio::time::timeout;

    const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    async fn listener() -> (UdpSocket, Endpoint) {
        let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = socket.local_addr().unwrap().port();
        (socket, Endpoint::new(LOOPBACK, port))
    }

    async fn receive(socket: &UdpSocket) -> Vec<u8> {
        let mut buffer = [0u8; 512];
        let (len, _) = timeout(Duration::from_secs(2), socket.recv_from(&mut buffer))
            .await
            .expect("no datagram received")
            .unwrap();
        buffer[..len].to_vec()
    }

    fn packet() -> MagicPacket {
        MagicPacket::new(&PhysicalAddress::from([0x01, 0x23, 0x45, 0x67, 0x89, 0xAB]))
    }

    #[tokio::test]
    async fn delivers_to_every_endpoint_in_order() {
        let (first, first_endpoint) = listener().await;
        let (second, second_endpoint) = listener().await;
        let bindings = vec![InterfaceBinding::new(LOOPBACK, vec![first_endpoint, second_endpoint])];

        let report = send(&bindings, &packet(), &Cancellation::new()).await.unwrap();

        assert_eq!(report, SendReport { sent: 2 });
        assert_eq!(receive(&first).await, packet().as_bytes());
        assert_eq!(receive(&second).await, packet().as_bytes());
    }

    #[tokio::test]
    async fn keeps_going_after_a_failed_endpoint() {
        let (socket, endpoint) = listener().await;
        // An IPv4 socket cannot send to an IPv6 destination.
        let unreachable = Endpoint::new("::1".parse().unwrap(), endpoint.port());
        let bindings = vec![InterfaceBinding::new(LOOPBACK, vec![unreachable, endpoint])];

        let result = send(&bindings, &packet(), &Cancellation::new()).await;

        match result {
            Err(WakeError::Transport { sent, attempted, failures }) => {
                assert_eq!((sent, attempted), (1, 2));
                assert!(matches!(failures.as_slice(), [TransportError::Send { .. }]));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(receive(&socket).await, packet().as_bytes());
    }

    #[tokio::test]
    async fn keeps_going_after_a_failed_bind() {
        let (socket, endpoint) = listener().await;
        // TEST-NET-1 is never assigned to a local interface.
        let foreign = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        let bindings = vec![
            InterfaceBinding::new(foreign, vec![endpoint]),
            InterfaceBinding::new(LOOPBACK, vec![endpoint]),
        ];

        let result = send(&bindings, &packet(), &Cancellation::new()).await;

        match result {
            Err(WakeError::Transport { sent, attempted, failures }) => {
                assert_eq!((sent, attempted), (1, 2));
                assert!(matches!(failures.as_slice(), [TransportError::Bind { .. }]));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(receive(&socket).await, packet().as_bytes());
    }

    #[tokio::test]
    async fn cancelled_request_sends_nothing() {
        let (socket, endpoint) = listener().await;
        let bindings = vec![InterfaceBinding::new(LOOPBACK, vec![endpoint])];
        let cancellation = Cancellation::new();
        cancellation.cancel();

        let result = send(&bindings, &packet(), &cancellation).await;

        assert!(matches!(result, Err(WakeError::Cancelled)));
        let mut buffer = [0u8; 512];
        assert!(timeout(Duration::from_millis(200), socket.recv_from(&mut buffer)).await.is_err());
    }
}
