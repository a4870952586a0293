use crate::network::mac::PhysicalAddress;

const SYNC_STREAM: [u8; 6] = [0xFF; 6];
const REPETITIONS: usize = 16;

/// Size of the largest magic packet (EUI-64 target).
pub const MAX_PACKET_LEN: usize = SYNC_STREAM.len() + REPETITIONS * 8;

/// The Wake-on-LAN payload: six `0xFF` bytes followed by the target address repeated 16 times.
///
/// 102 bytes for an EUI-48 target, 134 bytes for EUI-64. Lives entirely on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicPacket {
    buffer: [u8; MAX_PACKET_LEN],
    len: usize,
}

impl MagicPacket {
    pub fn new(address: &PhysicalAddress) -> Self {
        let target = address.as_bytes();
        let len = SYNC_STREAM.len() + REPETITIONS * target.len();

        let mut buffer = [0u8; MAX_PACKET_LEN];
        let (sync, body) = buffer[..len].split_at_mut(SYNC_STREAM.len());
        sync.copy_from_slice(&SYNC_STREAM);
        for chunk in body.chunks_exact_mut(target.len()) {
            chunk.copy_from_slice(target);
        }

        Self { buffer, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }
}

impl AsRef<[u8]> for MagicPacket {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
