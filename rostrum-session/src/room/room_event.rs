use bytes::Bytes;
use rostrum_core::{MediaStream, PeerId};

/// Inbound events the room transport delivers after a join.
///
/// `Data` never carries the local peer's own broadcasts; the transport
/// does not echo them back. The coordinator compensates in `dispatch`.
#[derive(Debug, Clone)]
pub enum RoomEvent {
    Data { src: PeerId, payload: Bytes },
    Stream(MediaStream),
    PeerLeave(PeerId),
}
