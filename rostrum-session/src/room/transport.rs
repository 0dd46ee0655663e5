use crate::error::SessionError;
use crate::room::room_event::RoomEvent;
use async_trait::async_trait;
use bytes::Bytes;
use rostrum_core::{MediaStream, PeerId, RoomId, TopologyMode};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct JoinOptions {
    pub mode: TopologyMode,
    pub stream: MediaStream,
}

/// The peer/room transport, implemented by the external system that
/// owns connection establishment and media transmission.
#[async_trait]
pub trait RoomTransport: Send + Sync {
    /// Establish peer identity. Suspends until the transport signals
    /// readiness.
    async fn connect(&self, key: &str) -> Result<PeerId, SessionError>;

    /// Join a room, publishing `options.stream` as the initial outbound
    /// media. Returns the room handle and the feed of inbound events.
    async fn join(
        &self,
        room_id: &RoomId,
        options: JoinOptions,
    ) -> Result<(Arc<dyn RoomHandle>, mpsc::Receiver<RoomEvent>), SessionError>;
}

/// A joined room. Exactly one per session; dropped on teardown.
#[async_trait]
pub trait RoomHandle: Send + Sync {
    /// Broadcast a data payload to every other participant. The sender
    /// does not receive its own broadcast back.
    async fn send(&self, payload: Bytes) -> Result<(), SessionError>;

    /// Swap the published outbound media for every remote participant.
    async fn replace_outbound_stream(&self, stream: MediaStream) -> Result<(), SessionError>;
}
