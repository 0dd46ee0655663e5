use crate::error::SessionError;
use async_trait::async_trait;
use rostrum_core::{DeviceDescriptor, DeviceId, MediaStream, TrackKind};

#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub audio: bool,
    pub device_id: DeviceId,
}

/// Camera/microphone access, implemented by the platform media layer.
#[async_trait]
pub trait MediaCapture: Send + Sync {
    /// List the capture devices available right now. Called fresh on
    /// every rotation so hot-plugged devices are observable.
    async fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>, SessionError>;

    /// Open a stream on the given device. The previously acquired
    /// stream's resources are released by this collaborator once the
    /// coordinator stops referencing it.
    async fn acquire_stream(&self, request: CaptureRequest) -> Result<MediaStream, SessionError>;

    /// Enable or disable one kind of track on a live stream (mute /
    /// unmute without renegotiation).
    async fn set_track_enabled(
        &self,
        stream: &MediaStream,
        kind: TrackKind,
        enabled: bool,
    ) -> Result<(), SessionError>;
}
