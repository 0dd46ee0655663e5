use thiserror::Error;

/// Everything the coordination layer can fail with. Nothing here is
/// retried automatically; recovery is always caller-initiated.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Startup parameters are missing or invalid. Raised before any
    /// collaborator is touched.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Identity establishment or room join failed. The coordinator is
    /// back in the disconnected state.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Device enumeration came back empty.
    #[error("no capture device available")]
    NoCaptureDevice,

    /// A capture device exists but a stream could not be acquired
    /// (permission denied, device busy). The previous device selection
    /// is kept so the caller can retry.
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(String),

    /// The operation needs a joined room or a captured local stream.
    #[error("not connected to a room")]
    NotConnected,

    /// An outbound relay message could not be encoded.
    #[error("relay message encoding failed: {0}")]
    Encoding(String),
}
