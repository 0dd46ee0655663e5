use async_trait::async_trait;
use rostrum_core::{AnnotationMark, MediaStream, PeerId};

/// The rendering surface the coordinator drives: one video slot per
/// participant plus transient pointer marks over the presenter stream.
#[async_trait]
pub trait SceneOutput: Send + Sync {
    /// Attach a participant's stream to its video slot. Attaching an id
    /// that already has a slot replaces the slot's stream.
    async fn attach_participant(&self, peer_id: PeerId, stream: MediaStream, local: bool);

    /// Remove a participant's video slot.
    async fn detach_participant(&self, peer_id: &PeerId);

    /// Render a pointer mark for a participant, replacing any mark that
    /// participant already has.
    async fn show_mark(&self, peer_id: PeerId, mark: AnnotationMark);

    /// Remove a participant's pointer mark, if any.
    async fn clear_mark(&self, peer_id: &PeerId);
}
