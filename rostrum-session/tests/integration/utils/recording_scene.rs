use async_trait::async_trait;
use rostrum_core::{AnnotationMark, MediaStream, PeerId, StreamId};
use rostrum_session::SceneOutput;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Attach {
        peer_id: PeerId,
        stream: StreamId,
        local: bool,
    },
    Detach {
        peer_id: PeerId,
    },
    ShowMark {
        peer_id: PeerId,
        mark: AnnotationMark,
    },
    ClearMark {
        peer_id: PeerId,
    },
}

/// Mock SceneOutput that records every call (for verification).
pub struct RecordingScene {
    calls: Mutex<Vec<SceneCall>>,
    show_mark_delay: std::sync::Mutex<Option<std::time::Duration>>,
}

impl RecordingScene {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            show_mark_delay: std::sync::Mutex::new(None),
        })
    }

    /// Make every `show_mark` take this long, so tests can race other
    /// work against an in-progress render.
    pub fn set_show_mark_delay(&self, delay: std::time::Duration) {
        *self.show_mark_delay.lock().unwrap() = Some(delay);
    }

    pub async fn calls(&self) -> Vec<SceneCall> {
        self.calls.lock().await.clone()
    }

    pub async fn marks_shown_for(&self, peer_id: &PeerId) -> Vec<AnnotationMark> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|c| match c {
                SceneCall::ShowMark { peer_id: id, mark } if id == peer_id => Some(*mark),
                _ => None,
            })
            .collect()
    }

    pub async fn clear_count_for(&self, peer_id: &PeerId) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| matches!(c, SceneCall::ClearMark { peer_id: id } if id == peer_id))
            .count()
    }

    pub async fn attach_count_for(&self, peer_id: &PeerId) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| matches!(c, SceneCall::Attach { peer_id: id, .. } if id == peer_id))
            .count()
    }

    pub async fn has_local_attach_for(&self, peer_id: &PeerId) -> bool {
        self.calls.lock().await.iter().any(|c| {
            matches!(c, SceneCall::Attach { peer_id: id, local: true, .. } if id == peer_id)
        })
    }

    pub async fn was_detached(&self, peer_id: &PeerId) -> bool {
        self.calls
            .lock()
            .await
            .iter()
            .any(|c| matches!(c, SceneCall::Detach { peer_id: id } if id == peer_id))
    }
}

#[async_trait]
impl SceneOutput for RecordingScene {
    async fn attach_participant(&self, peer_id: PeerId, stream: MediaStream, local: bool) {
        self.calls.lock().await.push(SceneCall::Attach {
            peer_id,
            stream: stream.id,
            local,
        });
    }

    async fn detach_participant(&self, peer_id: &PeerId) {
        self.calls.lock().await.push(SceneCall::Detach {
            peer_id: peer_id.clone(),
        });
    }

    async fn show_mark(&self, peer_id: PeerId, mark: AnnotationMark) {
        let delay = *self.show_mark_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.calls
            .lock()
            .await
            .push(SceneCall::ShowMark { peer_id, mark });
    }

    async fn clear_mark(&self, peer_id: &PeerId) {
        self.calls.lock().await.push(SceneCall::ClearMark {
            peer_id: peer_id.clone(),
        });
    }
}
