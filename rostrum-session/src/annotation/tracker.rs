use crate::scene::SceneOutput;
use dashmap::DashMap;
use rostrum_core::{AnnotationMark, PeerId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long a pointer mark stays on screen after the tap that placed it.
pub const MARK_TTL: Duration = Duration::from_secs(4);

struct MarkTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Per-participant timed pointer marks.
///
/// Each participant has at most one live mark. Recording a new mark for
/// a participant cancels the pending expiry before arming a fresh one,
/// so the mark always survives the full interval from the latest tap.
/// Timers for different participants never interact.
pub struct AnnotationTracker {
    scene: Arc<dyn SceneOutput>,
    timers: Arc<DashMap<PeerId, MarkTimer>>,
    generation: AtomicU64,
    ttl: Duration,
}

impl AnnotationTracker {
    pub fn new(scene: Arc<dyn SceneOutput>) -> Self {
        Self::with_ttl(scene, MARK_TTL)
    }

    pub fn with_ttl(scene: Arc<dyn SceneOutput>, ttl: Duration) -> Self {
        Self {
            scene,
            timers: Arc::new(DashMap::new()),
            generation: AtomicU64::new(0),
            ttl,
        }
    }

    /// Render a mark for `peer_id` and (re)arm its expiry.
    pub async fn record(&self, peer_id: PeerId, x: f64, y: f64) {
        // The old timer dies before anything else happens; an expiry
        // firing while the replacement renders would tear the fresh
        // mark right back down.
        if let Some((_, old)) = self.timers.remove(&peer_id) {
            old.handle.abort();
        }

        let mark = AnnotationMark::from_point(x, y);
        self.scene.show_mark(peer_id.clone(), mark).await;

        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let timers = Arc::clone(&self.timers);
        let scene = Arc::clone(&self.scene);
        let ttl = self.ttl;
        let expiry_peer = peer_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // Only the generation that armed this timer may clear the
            // mark; a reset that raced the expiry wins.
            let owned = timers
                .remove_if(&expiry_peer, |_, timer| timer.generation == generation)
                .is_some();
            if owned {
                debug!("Pointer mark for {} expired", expiry_peer);
                scene.clear_mark(&expiry_peer).await;
            }
        });

        self.timers.insert(peer_id, MarkTimer { generation, handle });
    }

    /// Drop `peer_id`'s mark and its pending expiry. Used when the
    /// participant leaves before the mark times out.
    pub async fn cancel(&self, peer_id: &PeerId) {
        if let Some((_, timer)) = self.timers.remove(peer_id) {
            timer.handle.abort();
            self.scene.clear_mark(peer_id).await;
        }
    }

    /// Abort every pending expiry. Teardown only; the scene is assumed
    /// to be going away with the session.
    pub fn clear_all(&self) {
        self.timers.retain(|_, timer| {
            timer.handle.abort();
            false
        });
    }
}
