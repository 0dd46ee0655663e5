use crate::annotation::AnnotationTracker;
use crate::capture::{CaptureRequest, MediaCapture};
use crate::error::SessionError;
use crate::room::{JoinOptions, RoomEvent, RoomHandle, RoomTransport};
use crate::scene::SceneOutput;
use crate::session::config::SessionConfig;
use bytes::Bytes;
use dashmap::DashMap;
use rostrum_core::{DeviceId, DeviceKind, MediaStream, PeerId, RelayMessage, TrackKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct Connected {
    peer_id: PeerId,
    room: Arc<dyn RoomHandle>,
    pump: JoinHandle<()>,
}

#[derive(Default)]
struct RotationState {
    current_device: Option<DeviceId>,
    local_stream: Option<MediaStream>,
    /// Sequence number of the rotation that last updated this state.
    /// A slower rotation finishing after a newer one must not win.
    applied_seq: u64,
}

/// Owns peer identity, room membership and the local capture stream.
///
/// One coordinator per session. All room traffic flows through two
/// funnels: `dispatch` outbound and `on_room_event` inbound.
pub struct SessionCoordinator {
    transport: Arc<dyn RoomTransport>,
    capture: Arc<dyn MediaCapture>,
    scene: Arc<dyn SceneOutput>,
    annotations: AnnotationTracker,
    participants: DashMap<PeerId, MediaStream>,
    state: Mutex<Option<Connected>>,
    rotation: Mutex<RotationState>,
    rotation_seq: AtomicU64,
}

impl SessionCoordinator {
    pub fn new(
        transport: Arc<dyn RoomTransport>,
        capture: Arc<dyn MediaCapture>,
        scene: Arc<dyn SceneOutput>,
    ) -> Self {
        Self {
            transport,
            capture,
            annotations: AnnotationTracker::new(Arc::clone(&scene)),
            scene,
            participants: DashMap::new(),
            state: Mutex::new(None),
            rotation: Mutex::new(RotationState::default()),
            rotation_seq: AtomicU64::new(0),
        }
    }

    /// Establish identity, capture the first local stream and join the
    /// room. On any failure the coordinator stays disconnected with no
    /// partial membership.
    pub async fn connect(self: &Arc<Self>, config: &SessionConfig) -> Result<(), SessionError> {
        let (room_id, mode) = config.validate()?;

        let mut state = self.state.lock().await;
        if state.is_some() {
            return Err(SessionError::Connection(
                "already connected to a room".to_string(),
            ));
        }

        let peer_id = self.transport.connect(&config.key).await?;
        let (stream, _) = self.next_video_stream().await?;

        let (room, events) = self
            .transport
            .join(
                &room_id,
                JoinOptions {
                    mode,
                    stream: stream.clone(),
                },
            )
            .await?;

        // Local slot goes up immediately, without waiting on any room
        // round-trip.
        self.scene
            .attach_participant(peer_id.clone(), stream.clone(), true)
            .await;
        self.participants.insert(peer_id.clone(), stream);

        let pump = tokio::spawn(Arc::clone(self).run_events(events));

        info!("Peer {} joined room {} in {} mode", peer_id, room_id, mode);
        *state = Some(Connected {
            peer_id,
            room,
            pump,
        });

        Ok(())
    }

    pub async fn disconnect(&self) {
        let mut state = self.state.lock().await;
        if let Some(connected) = state.take() {
            connected.pump.abort();
            self.annotations.clear_all();
            self.participants.clear();
            info!("Peer {} left the room", connected.peer_id);
        }
    }

    pub async fn peer_id(&self) -> Option<PeerId> {
        self.state.lock().await.as_ref().map(|c| c.peer_id.clone())
    }

    pub async fn is_connected(&self) -> bool {
        self.state.lock().await.is_some()
    }

    pub fn has_participant(&self, peer_id: &PeerId) -> bool {
        self.participants.contains_key(peer_id)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Switch the local capture to the next video device and, when
    /// connected, push the new stream to the room.
    pub async fn rotate_camera(&self) -> Result<MediaStream, SessionError> {
        let (stream, applied) = self.next_video_stream().await?;
        if !applied {
            debug!("Rotation finished after a newer one; not publishing");
            return Ok(stream);
        }

        let state = self.state.lock().await;
        if let Some(connected) = state.as_ref() {
            connected.room.replace_outbound_stream(stream.clone()).await?;
            self.scene
                .attach_participant(connected.peer_id.clone(), stream.clone(), true)
                .await;
            self.participants
                .insert(connected.peer_id.clone(), stream.clone());
        }

        Ok(stream)
    }

    // Returns the stream and whether this call was allowed to update
    // the device selection (it is not when a newer rotation completed
    // first).
    async fn next_video_stream(&self) -> Result<(MediaStream, bool), SessionError> {
        let seq = self.rotation_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let devices: Vec<_> = self
            .capture
            .enumerate_devices()
            .await?
            .into_iter()
            .filter(|d| d.kind == DeviceKind::VideoInput)
            .collect();
        if devices.is_empty() {
            return Err(SessionError::NoCaptureDevice);
        }

        let current = self.rotation.lock().await.current_device.clone();
        let next = match current {
            None => &devices[0],
            Some(ref cur) => match devices.iter().position(|d| &d.id == cur) {
                // The selected device is gone; start over at the head.
                None => &devices[0],
                Some(i) if i == devices.len() - 1 => &devices[0],
                Some(i) => &devices[i + 1],
            },
        };
        let device_id = next.id.clone();
        debug!("Switching capture device to {} ({})", device_id, next.label);

        let stream = self
            .capture
            .acquire_stream(CaptureRequest {
                audio: true,
                device_id: device_id.clone(),
            })
            .await?;

        let mut rotation = self.rotation.lock().await;
        let applied = seq > rotation.applied_seq;
        if applied {
            rotation.applied_seq = seq;
            rotation.current_device = Some(device_id);
            rotation.local_stream = Some(stream.clone());
        }

        Ok((stream, applied))
    }

    /// Broadcast a relay message, then feed it back to ourselves. The
    /// room transport never delivers a sender's own broadcast, so the
    /// local echo here is the only way the local participant reacts to
    /// its own message. Outbound goes first; a transport failure is
    /// logged and does not suppress the echo.
    pub async fn dispatch(&self, message: RelayMessage) -> Result<(), SessionError> {
        let (src, room) = {
            let state = self.state.lock().await;
            let connected = state.as_ref().ok_or(SessionError::NotConnected)?;
            (connected.peer_id.clone(), Arc::clone(&connected.room))
        };

        let payload = Bytes::from(
            serde_json::to_vec(&message).map_err(|e| SessionError::Encoding(e.to_string()))?,
        );

        if let Err(e) = room.send(payload.clone()).await {
            warn!("Failed to send to room: {:?}", e);
        }
        self.on_room_event(RoomEvent::Data { src, payload }).await;

        Ok(())
    }

    /// The local participant tapped the presenter surface at
    /// normalized coordinates.
    pub async fn point_presenter(&self, x: f64, y: f64) -> Result<(), SessionError> {
        let peer_id = self.peer_id().await.ok_or(SessionError::NotConnected)?;
        self.dispatch(RelayMessage::PointPresenterStream { peer_id, x, y })
            .await
    }

    pub async fn set_audio_enabled(&self, enabled: bool) -> Result<(), SessionError> {
        self.set_track_enabled(TrackKind::Audio, enabled).await
    }

    pub async fn set_video_enabled(&self, enabled: bool) -> Result<(), SessionError> {
        self.set_track_enabled(TrackKind::Video, enabled).await
    }

    async fn set_track_enabled(&self, kind: TrackKind, enabled: bool) -> Result<(), SessionError> {
        let stream = self
            .rotation
            .lock()
            .await
            .local_stream
            .clone()
            .ok_or(SessionError::NotConnected)?;
        self.capture.set_track_enabled(&stream, kind, enabled).await
    }

    /// Single inbound funnel for everything the room delivers.
    pub async fn on_room_event(&self, event: RoomEvent) {
        match event {
            RoomEvent::Data { src, payload } => {
                match serde_json::from_slice::<RelayMessage>(&payload) {
                    Ok(RelayMessage::PointPresenterStream { peer_id, x, y }) => {
                        self.annotations.record(peer_id, x, y).await;
                    }
                    Ok(RelayMessage::Unknown) => {
                        debug!("Ignoring unknown relay command from {}", src);
                    }
                    Err(e) => {
                        debug!("Ignoring malformed relay payload from {}: {}", src, e);
                    }
                }
            }

            RoomEvent::Stream(stream) => {
                let Some(peer_id) = stream.peer_id.clone() else {
                    warn!("Remote stream without peer attribution; dropping");
                    return;
                };
                info!("Remote participant {} published a stream", peer_id);
                // Re-publication by a peer we already show replaces the
                // slot instead of adding a second one.
                self.scene
                    .attach_participant(peer_id.clone(), stream.clone(), false)
                    .await;
                self.participants.insert(peer_id, stream);
            }

            RoomEvent::PeerLeave(peer_id) => {
                info!("Participant {} left", peer_id);
                self.participants.remove(&peer_id);
                self.scene.detach_participant(&peer_id).await;
                // Don't leave a timer aimed at a slot that no longer
                // exists.
                self.annotations.cancel(&peer_id).await;
            }
        }
    }

    async fn run_events(self: Arc<Self>, mut events: mpsc::Receiver<RoomEvent>) {
        while let Some(event) = events.recv().await {
            self.on_room_event(event).await;
        }
        debug!("Room event feed closed");
    }
}
