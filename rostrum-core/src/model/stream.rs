use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
pub struct StreamId(pub Uuid);

impl StreamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StreamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a live media stream. The actual media lives in the
/// capture/transport collaborators; this crate only routes the handle.
/// Remote streams arrive attributed to the publishing peer, locally
/// captured ones carry no attribution.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct MediaStream {
    pub id: StreamId,
    pub peer_id: Option<PeerId>,
}

impl MediaStream {
    pub fn local() -> Self {
        Self {
            id: StreamId::new(),
            peer_id: None,
        }
    }

    pub fn remote(peer_id: impl Into<PeerId>) -> Self {
        Self {
            id: StreamId::new(),
            peer_id: Some(peer_id.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}
