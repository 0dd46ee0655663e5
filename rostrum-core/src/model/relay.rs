use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};

/// Application payload broadcast through the room's data channel.
///
/// The wire format is JSON tagged by `command`. Commands we don't know
/// deserialize into `Unknown` so that newer senders never break older
/// receivers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "command")]
pub enum RelayMessage {
    /// A participant tapped the presenter surface at the given normalized
    /// coordinates (both in [0, 1]).
    #[serde(rename = "point-presenter-stream", rename_all = "camelCase")]
    PointPresenterStream { peer_id: PeerId, x: f64, y: f64 },

    #[serde(other)]
    Unknown,
}
