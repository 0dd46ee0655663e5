use crate::error::SessionError;
use rostrum_core::{RoomId, TopologyMode};
use serde::{Deserialize, Serialize};

/// Startup parameters for a session, still in raw string form (they
/// typically arrive from a URL query or a config file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opaque credential for the room transport.
    pub key: String,
    pub room_id: String,
    /// Topology mode: "mesh" or "routed".
    pub network: String,
}

impl SessionConfig {
    /// Check the parameters and parse the typed parts. Runs before any
    /// collaborator is touched, so a bad config never leaves partial
    /// session state behind.
    pub fn validate(&self) -> Result<(RoomId, TopologyMode), SessionError> {
        if self.key.trim().is_empty() {
            return Err(SessionError::Configuration(
                "missing connection key".to_string(),
            ));
        }
        if self.room_id.trim().is_empty() {
            return Err(SessionError::Configuration("missing room id".to_string()));
        }
        if self.network.trim().is_empty() {
            return Err(SessionError::Configuration(
                "missing topology mode".to_string(),
            ));
        }

        let mode = self
            .network
            .parse::<TopologyMode>()
            .map_err(|e| SessionError::Configuration(e.to_string()))?;

        Ok((RoomId::from(self.room_id.as_str()), mode))
    }
}
