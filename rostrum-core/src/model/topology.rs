use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How participants in a room reach each other: full mesh, or relayed
/// through a central forwarding unit.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TopologyMode {
    Mesh,
    Routed,
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("topology mode should be 'mesh' or 'routed', got '{0}'")]
pub struct InvalidTopologyMode(pub String);

impl FromStr for TopologyMode {
    type Err = InvalidTopologyMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mesh" => Ok(Self::Mesh),
            "routed" => Ok(Self::Routed),
            other => Err(InvalidTopologyMode(other.to_string())),
        }
    }
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mesh => write!(f, "mesh"),
            Self::Routed => write!(f, "routed"),
        }
    }
}
