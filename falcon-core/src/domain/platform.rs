//! Platform tags

use serde::{Deserialize, Serialize};

/// Scheduling platform a job belongs to
///
/// Sent along with stop and list requests so the platform routes them to the
/// right scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlatformTag {
    Falcon,
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformTag::Falcon => write!(f, "FALCON"),
        }
    }
}
