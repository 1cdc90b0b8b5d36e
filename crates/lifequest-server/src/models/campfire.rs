//! Campfire API models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::campfire::CampfireSnapshot;

/// Campfire presence response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampfireResponse {
    /// Simulated online adventurer count (local, not networked)
    pub online_count: i32,
    /// Recent ambient system messages, newest first
    pub messages: Vec<String>,
}

impl From<CampfireSnapshot> for CampfireResponse {
    fn from(snapshot: CampfireSnapshot) -> Self {
        Self {
            online_count: snapshot.online_count,
            messages: snapshot.messages,
        }
    }
}
