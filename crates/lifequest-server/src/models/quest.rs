//! Quest API models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use lifequest::domain::Quest;

use crate::models::CharacterResponse;

/// One quest on the board
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Target attribute code (STR/INT/CHA/WIS)
    #[serde(rename = "type")]
    pub attribute: String,
    pub difficulty: String,
    pub xp: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Quest> for QuestResponse {
    fn from(quest: Quest) -> Self {
        Self {
            id: quest.id,
            title: quest.title,
            description: quest.description,
            attribute: quest.attribute.to_string(),
            difficulty: quest.difficulty.to_string(),
            xp: quest.xp,
            completed: quest.completed,
            created_at: quest.created_at,
        }
    }
}

/// Quest board partitioned like the journal view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestLogResponse {
    pub active: Vec<QuestResponse>,
    pub completed: Vec<QuestResponse>,
}

// ============================================
// Request/Response DTOs
// ============================================

/// Generate quests request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateQuestsRequest {
    /// Free text about the user's day; omitted = balanced-day request
    pub context: Option<String>,
}

/// Generate quests response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestsResponse {
    pub mood_score: f32,
    pub analysis: String,
    /// Fallback reason (credential/transport/malformed); absent for
    /// genuine model output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    /// Newly adopted quests, already merged onto the board
    pub quests: Vec<QuestResponse>,
}

/// Complete quest response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuestResponse {
    pub leveled_up: bool,
    pub character: CharacterResponse,
    pub quest: QuestResponse,
}
