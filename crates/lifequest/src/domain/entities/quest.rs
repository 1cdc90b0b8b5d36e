//! Quest - a discrete task with a reward and a target attribute
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Attribute, Difficulty};

/// Quest - one task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Unique within the active quest set
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Target attribute raised when the quest is completed
    #[serde(rename = "type")]
    pub attribute: Attribute,
    pub difficulty: Difficulty,
    /// Experience reward
    pub xp: i32,
    /// Monotonic: flips false -> true once, never back
    pub completed: bool,
    /// When the quest landed on the board
    pub created_at: DateTime<Utc>,
}

/// Quest template - a suggestion before it is adopted onto the board.
///
/// A quest minus its identity and completion flag; the caller assigns both
/// on adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestTemplate {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub attribute: Attribute,
    pub difficulty: Difficulty,
    pub xp: i32,
}

impl Quest {
    /// Adopt a template as a fresh, incomplete quest with a generated ID
    pub fn from_template(template: QuestTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: template.title,
            description: template.description,
            attribute: template.attribute,
            difficulty: template.difficulty,
            xp: template.xp,
            completed: false,
            created_at: Utc::now(),
        }
    }
}
