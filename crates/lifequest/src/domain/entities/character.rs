//! CharacterState - the adventurer's progression sheet
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Attribute;

/// Per-attribute integer scores.
///
/// The attribute set is closed and known at compile time, so this is a
/// fixed struct rather than an open map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    #[serde(rename = "STR")]
    pub strength: i32,
    #[serde(rename = "INT")]
    pub intellect: i32,
    #[serde(rename = "CHA")]
    pub charisma: i32,
    #[serde(rename = "WIS")]
    pub willpower: i32,
}

impl AttributeScores {
    /// Score for a single attribute
    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
            Attribute::Charisma => self.charisma,
            Attribute::Willpower => self.willpower,
        }
    }

    /// Raise a single attribute by `amount` points
    pub fn raise(&mut self, attribute: Attribute, amount: i32) {
        match attribute {
            Attribute::Strength => self.strength += amount,
            Attribute::Intellect => self.intellect += amount,
            Attribute::Charisma => self.charisma += amount,
            Attribute::Willpower => self.willpower += amount,
        }
    }
}

/// CharacterState - level, experience and vitals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    pub level: i32,
    /// Experience toward the next level; invariant: always < next_level_xp
    pub current_xp: i32,
    /// Threshold for the next level-up; grows by a fixed factor per level
    pub next_level_xp: i32,
    pub hp: i32,
    pub max_hp: i32,
    /// Consecutive active days; read by consumers, never mutated by quest
    /// completion
    pub streak: i32,
    pub attributes: AttributeScores,
}
