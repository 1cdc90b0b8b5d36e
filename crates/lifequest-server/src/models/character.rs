//! Character API models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lifequest::domain::{Attribute, CharacterState};

/// One attribute score, keyed by its wire code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttributeScoreResponse {
    /// STR / INT / CHA / WIS
    pub code: String,
    pub score: i32,
}

/// Character sheet response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub level: i32,
    pub current_xp: i32,
    pub next_level_xp: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub streak: i32,
    pub attributes: Vec<AttributeScoreResponse>,
}

impl From<CharacterState> for CharacterResponse {
    fn from(state: CharacterState) -> Self {
        let attributes = Attribute::ALL
            .iter()
            .map(|&attribute| AttributeScoreResponse {
                code: attribute.code().to_string(),
                score: state.attributes.score(attribute),
            })
            .collect();

        Self {
            level: state.level,
            current_xp: state.current_xp,
            next_level_xp: state.next_level_xp,
            hp: state.hp,
            max_hp: state.max_hp,
            streak: state.streak,
            attributes,
        }
    }
}
