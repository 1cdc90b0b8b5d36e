//! Attribute - the four character growth dimensions

use serde::{Deserialize, Serialize};

/// Character attribute tracked as an integer score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Health, physical activity
    #[serde(rename = "STR")]
    Strength,
    /// Knowledge, work
    #[serde(rename = "INT")]
    Intellect,
    /// Social life, communication
    #[serde(rename = "CHA")]
    Charisma,
    /// Mental resilience, willpower
    #[serde(rename = "WIS")]
    Willpower,
}

impl Attribute {
    /// All attributes, in display order
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Intellect,
        Attribute::Charisma,
        Attribute::Willpower,
    ];

    /// Wire code used by the quest schema
    pub fn code(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intellect => "INT",
            Attribute::Charisma => "CHA",
            Attribute::Willpower => "WIS",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" => Ok(Attribute::Strength),
            "INT" => Ok(Attribute::Intellect),
            "CHA" => Ok(Attribute::Charisma),
            "WIS" => Ok(Attribute::Willpower),
            _ => Err(format!("Unknown attribute: {}", s)),
        }
    }
}
