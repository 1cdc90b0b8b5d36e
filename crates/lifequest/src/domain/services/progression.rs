//! Progression - the quest completion state transition
//!
//! Computes the character-state transition triggered by completing exactly
//! one quest. Pure function: no I/O, no hidden state. The caller applies
//! the returned character and quest together.

use crate::domain::entities::{CharacterState, Quest};

/// Growth factor applied to the level threshold on each level-up
pub const XP_CURVE_FACTOR: f64 = 1.2;

/// Result of completing a quest
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub character: CharacterState,
    pub quest: Quest,
    pub leveled_up: bool,
}

/// Complete a quest and fold its rewards into the character state.
///
/// Completing an already-completed quest is a no-op: both inputs come back
/// unchanged. Otherwise the quest's target attribute gains the fixed step
/// for its difficulty, the xp reward accumulates, and crossing the level
/// threshold applies exactly one level-up with the excess xp carried over.
pub fn complete_quest(character: &CharacterState, quest: &Quest) -> Completion {
    if quest.completed {
        return Completion {
            character: character.clone(),
            quest: quest.clone(),
            leveled_up: false,
        };
    }

    let mut character = character.clone();
    character
        .attributes
        .raise(quest.attribute, quest.difficulty.attribute_gain());

    let new_xp = character.current_xp + quest.xp;
    let leveled_up = new_xp >= character.next_level_xp;
    if leveled_up {
        // Single-step check: one level-up per completion, excess carries over
        character.current_xp = new_xp - character.next_level_xp;
        character.level += 1;
        character.next_level_xp =
            (character.next_level_xp as f64 * XP_CURVE_FACTOR).floor() as i32;
    } else {
        character.current_xp = new_xp;
    }

    let mut quest = quest.clone();
    quest.completed = true;

    Completion {
        character,
        quest,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AttributeScores;
    use crate::domain::value_objects::{Attribute, Difficulty};
    use chrono::Utc;
    use uuid::Uuid;

    fn mock_character(level: i32, current_xp: i32, next_level_xp: i32) -> CharacterState {
        CharacterState {
            level,
            current_xp,
            next_level_xp,
            hp: 80,
            max_hp: 100,
            streak: 5,
            attributes: AttributeScores {
                strength: 15,
                intellect: 24,
                charisma: 12,
                willpower: 18,
            },
        }
    }

    fn mock_quest(xp: i32, difficulty: Difficulty, attribute: Attribute) -> Quest {
        Quest {
            id: Uuid::new_v4(),
            title: "책상 정리하기".to_string(),
            description: "집중력을 위해 10분간 책상 위 불필요한 물건을 치우세요.".to_string(),
            attribute,
            difficulty,
            xp,
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_xp_accumulates_without_level_up() {
        let character = mock_character(3, 450, 1000);
        let quest = mock_quest(45, Difficulty::Medium, Attribute::Intellect);

        let completion = complete_quest(&character, &quest);

        assert!(!completion.leveled_up);
        assert_eq!(completion.character.level, 3);
        assert_eq!(completion.character.current_xp, 495);
        assert_eq!(completion.character.next_level_xp, 1000);
        assert!(completion.quest.completed);
    }

    #[test]
    fn test_level_up_carries_excess_xp() {
        let character = mock_character(3, 980, 1000);
        let quest = mock_quest(45, Difficulty::Easy, Attribute::Intellect);

        let completion = complete_quest(&character, &quest);

        assert!(completion.leveled_up);
        assert_eq!(completion.character.level, 4);
        assert_eq!(completion.character.current_xp, 25);
        assert_eq!(completion.character.next_level_xp, 1200);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let character = mock_character(3, 999, 1000);
        let quest = mock_quest(1, Difficulty::Easy, Attribute::Strength);

        let completion = complete_quest(&character, &quest);

        assert!(completion.leveled_up);
        assert_eq!(completion.character.current_xp, 0);
        assert_eq!(completion.character.next_level_xp, 1200);
    }

    #[test]
    fn test_invariant_current_xp_below_threshold() {
        for (current_xp, quest_xp) in [(450, 45), (980, 45), (999, 1), (0, 999)] {
            let character = mock_character(3, current_xp, 1000);
            let quest = mock_quest(quest_xp, Difficulty::Medium, Attribute::Charisma);
            let completion = complete_quest(&character, &quest);
            assert!(
                completion.character.current_xp < completion.character.next_level_xp,
                "invariant broken for current_xp={} quest_xp={}",
                current_xp,
                quest_xp
            );
        }
    }

    #[test]
    fn test_attribute_gain_targets_only_quest_attribute() {
        let character = mock_character(3, 450, 1000);

        for (difficulty, gain) in [
            (Difficulty::Easy, 1),
            (Difficulty::Medium, 2),
            (Difficulty::Hard, 3),
        ] {
            let quest = mock_quest(10, difficulty, Attribute::Charisma);
            let completion = complete_quest(&character, &quest);

            assert_eq!(completion.character.attributes.charisma, 12 + gain);
            assert_eq!(completion.character.attributes.strength, 15);
            assert_eq!(completion.character.attributes.intellect, 24);
            assert_eq!(completion.character.attributes.willpower, 18);
        }
    }

    #[test]
    fn test_completed_quest_is_a_noop() {
        let character = mock_character(3, 450, 1000);
        let mut quest = mock_quest(45, Difficulty::Hard, Attribute::Willpower);
        quest.completed = true;

        let completion = complete_quest(&character, &quest);

        assert!(!completion.leveled_up);
        assert_eq!(completion.character, character);
        assert_eq!(completion.quest, quest);
    }

    #[test]
    fn test_second_completion_is_idempotent() {
        let character = mock_character(3, 450, 1000);
        let quest = mock_quest(45, Difficulty::Medium, Attribute::Intellect);

        let first = complete_quest(&character, &quest);
        let second = complete_quest(&first.character, &first.quest);

        assert_eq!(second.character, first.character);
        assert_eq!(second.quest, first.quest);
        assert!(!second.leveled_up);
    }
}
