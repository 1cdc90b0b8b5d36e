//! Session Service - the in-memory adventure session
//!
//! Owns the character state and quest board for the single local session.
//! No persistence: state resets on restart, the same way the original
//! board resets on reload.

use tokio::sync::RwLock;
use uuid::Uuid;

use lifequest::domain::progression;
use lifequest::domain::{
    Attribute, AttributeScores, CharacterState, Completion, Difficulty, DomainError, Quest,
    QuestTemplate,
};

/// In-memory session data
#[derive(Debug, Clone)]
pub struct AdventureSession {
    pub character: CharacterState,
    pub quests: Vec<Quest>,
}

impl AdventureSession {
    /// Starting character sheet and quest board
    fn seeded() -> Self {
        let mut completed_starter = Quest::from_template(QuestTemplate {
            title: "지식의 조각".to_string(),
            description: "책을 5페이지 읽어 지능을 높이세요.".to_string(),
            attribute: Attribute::Intellect,
            difficulty: Difficulty::Easy,
            xp: 30,
        });
        completed_starter.completed = true;

        Self {
            character: CharacterState {
                level: 3,
                current_xp: 450,
                next_level_xp: 1000,
                hp: 80,
                max_hp: 100,
                streak: 5,
                attributes: AttributeScores {
                    strength: 15,
                    intellect: 24,
                    charisma: 12,
                    willpower: 18,
                },
            },
            quests: vec![
                Quest::from_template(QuestTemplate {
                    title: "아침 수분 충전".to_string(),
                    description: "물 한 잔을 마셔 몸을 깨우세요.".to_string(),
                    attribute: Attribute::Strength,
                    difficulty: Difficulty::Easy,
                    xp: 20,
                }),
                Quest::from_template(QuestTemplate {
                    title: "책상 정리하기".to_string(),
                    description: "집중력을 위해 10분간 책상 위 불필요한 물건을 치우세요."
                        .to_string(),
                    attribute: Attribute::Intellect,
                    difficulty: Difficulty::Medium,
                    xp: 45,
                }),
                completed_starter,
            ],
        }
    }
}

/// Application service for the adventure session
pub struct SessionService {
    session: RwLock<AdventureSession>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(AdventureSession::seeded()),
        }
    }

    /// Current character state
    pub async fn character(&self) -> CharacterState {
        self.session.read().await.character.clone()
    }

    /// Full quest board, newest first
    pub async fn quests(&self) -> Vec<Quest> {
        self.session.read().await.quests.clone()
    }

    /// Complete a quest by id.
    ///
    /// Runs the progression reducer and applies the returned character and
    /// quest under one write lock. Completing an already-completed quest
    /// is a no-op, not an error.
    pub async fn complete_quest(&self, id: Uuid) -> Result<Completion, DomainError> {
        let mut session = self.session.write().await;
        let index = session
            .quests
            .iter()
            .position(|quest| quest.id == id)
            .ok_or_else(|| DomainError::not_found("Quest", id))?;

        let completion = progression::complete_quest(&session.character, &session.quests[index]);
        session.character = completion.character.clone();
        session.quests[index] = completion.quest.clone();

        if completion.leveled_up {
            tracing::info!(
                "Level up! Reached level {} ({} xp toward {})",
                completion.character.level,
                completion.character.current_xp,
                completion.character.next_level_xp
            );
        }

        Ok(completion)
    }

    /// Adopt suggested templates as fresh quests at the top of the board.
    ///
    /// Each template gets its own generated id and starts incomplete.
    /// Returns the adopted quests in template order.
    pub async fn adopt_templates(&self, templates: &[QuestTemplate]) -> Vec<Quest> {
        let adopted: Vec<Quest> = templates
            .iter()
            .cloned()
            .map(Quest::from_template)
            .collect();

        let mut session = self.session.write().await;
        for quest in adopted.iter().rev() {
            session.quests.insert(0, quest.clone());
        }

        tracing::info!("Adopted {} new quests onto the board", adopted.len());
        adopted
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn active_quest_with_xp(service: &SessionService, xp: i32) -> Quest {
        service
            .quests()
            .await
            .into_iter()
            .find(|quest| !quest.completed && quest.xp == xp)
            .expect("seeded quest missing")
    }

    #[tokio::test]
    async fn test_completion_applies_character_and_quest_together() {
        let service = SessionService::new();
        let quest = active_quest_with_xp(&service, 45).await;

        let completion = service.complete_quest(quest.id).await.unwrap();

        assert!(completion.quest.completed);
        assert_eq!(completion.character.current_xp, 495);
        assert_eq!(completion.character.attributes.intellect, 26);

        // The applied session state matches the returned values
        let character = service.character().await;
        assert_eq!(character, completion.character);
        let board = service.quests().await;
        assert!(board.iter().find(|q| q.id == quest.id).unwrap().completed);
    }

    #[tokio::test]
    async fn test_completing_twice_does_not_double_count() {
        let service = SessionService::new();
        let quest = active_quest_with_xp(&service, 20).await;

        let first = service.complete_quest(quest.id).await.unwrap();
        let second = service.complete_quest(quest.id).await.unwrap();

        assert_eq!(second.character, first.character);
        assert!(!second.leveled_up);
        assert_eq!(service.character().await, first.character);
    }

    #[tokio::test]
    async fn test_unknown_quest_is_not_found() {
        let service = SessionService::new();

        let result = service.complete_quest(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_adopted_templates_get_fresh_non_colliding_ids() {
        let service = SessionService::new();
        let templates = lifequest::domain::MoodAnalysis::offline_fallback().suggested_quests;

        let adopted = service.adopt_templates(&templates).await;

        assert_eq!(adopted.len(), 2);
        assert_ne!(adopted[0].id, adopted[1].id);
        assert!(adopted.iter().all(|quest| !quest.completed));

        // Prepended in template order, ahead of the seeded quests
        let board = service.quests().await;
        assert_eq!(board.len(), 5);
        assert_eq!(board[0].id, adopted[0].id);
        assert_eq!(board[1].id, adopted[1].id);

        let mut ids: Vec<Uuid> = board.iter().map(|quest| quest.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
