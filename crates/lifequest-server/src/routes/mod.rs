//! Lifequest API Routes
//!
//! - /lifequest/character - Character sheet and progression
//! - /lifequest/quests - Quest board
//! - /lifequest/quests/generate - Mentor quest generation (Gemini)
//! - /lifequest/quests/:id/complete - Quest completion
//! - /lifequest/campfire - Ambient presence simulation

pub mod campfire;
pub mod character;
pub mod quest;
pub mod swagger;
