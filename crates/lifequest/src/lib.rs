//! Lifequest Domain Library
//!
//! Core domain types and interfaces for the Lifequest habit RPG.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (CharacterState, Quest, MoodAnalysis)
//!   - `value_objects/`: Immutable value types (Attribute, Difficulty)
//!   - `services/`: Pure domain services (quest completion progression)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (MentorProvider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use lifequest::domain::{CharacterState, Quest, progression};
//! use lifequest::ports::MentorProvider;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    complete_quest, Attribute, AttributeScores, CharacterState, Completion, Difficulty,
    DomainError, FallbackReason, GenerationError, GenerationOutcome, MoodAnalysis, Quest,
    QuestTemplate,
};
pub use ports::MentorProvider;
