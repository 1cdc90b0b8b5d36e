//! Mentor Provider Port
//!
//! Abstract interface for the quest-suggesting mentor. Implementations
//! call an external generative text service; the gateway layer above them
//! turns every failure into a fallback result, so callers of the gateway
//! never see these errors.

use async_trait::async_trait;

use crate::domain::entities::MoodAnalysis;
use crate::domain::errors::GenerationError;

/// Mentor interface: exactly one consultation per call, no retry loop.
///
/// # Example
///
/// ```rust,ignore
/// use lifequest::ports::MentorProvider;
///
/// struct GeminiMentor { /* ... */ }
///
/// #[async_trait]
/// impl MentorProvider for GeminiMentor {
///     async fn suggest_quests(&self, context: Option<&str>)
///         -> Result<MoodAnalysis, GenerationError> {
///         // Call the generative service with a structured-output schema
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait MentorProvider: Send + Sync {
    /// Ask the mentor for a mood assessment and quest suggestions.
    ///
    /// `context` is free text about the user's day; `None` requests a
    /// generic balanced-day plan.
    async fn suggest_quests(&self, context: Option<&str>)
        -> Result<MoodAnalysis, GenerationError>;

    /// Provider name (e.g. "gemini")
    fn provider_name(&self) -> &str;

    /// Model ID being used
    fn model_id(&self) -> &str;
}
