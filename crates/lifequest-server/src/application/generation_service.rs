//! Generation Service - the quest generation gateway
//!
//! Wraps the mentor port with the degradation policy: callers always get a
//! usable `MoodAnalysis`, never an error. The outcome tag records whether
//! the result is genuine model output or a substituted fallback.

use std::sync::Arc;

use lifequest::domain::{FallbackReason, GenerationOutcome};
use lifequest::ports::MentorProvider;

/// Application service for quest generation
pub struct GenerationService {
    mentor: Option<Arc<dyn MentorProvider>>,
}

impl GenerationService {
    pub fn new(mentor: Option<Arc<dyn MentorProvider>>) -> Self {
        Self { mentor }
    }

    /// Ask the mentor for quest suggestions.
    ///
    /// A missing credential degrades to the credential fallback; every
    /// provider failure degrades to the fallback its reason selects.
    pub async fn generate(&self, context: Option<&str>) -> GenerationOutcome {
        let Some(mentor) = &self.mentor else {
            tracing::warn!("Quest generation requested without a configured mentor");
            return GenerationOutcome::degraded(FallbackReason::Credential);
        };

        match mentor.suggest_quests(context).await {
            Ok(analysis) => {
                tracing::info!(
                    "Mentor returned {} quest suggestions (mood {})",
                    analysis.suggested_quests.len(),
                    analysis.mood_score
                );
                GenerationOutcome::Generated(analysis)
            }
            Err(err) => {
                let reason = err.fallback_reason();
                tracing::warn!("Quest generation degraded ({}): {}", reason, err);
                GenerationOutcome::degraded(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lifequest::domain::{GenerationError, MoodAnalysis};

    struct FailingMentor(GenerationError);

    #[async_trait]
    impl MentorProvider for FailingMentor {
        async fn suggest_quests(
            &self,
            _context: Option<&str>,
        ) -> Result<MoodAnalysis, GenerationError> {
            Err(self.0.clone())
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn model_id(&self) -> &str {
            "stub"
        }
    }

    struct EchoMentor(MoodAnalysis);

    #[async_trait]
    impl MentorProvider for EchoMentor {
        async fn suggest_quests(
            &self,
            _context: Option<&str>,
        ) -> Result<MoodAnalysis, GenerationError> {
            Ok(self.0.clone())
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn model_id(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_offline_fallback() {
        let service = GenerationService::new(Some(Arc::new(FailingMentor(
            GenerationError::Transport("connection refused".to_string()),
        ))));

        let outcome = service.generate(None).await;

        assert_eq!(outcome.degraded_reason(), Some(FallbackReason::Transport));
        assert_eq!(outcome.analysis(), &MoodAnalysis::offline_fallback());
    }

    #[tokio::test]
    async fn test_credential_failure_degrades_to_credential_fallback() {
        let service = GenerationService::new(Some(Arc::new(FailingMentor(
            GenerationError::Credential("API key not valid".to_string()),
        ))));

        let outcome = service.generate(None).await;

        assert_eq!(outcome.degraded_reason(), Some(FallbackReason::Credential));
        assert_eq!(outcome.analysis().mood_score, 0.0);
        assert!(outcome.analysis().suggested_quests.is_empty());
    }

    #[tokio::test]
    async fn test_missing_mentor_degrades_to_credential_fallback() {
        let service = GenerationService::new(None);

        let outcome = service.generate(Some("테스트")).await;

        assert_eq!(outcome.degraded_reason(), Some(FallbackReason::Credential));
    }

    #[tokio::test]
    async fn test_malformed_response_degrades_to_offline_fallback() {
        let service = GenerationService::new(Some(Arc::new(FailingMentor(
            GenerationError::EmptyResponse,
        ))));

        let outcome = service.generate(None).await;

        assert_eq!(outcome.degraded_reason(), Some(FallbackReason::Malformed));
        assert_eq!(outcome.analysis().mood_score, 5.0);
        assert_eq!(outcome.analysis().suggested_quests.len(), 2);
    }

    #[tokio::test]
    async fn test_success_passes_analysis_through() {
        let genuine = MoodAnalysis {
            mood_score: 8.0,
            analysis: "좋은 흐름입니다!".to_string(),
            suggested_quests: MoodAnalysis::offline_fallback().suggested_quests,
        };
        let service = GenerationService::new(Some(Arc::new(EchoMentor(genuine.clone()))));

        let outcome = service.generate(Some("산책하고 싶어요")).await;

        assert_eq!(outcome.degraded_reason(), None);
        assert_eq!(outcome.analysis(), &genuine);
    }
}
