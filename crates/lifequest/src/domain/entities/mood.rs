//! MoodAnalysis - mentor assessment and quest suggestions
//!
//! Transient value returned by the quest generation gateway. The wire
//! shape (camelCase, `type` codes) matches the structured-output schema
//! sent to the generative service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::QuestTemplate;
use crate::domain::value_objects::{Attribute, Difficulty};

/// Result of one mentor consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    /// Estimated mood, intended range 1-10; passed through unvalidated
    pub mood_score: f32,
    /// Short motivational message from the mentor
    pub analysis: String,
    /// Suggested quest templates; identity is assigned on adoption
    #[serde(default)]
    pub suggested_quests: Vec<QuestTemplate>,
}

/// Why a generation call fell back to a canned result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Credential missing or rejected by the service
    Credential,
    /// Transport failure or non-success service response
    Transport,
    /// Response was empty or did not conform to the requested schema
    Malformed,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Credential => write!(f, "credential"),
            FallbackReason::Transport => write!(f, "transport"),
            FallbackReason::Malformed => write!(f, "malformed"),
        }
    }
}

/// Outcome of a generation request.
///
/// Callers always receive a usable `MoodAnalysis`; the tag records whether
/// it is genuine model output or a substituted fallback, so consumers and
/// tests never have to string-match the message.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Well-formed structured response, passed through verbatim
    Generated(MoodAnalysis),
    /// Canned substitute; the failure never reaches the caller
    Degraded {
        analysis: MoodAnalysis,
        reason: FallbackReason,
    },
}

impl GenerationOutcome {
    /// Build the canned fallback for the given reason
    pub fn degraded(reason: FallbackReason) -> Self {
        let analysis = match reason {
            FallbackReason::Credential => MoodAnalysis::credential_fallback(),
            FallbackReason::Transport | FallbackReason::Malformed => {
                MoodAnalysis::offline_fallback()
            }
        };
        Self::Degraded { analysis, reason }
    }

    /// The analysis payload, genuine or substituted
    pub fn analysis(&self) -> &MoodAnalysis {
        match self {
            Self::Generated(analysis) => analysis,
            Self::Degraded { analysis, .. } => analysis,
        }
    }

    /// The fallback reason, if this outcome is a substitute
    pub fn degraded_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Generated(_) => None,
            Self::Degraded { reason, .. } => Some(*reason),
        }
    }
}

impl MoodAnalysis {
    /// Canned result when the service is unreachable or returns junk
    pub fn offline_fallback() -> Self {
        Self {
            mood_score: 5.0,
            analysis: "서버와의 연결이 불안정합니다. 하지만 당신의 모험은 계속되어야 합니다."
                .to_string(),
            suggested_quests: vec![
                QuestTemplate {
                    title: "잠시 휴식하기".to_string(),
                    description: "창밖을 바라보며 5분간 눈을 쉬게 해주세요.".to_string(),
                    attribute: Attribute::Willpower,
                    difficulty: Difficulty::Easy,
                    xp: 10,
                },
                QuestTemplate {
                    title: "주변 정리정돈".to_string(),
                    description: "책상 위나 주변을 10분간 깨끗이 정리하세요.".to_string(),
                    attribute: Attribute::Strength,
                    difficulty: Difficulty::Medium,
                    xp: 25,
                },
            ],
        }
    }

    /// Canned result when the API credential is missing or rejected
    pub fn credential_fallback() -> Self {
        Self {
            mood_score: 0.0,
            analysis: "API 자격 증명이 없거나 유효하지 않습니다. GEMINI_API_KEY 설정을 확인해주세요."
                .to_string(),
            suggested_quests: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_round_trip() {
        let json = r#"{
            "moodScore": 7,
            "analysis": "오늘은 좋은 날입니다.",
            "suggestedQuests": [
                {"title": "산책", "description": "20분 걷기", "type": "STR", "difficulty": "Medium", "xp": 30}
            ]
        }"#;

        let analysis: MoodAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.mood_score, 7.0);
        assert_eq!(analysis.suggested_quests.len(), 1);
        assert_eq!(analysis.suggested_quests[0].attribute, Attribute::Strength);
        assert_eq!(analysis.suggested_quests[0].difficulty, Difficulty::Medium);

        let back = serde_json::to_value(&analysis).unwrap();
        assert_eq!(back["moodScore"], 7.0);
        assert_eq!(back["suggestedQuests"][0]["type"], "STR");
    }

    #[test]
    fn test_offline_fallback_shape() {
        let fallback = MoodAnalysis::offline_fallback();
        assert_eq!(fallback.mood_score, 5.0);
        assert_eq!(fallback.suggested_quests.len(), 2);
        assert_eq!(fallback.suggested_quests[0].attribute, Attribute::Willpower);
        assert_eq!(fallback.suggested_quests[0].difficulty, Difficulty::Easy);
        assert_eq!(fallback.suggested_quests[0].xp, 10);
        assert_eq!(fallback.suggested_quests[1].attribute, Attribute::Strength);
        assert_eq!(fallback.suggested_quests[1].difficulty, Difficulty::Medium);
        assert_eq!(fallback.suggested_quests[1].xp, 25);
    }

    #[test]
    fn test_credential_fallback_shape() {
        let fallback = MoodAnalysis::credential_fallback();
        assert_eq!(fallback.mood_score, 0.0);
        assert!(fallback.suggested_quests.is_empty());
    }

    #[test]
    fn test_degraded_outcome_selects_branch() {
        let credential = GenerationOutcome::degraded(FallbackReason::Credential);
        assert_eq!(credential.analysis().mood_score, 0.0);
        assert_eq!(
            credential.degraded_reason(),
            Some(FallbackReason::Credential)
        );

        let transport = GenerationOutcome::degraded(FallbackReason::Transport);
        assert_eq!(transport.analysis().mood_score, 5.0);
        assert_eq!(transport.analysis().suggested_quests.len(), 2);
    }
}
