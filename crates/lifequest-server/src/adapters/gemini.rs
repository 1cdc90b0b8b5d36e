//! Gemini Mentor Adapter
//!
//! Calls the Gemini `generateContent` API with a structured-output schema
//! and maps the JSON payload into domain values. Exactly one attempt per
//! invocation: no retry, no backoff, transport defaults for timeouts.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use lifequest::domain::{GenerationError, MoodAnalysis};
use lifequest::ports::MentorProvider;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Context used when the caller does not supply one
const DEFAULT_CONTEXT: &str = "균형 잡힌 하루를 위한 퀘스트를 주세요.";

/// Mentor backed by the Gemini generateContent API
#[derive(Clone)]
pub struct GeminiMentor {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiMentor {
    /// Creates a new mentor using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl MentorProvider for GeminiMentor {
    async fn suggest_quests(
        &self,
        context: Option<&str>,
    ) -> Result<MoodAnalysis, GenerationError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(context),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: mood_analysis_schema(),
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Malformed(err.to_string()))?;

        parse_analysis(&payload)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

// ============================================
// Helper Functions
// ============================================

fn build_prompt(context: Option<&str>) -> String {
    format!(
        r#"당신은 "라이프 RPG"의 게임 마스터입니다. 사용자에게 오늘 수행할 퀘스트를 부여하세요.

사용자 상황/요청: "{}"

1. 사용자의 기분 점수(1-10)를 추정하거나 랜덤하게 부여하여 활력을 불어넣으세요.
2. 3가지 퀘스트를 생성하세요.
   - 난이도는 'Easy'(쉬움), 'Medium'(보통), 'Hard'(어려움)를 적절히 섞어서 구성하세요.
   - 'Easy': 5분 이내로 할 수 있는 가벼운 활동.
   - 'Medium': 15~30분 정도 집중이 필요한 활동. (예: 방 청소하기, 20분 독서, 가벼운 산책)
   - 'Hard': 1시간 이상 또는 큰 용기가 필요한 활동.

반드시 한국어로 응답하세요."#,
        context.unwrap_or(DEFAULT_CONTEXT)
    )
}

/// Structured-output schema for the mood analysis payload.
///
/// Every quest-template field is required; the wire shape matches
/// `MoodAnalysis` exactly.
fn mood_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "moodScore": {
                "type": "NUMBER",
                "description": "1점(매우 우울/에너지 낮음)에서 10점(매우 행복/에너지 높음) 사이의 점수."
            },
            "analysis": {
                "type": "STRING",
                "description": "사용자에게 전하는 짧고 동기부여가 되는 RPG 멘토의 조언 (최대 2문장). 한국어로 작성하세요."
            },
            "suggestedQuests": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "퀘스트 제목 (한국어)" },
                        "description": { "type": "STRING", "description": "퀘스트 설명 (한국어)" },
                        "type": { "type": "STRING", "enum": ["STR", "INT", "CHA", "WIS"] },
                        "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard"] },
                        "xp": { "type": "NUMBER" }
                    },
                    "required": ["title", "description", "type", "difficulty", "xp"]
                }
            }
        },
        "required": ["moodScore", "analysis", "suggestedQuests"]
    })
}

fn parse_analysis(payload: &GenerateContentResponse) -> Result<MoodAnalysis, GenerationError> {
    let text = payload
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.trim())
        .filter(|text| !text.is_empty())
        .ok_or(GenerationError::EmptyResponse)?;

    serde_json::from_str(text).map_err(|err| GenerationError::Malformed(err.to_string()))
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.clone());

    // Bad keys come back as 400 INVALID_ARGUMENT ("API key not valid"),
    // not only as 401/403
    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || message.contains("API key")
    {
        return GenerationError::Credential(message);
    }

    GenerationError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifequest::domain::{Attribute, Difficulty};

    fn response_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_well_formed_response_passes_through() {
        let body = r#"{
            "moodScore": 12,
            "analysis": "오늘도 힘내세요!",
            "suggestedQuests": [
                {"title": "물 마시기", "description": "물 한 잔", "type": "STR", "difficulty": "Easy", "xp": 10},
                {"title": "독서", "description": "20분 독서", "type": "INT", "difficulty": "Medium", "xp": -5},
                {"title": "전화하기", "description": "친구에게 연락", "type": "CHA", "difficulty": "Hard", "xp": 60}
            ]
        }"#;

        let analysis = parse_analysis(&response_with_text(body)).unwrap();

        // No clamping: out-of-range moodScore and non-positive xp pass through
        assert_eq!(analysis.mood_score, 12.0);
        assert_eq!(analysis.suggested_quests.len(), 3);
        assert_eq!(analysis.suggested_quests[0].attribute, Attribute::Strength);
        assert_eq!(analysis.suggested_quests[1].xp, -5);
        assert_eq!(analysis.suggested_quests[2].difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_parse_empty_candidates_is_empty_response() {
        let payload: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();

        assert!(matches!(
            parse_analysis(&payload),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_schema_violation_is_malformed() {
        let result = parse_analysis(&response_with_text(r#"{"moodScore": "not a number"}"#));

        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_unauthorized_maps_to_credential_error() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "{}".to_string());
        assert!(matches!(err, GenerationError::Credential(_)));

        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "API key not valid. Please pass a valid API key."}}"#
                .to_string(),
        );
        assert!(matches!(err, GenerationError::Credential(_)));
    }

    #[test]
    fn test_server_error_maps_to_api_error() {
        let err = map_http_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": {"message": "boom"}}"#.to_string(),
        );

        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_schema_requires_all_template_fields() {
        let schema = mood_analysis_schema();
        let required = schema["properties"]["suggestedQuests"]["items"]["required"]
            .as_array()
            .unwrap();

        for field in ["title", "description", "type", "difficulty", "xp"] {
            assert!(required.iter().any(|value| value == field));
        }
    }

    #[test]
    fn test_prompt_embeds_caller_context() {
        let prompt = build_prompt(Some("시험 기간이라 스트레스가 심해요"));
        assert!(prompt.contains("시험 기간이라 스트레스가 심해요"));

        let generic = build_prompt(None);
        assert!(generic.contains(DEFAULT_CONTEXT));
    }
}
