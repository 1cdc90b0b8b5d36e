//! Quest Routes - board, generation and completion
//!
//! HTTP handlers that delegate to the session and generation services.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use lifequest::domain::DomainError;

use crate::models::{
    CompleteQuestResponse, GenerateQuestsRequest, GenerateQuestsResponse, QuestLogResponse,
    QuestResponse,
};
use crate::AppState;

/// List the quest board
#[utoipa::path(
    get,
    path = "/lifequest/quests",
    responses(
        (status = 200, description = "Quest board, active and completed", body = QuestLogResponse)
    ),
    tag = "Quest"
)]
pub async fn list_quests(State(state): State<AppState>) -> Json<QuestLogResponse> {
    let quests = state.session.quests().await;
    let (completed, active): (Vec<_>, Vec<_>) =
        quests.into_iter().partition(|quest| quest.completed);

    Json(QuestLogResponse {
        active: active.into_iter().map(QuestResponse::from).collect(),
        completed: completed.into_iter().map(QuestResponse::from).collect(),
    })
}

/// Ask the mentor for new quests and merge them onto the board
#[utoipa::path(
    post,
    path = "/lifequest/quests/generate",
    request_body = GenerateQuestsRequest,
    responses(
        (status = 200, description = "Mood analysis and adopted quests", body = GenerateQuestsResponse)
    ),
    tag = "Quest"
)]
pub async fn generate_quests(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuestsRequest>,
) -> Json<GenerateQuestsResponse> {
    let outcome = state.generation.generate(payload.context.as_deref()).await;

    let analysis = outcome.analysis();
    let adopted = state
        .session
        .adopt_templates(&analysis.suggested_quests)
        .await;

    Json(GenerateQuestsResponse {
        mood_score: analysis.mood_score,
        analysis: analysis.analysis.clone(),
        degraded: outcome.degraded_reason().map(|reason| reason.to_string()),
        quests: adopted.into_iter().map(QuestResponse::from).collect(),
    })
}

/// Complete a quest and fold its rewards into the character
#[utoipa::path(
    post,
    path = "/lifequest/quests/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Quest ID")
    ),
    responses(
        (status = 200, description = "Updated character and quest", body = CompleteQuestResponse),
        (status = 404, description = "Quest not found")
    ),
    tag = "Quest"
)]
pub async fn complete_quest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompleteQuestResponse>, (axum::http::StatusCode, String)> {
    let completion = state.session.complete_quest(id).await.map_err(|err| match err {
        DomainError::NotFound { .. } => (axum::http::StatusCode::NOT_FOUND, err.to_string()),
        other => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            other.to_string(),
        ),
    })?;

    Ok(Json(CompleteQuestResponse {
        leveled_up: completion.leveled_up,
        character: completion.character.into(),
        quest: completion.quest.into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lifequest/quests", get(list_quests))
        .route("/lifequest/quests/generate", post(generate_quests))
        .route("/lifequest/quests/:id/complete", post(complete_quest))
}
