//! Character Routes - the adventurer's sheet

use axum::{extract::State, routing::get, Json, Router};

use crate::models::CharacterResponse;
use crate::AppState;

/// Get the current character sheet
#[utoipa::path(
    get,
    path = "/lifequest/character",
    responses(
        (status = 200, description = "Current character state", body = CharacterResponse)
    ),
    tag = "Character"
)]
pub async fn get_character(State(state): State<AppState>) -> Json<CharacterResponse> {
    let character = state.session.character().await;
    Json(character.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lifequest/character", get(get_character))
}
