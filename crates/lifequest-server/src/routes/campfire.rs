//! Campfire Routes - ambient presence

use axum::{extract::State, routing::get, Json, Router};

use crate::models::CampfireResponse;
use crate::AppState;

/// Get the campfire presence snapshot
#[utoipa::path(
    get,
    path = "/lifequest/campfire",
    responses(
        (status = 200, description = "Simulated presence around the campfire", body = CampfireResponse)
    ),
    tag = "Campfire"
)]
pub async fn get_campfire(State(state): State<AppState>) -> Json<CampfireResponse> {
    let snapshot = state.campfire.snapshot().await;
    Json(snapshot.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lifequest/campfire", get(get_campfire))
}
