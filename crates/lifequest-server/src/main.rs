use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod services;

use adapters::GeminiMentor;
use application::{GenerationService, SessionService};
use config::ServerConfig;
use lifequest::ports::MentorProvider;
use services::campfire::CampfirePresence;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionService>,
    pub generation: Arc<GenerationService>,
    pub campfire: Arc<CampfirePresence>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Lifequest API is running - today's adventure awaits".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tracing::info!("⚔️  Lifequest API initializing...");

    let config = ServerConfig::from_env()?;

    // Initialize the mentor if a credential is configured
    let mentor: Option<Arc<dyn MentorProvider>> = match &config.gemini_api_key {
        Some(key) => {
            let mut gemini = GeminiMentor::new(key.clone());
            if let Some(model) = &config.gemini_model {
                gemini = gemini.with_model(model.clone());
            }
            tracing::info!("🧙 Mentor initialized (Gemini, model {})", gemini.model_id());
            Some(Arc::new(gemini))
        }
        None => {
            tracing::warn!("⚠️  No GEMINI_API_KEY set - quest generation will use fallbacks");
            None
        }
    };

    // Create application state
    let state = AppState {
        session: Arc::new(SessionService::new()),
        generation: Arc::new(GenerationService::new(mentor)),
        campfire: Arc::new(CampfirePresence::new(None)),
    };

    // Start the ambient presence simulation
    let _campfire_task = state.campfire.clone().start();
    tracing::info!("🔥 Campfire lit");

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::character::router())
        .merge(routes::quest::router())
        .merge(routes::campfire::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Lifequest API ready on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
