//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AttributeScoreResponse,
    CampfireResponse,
    // Character models
    CharacterResponse,
    CompleteQuestResponse,
    GenerateQuestsRequest,
    GenerateQuestsResponse,
    QuestLogResponse,
    // Quest models
    QuestResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Character endpoints
        super::character::get_character,
        // Quest endpoints
        super::quest::list_quests,
        super::quest::generate_quests,
        super::quest::complete_quest,
        // Campfire endpoints
        super::campfire::get_campfire,
    ),
    info(
        title = "Lifequest API",
        version = "0.1.0",
        description = "Life RPG - turn daily habits into quests, xp and levels.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Character", description = "Character sheet and progression"),
        (name = "Quest", description = "Quest board, mentor generation and completion"),
        (name = "Campfire", description = "Ambient presence simulation"),
    ),
    components(
        schemas(
            // Character
            CharacterResponse,
            AttributeScoreResponse,
            // Quest
            QuestResponse,
            QuestLogResponse,
            GenerateQuestsRequest,
            GenerateQuestsResponse,
            CompleteQuestResponse,
            // Campfire
            CampfireResponse,
        )
    )
)]
pub struct ApiDoc;
