//! Lifequest API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for the Lifequest server
pub struct LifequestClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct AttributeScoreResponse {
    pub code: String,
    pub score: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub level: i32,
    pub current_xp: i32,
    pub next_level_xp: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub streak: i32,
    pub attributes: Vec<AttributeScoreResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub attribute: String,
    pub difficulty: String,
    pub xp: i32,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuestLogResponse {
    pub active: Vec<QuestResponse>,
    pub completed: Vec<QuestResponse>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestsResponse {
    pub mood_score: f32,
    pub analysis: String,
    #[serde(default)]
    pub degraded: Option<String>,
    pub quests: Vec<QuestResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuestResponse {
    pub leveled_up: bool,
    pub character: CharacterResponse,
    pub quest: QuestResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampfireResponse {
    pub online_count: i32,
    pub messages: Vec<String>,
}

impl LifequestClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Get the character sheet
    pub async fn character(&self) -> Result<CharacterResponse> {
        let url = format!("{}/lifequest/character", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Lifequest API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Get the quest board
    pub async fn quests(&self) -> Result<QuestLogResponse> {
        let url = format!("{}/lifequest/quests", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Lifequest API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Ask the mentor for new quests
    pub async fn generate(&self, context: Option<String>) -> Result<GenerateQuestsResponse> {
        let url = format!("{}/lifequest/quests/generate", self.base_url);
        let request = GenerateQuestsRequest { context };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Lifequest API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Complete a quest
    pub async fn complete(&self, id: Uuid) -> Result<CompleteQuestResponse> {
        let url = format!("{}/lifequest/quests/{}/complete", self.base_url, id);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to Lifequest API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Get the campfire presence snapshot
    pub async fn campfire(&self) -> Result<CampfireResponse> {
        let url = format!("{}/lifequest/campfire", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Lifequest API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
