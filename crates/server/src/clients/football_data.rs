use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

/// Thin client for the football-data.org v4 REST API.
///
/// Responses come back as raw `Value` trees; the routes reshape them into
/// the simplified schema the frontend expects.
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FootballDataClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent("FootballAnalysis/1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: config.football_data_base_url.clone(),
            api_key: config.football_data_api_key.clone(),
        }
    }

    /// Fetch all teams registered in a competition (e.g. "PL").
    pub async fn competition_teams(&self, code: &str) -> Result<Value, AppError> {
        self.get_json(&format!("/competitions/{code}/teams"), "teams")
            .await
    }

    /// Fetch one team, including its squad list.
    pub async fn team(&self, team_id: i64) -> Result<Value, AppError> {
        self.get_json(&format!("/teams/{team_id}"), "team details")
            .await
    }

    /// Fetch the match list for a competition.
    pub async fn competition_matches(&self, code: &str) -> Result<Value, AppError> {
        self.get_json(&format!("/competitions/{code}/matches"), "matches")
            .await
    }

    /// Fetch a single person (player) record.
    pub async fn person(&self, player_id: i64) -> Result<Value, AppError> {
        self.get_json(&format!("/persons/{player_id}"), "player profile")
            .await
    }

    async fn get_json(&self, path: &str, what: &str) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status,
                message: format!("Failed to fetch {what}: {body}"),
            });
        }

        Ok(resp.json().await?)
    }
}
