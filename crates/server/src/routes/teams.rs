use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::clients::football_data::FootballDataClient;
use crate::config::Config;
use crate::error::AppError;

/// GET /teams
pub async fn get_teams(
    Extension(config): Extension<Config>,
    Extension(client): Extension<Arc<FootballDataClient>>,
) -> Result<Json<JsonValue>, AppError> {
    let data = client.competition_teams(&config.competition_code).await?;

    let teams: Vec<JsonValue> = data["teams"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(team_summary)
        .collect();

    Ok(Json(json!({
        "success": true,
        "count": teams.len(),
        "teams": teams,
    })))
}

/// GET /team/{team_id}
pub async fn get_team_details(
    Extension(client): Extension<Arc<FootballDataClient>>,
    Path(team_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let data = client.team(team_id).await?;

    let squad_size = data["squad"].as_array().map(|s| s.len()).unwrap_or(0);

    Ok(Json(json!({
        "success": true,
        "team": {
            "id": data["id"],
            "name": data["name"],
            "shortName": data["shortName"],
            "founded": data["founded"],
            "venue": data["venue"],
            "website": data["website"],
            "crest": data["crest"],
            "coach": data["coach"]["name"],
            "squadSize": squad_size,
        }
    })))
}

fn team_summary(team: &JsonValue) -> JsonValue {
    json!({
        "id": team["id"],
        "name": team["name"],
        "shortName": team["shortName"],
        "founded": team["founded"],
        "venue": team["venue"],
        "website": team["website"],
        "crest": team["crest"],
    })
}
