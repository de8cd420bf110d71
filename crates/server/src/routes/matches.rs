use std::sync::Arc;

use axum::{Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::clients::football_data::FootballDataClient;
use crate::config::Config;
use crate::error::AppError;

const RECENT_MATCHES: usize = 10;

/// GET /matches
pub async fn get_recent_matches(
    Extension(config): Extension<Config>,
    Extension(client): Extension<Arc<FootballDataClient>>,
) -> Result<Json<JsonValue>, AppError> {
    let data = client.competition_matches(&config.competition_code).await?;

    let matches: Vec<JsonValue> = data["matches"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .take(RECENT_MATCHES)
        .map(match_summary)
        .collect();

    Ok(Json(json!({
        "success": true,
        "count": matches.len(),
        "matches": matches,
    })))
}

fn match_summary(m: &JsonValue) -> JsonValue {
    json!({
        "id": m["id"],
        "homeTeam": m["homeTeam"]["name"],
        "awayTeam": m["awayTeam"]["name"],
        "score": {
            "home": m["score"]["fullTime"]["home"],
            "away": m["score"]["fullTime"]["away"],
        },
        "status": m["status"],
        "date": m["utcDate"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_summary_reshapes_score() {
        let m = json!({
            "id": 12345,
            "homeTeam": { "id": 57, "name": "Arsenal FC" },
            "awayTeam": { "id": 61, "name": "Chelsea FC" },
            "score": { "fullTime": { "home": 2, "away": 1 }, "halfTime": { "home": 1, "away": 0 } },
            "status": "FINISHED",
            "utcDate": "2026-08-22T15:00:00Z",
        });

        let summary = match_summary(&m);
        assert_eq!(summary["homeTeam"], "Arsenal FC");
        assert_eq!(summary["awayTeam"], "Chelsea FC");
        assert_eq!(summary["score"]["home"], 2);
        assert_eq!(summary["score"]["away"], 1);
        assert_eq!(summary["date"], "2026-08-22T15:00:00Z");
    }

    #[test]
    fn test_match_summary_unplayed_game_has_null_score() {
        let m = json!({
            "id": 9,
            "homeTeam": { "name": "A" },
            "awayTeam": { "name": "B" },
            "score": { "fullTime": { "home": null, "away": null } },
            "status": "SCHEDULED",
            "utcDate": "2026-09-01T14:00:00Z",
        });

        let summary = match_summary(&m);
        assert!(summary["score"]["home"].is_null());
        assert!(summary["score"]["away"].is_null());
    }
}
