use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use football_core::{generate_heatmap, generate_trends, StatsCache};

use crate::clients::football_data::FootballDataClient;
use crate::config::Config;
use crate::error::AppError;

/// Teams scanned for league-wide player queries. Kept small so a single
/// request stays inside the upstream rate limit.
const LEAGUE_SCAN_TEAMS: usize = 5;

const COMPARISON_METRICS: [&str; 6] = [
    "goals",
    "assists",
    "minutes_played",
    "pass_accuracy",
    "tackles",
    "shots",
];

/// GET /team/{team_id}/players
pub async fn get_team_players(
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
    Path(team_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let (team, players) = fetch_team_players(&client, &cache, team_id).await?;
    let count = players.len();

    Ok(Json(json!({
        "success": true,
        "team": team,
        "players": players,
        "count": count,
    })))
}

/// GET /player/{player_id}
pub async fn get_player_profile(
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
    Path(player_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let payload = build_player_profile(&client, &cache, player_id).await?;
    Ok(Json(payload))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub team_id: Option<i64>,
    pub position: Option<String>,
    pub name: Option<String>,
}

/// GET /players/search?team_id=57&position=Defender&name=saliba
pub async fn search_players(
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let team_id = params
        .team_id
        .ok_or_else(|| AppError::BadRequest("team_id parameter is required".into()))?;

    let (_, mut players) = fetch_team_players(&client, &cache, team_id).await?;

    if let Some(ref position) = params.position {
        players.retain(|p| {
            p["position"]
                .as_str()
                .unwrap_or("")
                .eq_ignore_ascii_case(position)
        });
    }

    if let Some(ref name) = params.name {
        let needle = name.to_lowercase();
        players.retain(|p| {
            p["name"]
                .as_str()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle)
        });
    }

    let count = players.len();

    Ok(Json(json!({
        "success": true,
        "players": players,
        "count": count,
        "filters": {
            "team_id": team_id,
            "position": params.position,
            "name": params.name,
        }
    })))
}

#[derive(Deserialize)]
pub struct CompareQuery {
    pub player_ids: String,
}

/// GET /players/compare?player_ids=44,3754
pub async fn compare_players(
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let ids: Vec<i64> = params
        .player_ids
        .split(',')
        .map(|s| s.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| AppError::BadRequest("Invalid player IDs format".into()))?;

    if ids.len() < 2 {
        return Err(AppError::BadRequest(
            "At least 2 player IDs are required for comparison".into(),
        ));
    }

    let mut compared = Vec::new();
    for id in ids {
        match build_player_profile(&client, &cache, id).await {
            Ok(profile) => compared.push(profile),
            Err(e) => tracing::warn!("Skipping player {id} in comparison: {e}"),
        }
    }

    if compared.len() < 2 {
        return Err(AppError::NotFound(
            "Could not find enough players for comparison".into(),
        ));
    }

    let metrics = comparison_metrics(&compared);

    Ok(Json(json!({
        "success": true,
        "players": compared,
        "comparison_metrics": metrics,
    })))
}

#[derive(Deserialize)]
pub struct TopPerformersQuery {
    pub metric: Option<String>,
    pub limit: Option<usize>,
}

/// GET /players/top-performers?metric=goals&limit=10
pub async fn get_top_performers(
    Extension(config): Extension<Config>,
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
    Query(params): Query<TopPerformersQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let metric = params.metric.unwrap_or_else(|| "goals".to_string());
    let limit = params.limit.unwrap_or(10);

    let mut players = collect_league_players(&config, &client, &cache).await?;
    sort_by_metric(&mut players, &metric);
    players.truncate(limit);

    let count = players.len();

    Ok(Json(json!({
        "success": true,
        "metric": metric,
        "players": players,
        "count": count,
    })))
}

/// GET /players/statistics/league-leaders
pub async fn get_league_leaders(
    Extension(config): Extension<Config>,
    Extension(client): Extension<Arc<FootballDataClient>>,
    Extension(cache): Extension<Arc<StatsCache>>,
) -> Result<Json<JsonValue>, AppError> {
    let players = collect_league_players(&config, &client, &cache).await?;

    let leaders = |metric: &str| {
        let mut sorted = players.clone();
        sort_by_metric(&mut sorted, metric);
        sorted.truncate(5);
        sorted
    };

    Ok(Json(json!({
        "success": true,
        "league_leaders": {
            "goals": leaders("goals"),
            "assists": leaders("assists"),
            "clean_sheets": leaders("clean_sheets"),
            "pass_accuracy": leaders("pass_accuracy"),
        }
    })))
}

/// Fetch a team's squad and attach memoized statistics to every player.
/// Returns the slimmed team object and the player list.
async fn fetch_team_players(
    client: &FootballDataClient,
    cache: &StatsCache,
    team_id: i64,
) -> Result<(JsonValue, Vec<JsonValue>), AppError> {
    let data = client.team(team_id).await?;

    let mut rng = rand::thread_rng();
    let players: Vec<JsonValue> = data["squad"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|p| squad_entry(p, cache, &mut rng))
        .collect();

    let team = json!({
        "id": data["id"],
        "name": data["name"],
        "crest": data["crest"],
    });

    Ok((team, players))
}

/// Full profile payload for one player: upstream bio fields plus memoized
/// statistics and per-request trend/heat-map data.
async fn build_player_profile(
    client: &FootballDataClient,
    cache: &StatsCache,
    player_id: i64,
) -> Result<JsonValue, AppError> {
    let data = client.person(player_id).await?;
    let position = data["position"].as_str().unwrap_or("").to_string();

    let player = json!({
        "id": data["id"],
        "name": data["name"],
        "firstName": data["firstName"],
        "lastName": data["lastName"],
        "position": data["position"],
        "nationality": data["nationality"],
        "dateOfBirth": data["dateOfBirth"],
        "age": data["dateOfBirth"].as_str().and_then(calculate_age),
        "currentTeam": data["currentTeam"]["name"],
        "shirtNumber": data["shirtNumber"],
        "section": data["section"],
    });

    let mut rng = rand::thread_rng();
    let statistics = cache.get_or_create(&mut rng, player_id, &position);
    let trends = generate_trends(&mut rng, &position);
    let heat_map = generate_heatmap(&mut rng, &position);

    Ok(json!({
        "success": true,
        "player": player,
        "statistics": statistics,
        "performance_trends": trends,
        "heat_map_data": heat_map,
    }))
}

/// Gather players from the first few league teams for cross-team rankings.
/// A team that fails to resolve is skipped rather than failing the request.
async fn collect_league_players(
    config: &Config,
    client: &FootballDataClient,
    cache: &StatsCache,
) -> Result<Vec<JsonValue>, AppError> {
    let data = client.competition_teams(&config.competition_code).await?;
    let teams = data["teams"].as_array().cloned().unwrap_or_default();

    let mut all_players = Vec::new();
    for team in teams.iter().take(LEAGUE_SCAN_TEAMS) {
        let Some(team_id) = team["id"].as_i64() else {
            continue;
        };
        match fetch_team_players(client, cache, team_id).await {
            Ok((_, players)) => all_players.extend(players),
            Err(e) => tracing::warn!("Skipping team {team_id} in league scan: {e}"),
        }
    }

    Ok(all_players)
}

fn squad_entry(player: &JsonValue, cache: &StatsCache, rng: &mut impl Rng) -> JsonValue {
    let player_id = player["id"].as_i64().unwrap_or(0);
    let position = player["position"].as_str().unwrap_or("");
    let statistics = cache.get_or_create(rng, player_id, position);

    json!({
        "id": player["id"],
        "name": player["name"],
        "position": player["position"],
        "nationality": player["nationality"],
        "dateOfBirth": player["dateOfBirth"],
        "age": player["dateOfBirth"].as_str().and_then(calculate_age),
        "statistics": statistics,
    })
}

/// Side-by-side metric table for the comparison endpoint.
fn comparison_metrics(players: &[JsonValue]) -> JsonValue {
    let entries: Vec<JsonValue> = players
        .iter()
        .map(|p| {
            let stats = &p["statistics"];
            let team = if p["player"]["currentTeam"].is_null() {
                json!("Unknown")
            } else {
                p["player"]["currentTeam"].clone()
            };

            json!({
                "name": p["player"]["name"],
                "position": p["player"]["position"],
                "team": team,
                "values": {
                    "goals": stats["goals"],
                    "assists": stats["assists"],
                    "minutes_played": stats["minutes_played"],
                    "pass_accuracy": round1(stats["pass_accuracy"].as_f64().unwrap_or(0.0)),
                    "tackles": stats["tackles"],
                    "shots": stats["shots"],
                }
            })
        })
        .collect();

    json!({
        "metrics": COMPARISON_METRICS,
        "players": entries,
    })
}

/// Sort players descending by a statistics metric; players missing the
/// metric sort last.
fn sort_by_metric(players: &mut [JsonValue], metric: &str) {
    players.sort_by(|a, b| {
        let av = a["statistics"][metric].as_f64().unwrap_or(0.0);
        let bv = b["statistics"][metric].as_f64().unwrap_or(0.0);
        bv.partial_cmp(&av).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Age in whole years from an ISO date (a leading `YYYY-MM-DD` is enough;
/// upstream sometimes appends a time component).
fn calculate_age(date_of_birth: &str) -> Option<i32> {
    let date_part = date_of_birth.get(..10)?;
    let birth = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let today = Utc::now().date_naive();

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
