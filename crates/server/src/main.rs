use server::clients::football_data::FootballDataClient;
use server::config;
use server::routes;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use football_core::StatsCache;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let football_data = Arc::new(FootballDataClient::new(&config));

    // Synthesized statistics live here for the lifetime of the process
    let stats_cache = Arc::new(StatsCache::new());

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router — same paths as the original FastAPI service
    let app = Router::new()
        // Health
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        // Teams
        .route("/teams", get(routes::teams::get_teams))
        .route("/team/{team_id}", get(routes::teams::get_team_details))
        .route("/team/{team_id}/players", get(routes::players::get_team_players))
        // Matches
        .route("/matches", get(routes::matches::get_recent_matches))
        // Players — specific routes before parameterized
        .route("/players/search", get(routes::players::search_players))
        .route("/players/compare", get(routes::players::compare_players))
        .route("/players/top-performers", get(routes::players::get_top_performers))
        .route(
            "/players/statistics/league-leaders",
            get(routes::players::get_league_leaders),
        )
        .route("/player/{player_id}", get(routes::players::get_player_profile))
        // Shared state
        .layer(Extension(config.clone()))
        .layer(Extension(football_data))
        .layer(Extension(stats_cache))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
