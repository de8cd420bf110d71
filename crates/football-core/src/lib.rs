//! Synthetic player-statistics core.
//!
//! The public football-data API carries squad and profile data but no
//! per-player performance numbers, so the backend fills that gap with
//! position-conditioned random synthesis: a season statistics record, a
//! ten-match form series, and a 10x10 pitch heat map. Everything here is
//! pure computation over an injected random source; no I/O.

pub mod cache;
pub mod heatmap;
pub mod position;
pub mod stats;
pub mod trends;

pub use cache::StatsCache;
pub use heatmap::{generate_heatmap, HeatMap};
pub use position::PositionGroup;
pub use stats::{synthesize_statistics, PlayerStatistics};
pub use trends::{generate_trends, TrendSeries};
