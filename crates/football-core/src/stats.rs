//! Season statistics synthesis.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::position::PositionGroup;

/// Season statistics for one player, drawn from position-conditioned
/// sampling ranges.
///
/// Serializes to a flat metric -> number map. `saves` and `goals_conceded`
/// only exist for goalkeepers and are omitted from the JSON entirely for
/// outfield players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub appearances: u32,
    pub minutes_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub passes_completed: u32,
    pub pass_accuracy: f64,
    pub tackles: u32,
    pub interceptions: u32,
    pub aerial_duels_won: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub dribbles_completed: u32,
    pub fouls_committed: u32,
    pub clean_sheets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<u32>,
    pub shot_accuracy: f64,
    pub goals_per_90: f64,
    pub assists_per_90: f64,
}

impl PlayerStatistics {
    /// Recompute the derived metrics from the base metrics. A zero
    /// denominator yields zero rather than NaN.
    pub fn recompute_derived(&mut self) {
        self.shot_accuracy = if self.shots > 0 {
            self.shots_on_target as f64 / self.shots as f64 * 100.0
        } else {
            0.0
        };

        if self.minutes_played > 0 {
            self.goals_per_90 = self.goals as f64 / self.minutes_played as f64 * 90.0;
            self.assists_per_90 = self.assists as f64 / self.minutes_played as f64 * 90.0;
        } else {
            self.goals_per_90 = 0.0;
            self.assists_per_90 = 0.0;
        }
    }
}

/// Synthesize a statistics record for a player at the given position.
///
/// Any label is accepted; unrecognized ones keep the base ranges without a
/// position override. Derived metrics are computed after the override so
/// they reflect the final base values.
pub fn synthesize_statistics(rng: &mut impl Rng, position: &str) -> PlayerStatistics {
    let mut stats = PlayerStatistics {
        appearances: rng.gen_range(15..=35),
        minutes_played: rng.gen_range(800..=2500),
        goals: 0,
        assists: 0,
        yellow_cards: rng.gen_range(0..=8),
        red_cards: rng.gen_range(0..=1),
        passes_completed: rng.gen_range(200..=1500),
        pass_accuracy: rng.gen_range(70.0..=95.0),
        tackles: rng.gen_range(10..=80),
        interceptions: rng.gen_range(5..=60),
        aerial_duels_won: rng.gen_range(10..=100),
        shots: rng.gen_range(5..=80),
        shots_on_target: rng.gen_range(2..=40),
        dribbles_completed: rng.gen_range(5..=50),
        fouls_committed: rng.gen_range(5..=40),
        clean_sheets: 0,
        saves: None,
        goals_conceded: None,
        shot_accuracy: 0.0,
        goals_per_90: 0.0,
        assists_per_90: 0.0,
    };

    match PositionGroup::classify(position) {
        PositionGroup::Goalkeeper => {
            stats.goals = 0;
            stats.assists = rng.gen_range(0..=2);
            stats.saves = Some(rng.gen_range(40..=120));
            stats.clean_sheets = rng.gen_range(5..=15);
            stats.goals_conceded = Some(rng.gen_range(15..=45));
            stats.pass_accuracy = rng.gen_range(40.0..=70.0);
        }
        PositionGroup::Defender => {
            stats.goals = rng.gen_range(0..=5);
            stats.assists = rng.gen_range(0..=8);
            stats.tackles = rng.gen_range(30..=80);
            stats.interceptions = rng.gen_range(20..=60);
            stats.aerial_duels_won = rng.gen_range(30..=100);
            stats.clean_sheets = rng.gen_range(8..=18);
        }
        PositionGroup::Midfielder => {
            stats.goals = rng.gen_range(2..=12);
            stats.assists = rng.gen_range(3..=15);
            stats.passes_completed = rng.gen_range(800..=1500);
            stats.pass_accuracy = rng.gen_range(80.0..=95.0);
            stats.dribbles_completed = rng.gen_range(20..=50);
        }
        PositionGroup::Winger => {
            stats.goals = rng.gen_range(5..=15);
            stats.assists = rng.gen_range(8..=20);
            stats.dribbles_completed = rng.gen_range(30..=60);
            stats.shots = rng.gen_range(30..=80);
            stats.shots_on_target = rng.gen_range(15..=40);
        }
        PositionGroup::Forward => {
            stats.goals = rng.gen_range(8..=25);
            stats.assists = rng.gen_range(3..=12);
            stats.shots = rng.gen_range(50..=120);
            stats.shots_on_target = rng.gen_range(25..=60);
            stats.aerial_duels_won = rng.gen_range(40..=100);
        }
        PositionGroup::Other => {}
    }

    stats.recompute_derived();
    stats
}
