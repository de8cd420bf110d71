//! Per-match form series over the last ten synthetic fixtures.

use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::position::PositionGroup;

/// One synthetic fixture per week, ending today.
pub const TREND_MATCHES: usize = 10;

/// Form over the last [`TREND_MATCHES`] fixtures.
///
/// The five arrays are index-aligned: entry `i` of each describes the same
/// match, oldest first. Dates are `%Y-%m-%d`, spaced exactly seven days
/// apart with the final entry at "now".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub matches: Vec<String>,
    pub goals: Vec<u32>,
    pub assists: Vec<u32>,
    pub rating: Vec<f64>,
    pub minutes: Vec<u32>,
}

/// Generate a form series for a player at the given position.
pub fn generate_trends(rng: &mut impl Rng, position: &str) -> TrendSeries {
    let group = PositionGroup::classify(position);
    let now = Utc::now();

    let mut series = TrendSeries {
        matches: Vec::with_capacity(TREND_MATCHES),
        goals: Vec::with_capacity(TREND_MATCHES),
        assists: Vec::with_capacity(TREND_MATCHES),
        rating: Vec::with_capacity(TREND_MATCHES),
        minutes: Vec::with_capacity(TREND_MATCHES),
    };

    for i in 0..TREND_MATCHES {
        let weeks_back = (TREND_MATCHES - 1 - i) as i64;
        let match_date = now - Duration::days(weeks_back * 7);
        series.matches.push(match_date.format("%Y-%m-%d").to_string());

        let (goals, assists) = match group {
            g if g.is_attacking() => (rng.gen_range(0..=2), rng.gen_range(0..=1)),
            PositionGroup::Midfielder => (rng.gen_range(0..=1), rng.gen_range(0..=2)),
            _ => (rng.gen_range(0..=1), rng.gen_range(0..=1)),
        };
        series.goals.push(goals);
        series.assists.push(assists);

        // One decimal place, matching what a match-rating feed would carry
        let rating = rng.gen_range(6.0..=9.5_f64);
        series.rating.push((rating * 10.0).round() / 10.0);

        series.minutes.push(rng.gen_range(60..=90));
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_series_lengths_align() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_trends(&mut rng, "Midfielder");
        assert_eq!(series.matches.len(), TREND_MATCHES);
        assert_eq!(series.goals.len(), TREND_MATCHES);
        assert_eq!(series.assists.len(), TREND_MATCHES);
        assert_eq!(series.rating.len(), TREND_MATCHES);
        assert_eq!(series.minutes.len(), TREND_MATCHES);
    }

    #[test]
    fn test_dates_increase_weekly() {
        let mut rng = StdRng::seed_from_u64(2);
        let series = generate_trends(&mut rng, "Forward");
        let dates: Vec<NaiveDate> = series
            .matches
            .iter()
            .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
            .collect();
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
        assert_eq!(*dates.last().unwrap(), Utc::now().date_naive());
    }

    #[test]
    fn test_sampling_ranges_by_position() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let attacking = generate_trends(&mut rng, "Winger");
            assert!(attacking.goals.iter().all(|&g| g <= 2));
            assert!(attacking.assists.iter().all(|&a| a <= 1));

            let midfield = generate_trends(&mut rng, "Midfielder");
            assert!(midfield.goals.iter().all(|&g| g <= 1));
            assert!(midfield.assists.iter().all(|&a| a <= 2));

            let other = generate_trends(&mut rng, "Defender");
            assert!(other.goals.iter().all(|&g| g <= 1));
            assert!(other.assists.iter().all(|&a| a <= 1));
        }
    }

    #[test]
    fn test_rating_and_minutes_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let series = generate_trends(&mut rng, "Striker");
            for &r in &series.rating {
                assert!((6.0..=9.5).contains(&r), "rating {r} out of bounds");
                let tenths = r * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-9, "rating {r} not one decimal");
            }
            assert!(series.minutes.iter().all(|&m| (60..=90).contains(&m)));
        }
    }
}
