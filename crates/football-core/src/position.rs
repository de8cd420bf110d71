//! Position label classification.

use serde::{Deserialize, Serialize};

/// Sampling profile a free-form position label resolves to.
///
/// Upstream position strings are uncontrolled; anything unrecognized
/// (including an empty string) falls back to `Other` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Winger,
    Forward,
    Other,
}

impl PositionGroup {
    /// Classify a position label as reported by football-data.org.
    /// Matching is exact and case-sensitive.
    pub fn classify(label: &str) -> Self {
        match label {
            "Goalkeeper" | "Goalie" => Self::Goalkeeper,
            "Defender" | "Centre-Back" | "Left-Back" | "Right-Back" => Self::Defender,
            "Midfielder" | "Defensive Midfield" | "Central Midfield" | "Attacking Midfield" => {
                Self::Midfielder
            }
            "Winger" | "Left Winger" | "Right Winger" => Self::Winger,
            "Forward" | "Centre-Forward" | "Striker" => Self::Forward,
            _ => Self::Other,
        }
    }

    /// Forwards and wingers draw from the higher per-match goal range in
    /// trend data.
    pub fn is_attacking(self) -> bool {
        matches!(self, Self::Forward | Self::Winger)
    }
}
