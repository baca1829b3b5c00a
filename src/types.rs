//! Evaluation result types.

use std::fmt;

/// Qualitative strength tier, derived from the numeric score via fixed
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    VeryWeak,
    Weak,
    Good,
    Strong,
}

impl Tier {
    /// Maps a clamped score to its tier. Boundaries are 25, 50, and 75.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => Self::VeryWeak,
            25..=49 => Self::Weak,
            50..=74 => Self::Good,
            _ => Self::Strong,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Good => "Good",
            Self::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of a single password evaluation. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Aggregate score, clamped to 0..=100.
    pub score: u8,
    /// Tier derived from `score`.
    pub tier: Tier,
    /// Entropy estimate in bits, rounded to one decimal place.
    pub entropy_bits: f64,
    /// Advisory tips, in the order the checks run (length, variety, pattern).
    pub tips: Vec<&'static str>,
}
