//! Password scoring sections
//!
//! Each section analyzes a specific aspect of password strength and
//! contributes points (possibly negative) plus an optional advisory tip.

mod entropy;
mod length;
mod pattern;
mod variety;

pub use entropy::entropy_bits;
pub(crate) use entropy::entropy_bonus;
pub(crate) use length::{LENGTH_TIP, length_section};
pub(crate) use pattern::{PATTERN_TIP, pattern_section};
pub(crate) use variety::{VARIETY_TIP, variety_section};

/// Outcome of a single scoring section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SectionOutcome {
    /// Points contributed to the aggregate score.
    pub points: i32,
    /// Tip emitted when the section flags a weakness.
    pub tip: Option<&'static str>,
}

impl SectionOutcome {
    pub(crate) fn pass(points: i32) -> Self {
        Self { points, tip: None }
    }

    pub(crate) fn flag(points: i32, tip: &'static str) -> Self {
        Self {
            points,
            tip: Some(tip),
        }
    }
}

/// Presence of the four character classes, shared by the variety section and
/// the entropy pool estimate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    pub(crate) fn scan(pwd: &str) -> Self {
        Self {
            lower: pwd.chars().any(|c| c.is_ascii_lowercase()),
            upper: pwd.chars().any(|c| c.is_ascii_uppercase()),
            digit: pwd.chars().any(|c| c.is_ascii_digit()),
            symbol: pwd.chars().any(is_symbol),
        }
    }

    pub(crate) fn count(&self) -> u32 {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|&&present| present)
            .count() as u32
    }
}

/// A symbol is any character that is neither alphanumeric, whitespace, nor
/// underscore (the non-word, non-whitespace class).
pub(crate) fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && c != '_'
}
