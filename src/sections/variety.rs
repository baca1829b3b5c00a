//! Character variety section - rewards mixing the four character classes.

use secrecy::{ExposeSecret, SecretString};

use super::{CharClasses, SectionOutcome};

pub(crate) const VARIETY_TIP: &str = "Mix upper, lower, digits, and symbols";

const POINTS_PER_CLASS: i32 = 10;
const MIN_CLASSES: u32 = 3;

/// Awards 10 points per character class present. Fewer than three classes
/// gets the variety tip.
pub(crate) fn variety_section(password: &SecretString) -> SectionOutcome {
    let count = CharClasses::scan(password.expose_secret()).count();
    let points = POINTS_PER_CLASS * count as i32;
    if count < MIN_CLASSES {
        SectionOutcome::flag(points, VARIETY_TIP)
    } else {
        SectionOutcome::pass(points)
    }
}
