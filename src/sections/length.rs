//! Length section - awards points for password length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;

pub(crate) const LENGTH_TIP: &str = "Use at least 12 to 16 characters";

/// Scores password length: +30 at 16 characters, +20 at 12, +10 at 8.
/// Shorter passwords score nothing and get the length tip.
pub(crate) fn length_section(password: &SecretString) -> SectionOutcome {
    let len = password.expose_secret().chars().count();
    if len >= 16 {
        SectionOutcome::pass(30)
    } else if len >= 12 {
        SectionOutcome::pass(20)
    } else if len >= 8 {
        SectionOutcome::pass(10)
    } else {
        SectionOutcome::flag(0, LENGTH_TIP)
    }
}
