//! Pattern section - penalizes common words, repeated runs, and obvious
//! sequences.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::denylist::is_denylisted;

pub(crate) const PATTERN_TIP: &str = "Avoid common words or obvious sequences";

const PATTERN_PENALTY: i32 = -15;
const SEQUENCES: [&str; 4] = ["123", "321", "abc", "cba"];

/// Applies a single -15 penalty when the password is a denylisted common
/// word, contains a character repeated three or more times in a row, or
/// contains an obvious sequence fragment. The penalty fires at most once no
/// matter how many conditions match.
pub(crate) fn pattern_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let lowered = pwd.to_lowercase();

    let weak = is_denylisted(pwd)
        || has_repeated_run(pwd)
        || SEQUENCES.iter().any(|seq| lowered.contains(seq));

    if weak {
        SectionOutcome::flag(PATTERN_PENALTY, PATTERN_TIP)
    } else {
        SectionOutcome::pass(0)
    }
}

/// True if any character appears three or more times consecutively.
/// Case-sensitive, checked on the raw password.
fn has_repeated_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}
