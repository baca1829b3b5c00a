//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    SectionOutcome, entropy_bits, entropy_bonus, length_section, pattern_section, variety_section,
};
use crate::types::{Evaluation, Tier};

/// Evaluates password strength and returns a detailed evaluation.
///
/// Pure function of its input: the same password always yields the same
/// result, nothing is stored, and no input can make it fail.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `Evaluation` containing score, tier, entropy estimate, and tips.
pub fn evaluate(password: &SecretString) -> Evaluation {
    let mut score: i32 = 0;
    let mut tips: Vec<&'static str> = Vec::new();

    // Run sections in sequence; tip order follows section order
    let sections: [fn(&SecretString) -> SectionOutcome; 3] =
        [length_section, variety_section, pattern_section];

    for section in sections {
        let outcome = section(password);
        score += outcome.points;
        if let Some(tip) = outcome.tip {
            tips.push(tip);
        }
    }

    let bits = entropy_bits(password.expose_secret());
    score += entropy_bonus(bits);

    let score = score.clamp(0, 100) as u8;
    let tier = Tier::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, tier = %tier, entropy_bits = bits, "password evaluated");

    Evaluation {
        score,
        tier,
        entropy_bits: (bits * 10.0).round() / 10.0,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{LENGTH_TIP, PATTERN_TIP, VARIETY_TIP};

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate(&secret(""));

        assert_eq!(report.score, 0);
        assert_eq!(report.tier, Tier::VeryWeak);
        assert_eq!(report.entropy_bits, 0.0);
        assert_eq!(report.tips, vec![LENGTH_TIP, VARIETY_TIP]);
    }

    #[test]
    fn test_evaluate_common_word() {
        // +10 length, +10 variety, -15 pattern, +15 entropy bonus
        let report = evaluate(&secret("password"));

        assert_eq!(report.score, 20);
        assert_eq!(report.tier, Tier::VeryWeak);
        assert_eq!(report.tips, vec![VARIETY_TIP, PATTERN_TIP]);
        // 8 * log2(26) = 37.6 bits after rounding
        assert!((report.entropy_bits - 37.6).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_strong_password() {
        // +20 length (14 chars), +40 variety, no penalty, +25 entropy bonus
        let report = evaluate(&secret("Tr0ub4dor&3xyz"));

        assert_eq!(report.score, 85);
        assert_eq!(report.tier, Tier::Strong);
        assert!(report.tips.is_empty());
    }

    #[test]
    fn test_evaluate_repeated_characters() {
        // +20 length, +10 variety, -15 pattern, +25 entropy bonus
        let report = evaluate(&secret("aaaaaaaaaaaa"));

        assert_eq!(report.score, 40);
        assert_eq!(report.tier, Tier::Weak);
        assert_eq!(report.tips, vec![VARIETY_TIP, PATTERN_TIP]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let first = evaluate(&secret("MyPass123!"));
        let second = evaluate(&secret("MyPass123!"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_score_and_entropy_bounds() {
        let passwords = [
            "",
            "a",
            "password",
            "123456",
            "MyPass123!",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "VeryStrongPassword123!@#",
            "__ __",
            "àèìòùéüö",
        ];

        for pwd in passwords {
            let report = evaluate(&secret(pwd));
            assert!(report.score <= 100, "score out of bounds for {pwd:?}");
            assert!(
                report.entropy_bits >= 0.0,
                "negative entropy for {pwd:?}"
            );
            assert_eq!(report.tier, Tier::from_score(report.score));
        }
    }

    #[test]
    fn test_evaluate_tier_matches_score() {
        // Long all-class password with no obvious patterns lands in Strong
        let report = evaluate(&secret("K7#mQ9$wXz!4Lp&2"));
        assert_eq!(report.tier, Tier::Strong);
        assert!(report.score >= 75);
    }
}
