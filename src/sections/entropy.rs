//! Entropy estimate based on character-class pool size.

use super::CharClasses;

/// Approximate count of printable symbol characters. The literal is part of
/// the scoring contract; entropy outputs depend on it.
const SYMBOL_POOL: u32 = 33;

/// Cap on the points the entropy estimate can contribute.
const MAX_ENTROPY_BONUS: i32 = 25;

/// Estimates password entropy in bits.
///
/// The pool size is the sum of the sizes of the character classes present
/// (26 lowercase, 26 uppercase, 10 digits, 33 symbols), floored at 1, and
/// the estimate is `length * log2(pool)`. This assumes uniformly random
/// selection from the pool, so it is a proxy based on class breadth, not a
/// true measurement of the given password.
pub fn entropy_bits(password: &str) -> f64 {
    let classes = CharClasses::scan(password);
    let mut pool: u32 = 0;
    if classes.lower {
        pool += 26;
    }
    if classes.upper {
        pool += 26;
    }
    if classes.digit {
        pool += 10;
    }
    if classes.symbol {
        pool += SYMBOL_POOL;
    }
    let pool = pool.max(1);
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// Converts an entropy estimate into score points: 5 per full 10 bits,
/// capped at 25.
pub(crate) fn entropy_bonus(bits: f64) -> i32 {
    (((bits / 10.0).floor() as i32) * 5).min(MAX_ENTROPY_BONUS)
}
