//! Denylist of extremely common passwords.
//!
//! The list is a fixed process-wide constant; there is no file loading or
//! runtime configuration.

/// Passwords so common that an exact match is penalized outright.
pub const COMMON_PASSWORDS: [&str; 6] =
    ["password", "123456", "qwerty", "letmein", "admin", "welcome"];

/// Checks if a password is in the denylist.
///
/// The comparison is case-insensitive and matches the whole password, not
/// substrings.
pub fn is_denylisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| *common == lowered)
}
