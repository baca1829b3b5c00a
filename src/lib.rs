//! Heuristic password strength estimation
//!
//! Scores a password from 0 to 100 based on length, character variety,
//! common-pattern detection, and a pool-size entropy estimate, collecting
//! improvement tips along the way. The result is advisory only: the entropy
//! figure is a proxy for unpredictability, not a cryptographic measurement.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_gauge::evaluate;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate(&password);
//!
//! assert!(report.score <= 100);
//! println!("{} ({}/100)", report.tier, report.score);
//! println!("{:.1} bits", report.entropy_bits);
//! ```

// Internal modules
mod denylist;
mod evaluator;
mod sections;
mod types;

// Public API
pub use denylist::{COMMON_PASSWORDS, is_denylisted};
pub use evaluator::evaluate;
pub use sections::entropy_bits;
pub use types::{Evaluation, Tier};
