//! Input validation helpers
//!
//! Every validator returns a plain `bool`; callers branch on the result
//! rather than handling errors.

use std::sync::OnceLock;

use regex_lite::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Syntactic email check: a local part, `@`, and a domain containing a
/// dot, none of them containing whitespace or further `@` signs.
///
/// An approximation, not an RFC 5322 parser.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Weight in kg must lie strictly between 0 and 1000.
pub fn is_valid_weight(weight: f64) -> bool {
    weight > 0.0 && weight < 1000.0
}

/// Body fat percentage, 0 to 100 inclusive.
pub fn is_valid_body_fat(body_fat: f64) -> bool {
    (0.0..=100.0).contains(&body_fat)
}

/// Reps must be a whole number between 1 and 1000.
///
/// Takes the raw numeric input so fractional values can be rejected
/// before narrowing to an integer type. NaN and infinities fail the
/// whole-number check.
pub fn is_valid_reps(reps: f64) -> bool {
    reps.fract() == 0.0 && reps > 0.0 && reps <= 1000.0
}
