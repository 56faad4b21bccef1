//! FitTrack Shared Utilities
//!
//! Pure helper functions shared across the monorepo: date formatting,
//! input validation, ID generation, grouping, and numeric helpers.
//! Everything is synchronous and reentrant; only `generate_id` touches
//! the outside world, by reading the OS random source.

pub mod collections;
pub mod datetime;
pub mod id;
pub mod numeric;
pub mod validation;

// Re-export commonly used items
pub use collections::group_by;
pub use datetime::{format_date, format_date_time};
pub use id::generate_id;
pub use numeric::{calculate_bmi, round_to_decimal_place};
pub use validation::{is_valid_body_fat, is_valid_email, is_valid_reps, is_valid_weight};
