//! Numeric helpers

/// Round to `decimal_places` digits after the point.
///
/// Midpoints of the scaled value round away from zero. Plain f64
/// arithmetic throughout, so decimal fractions without an exact binary
/// form keep their usual imprecision.
pub fn round_to_decimal_place(value: f64, decimal_places: u32) -> f64 {
    let multiplier = 10f64.powi(decimal_places as i32);
    (value * multiplier).round() / multiplier
}

/// Body mass index: weight (kg) over height (m) squared, rounded to one
/// decimal place.
///
/// Height is taken in centimeters. A zero height divides through to
/// infinity; guarding degenerate input is the caller's concern.
pub fn calculate_bmi(weight: f64, height_in_cm: f64) -> f64 {
    let height_in_m = height_in_cm / 100.0;
    round_to_decimal_place(weight / (height_in_m * height_in_m), 1)
}
