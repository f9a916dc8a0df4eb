//! Rep-max estimation using the Epley formula.
//!
//! `e1rm = weight * (1 + reps / 30)`
//!
//! Estimates are only produced for 1 to 15 reps. Past 15 reps the
//! extrapolation is statistically unreliable, so those inputs are rejected
//! rather than clamped.

/// Maximum reps for which an estimate is produced
pub const MAX_RELIABLE_REPS: u32 = 15;

/// Smallest load step when rounding estimates to loadable weights
pub const PLATE_INCREMENT: f64 = 2.5;

const EPLEY_DIVISOR: f64 = 30.0;

fn epley_factor(reps: u32) -> f64 {
    1.0 + f64::from(reps) / EPLEY_DIVISOR
}

fn is_valid_set(weight: f64, reps: u32) -> bool {
    weight.is_finite() && weight > 0.0 && (1..=MAX_RELIABLE_REPS).contains(&reps)
}

/// Estimate the one-rep max from a submaximal set
///
/// Returns `None` when `weight <= 0` or `reps` is outside 1..=15.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> Option<f64> {
    if !is_valid_set(weight, reps) {
        tracing::debug!("Rejected e1RM input: {} x {}", weight, reps);
        return None;
    }
    Some(weight * epley_factor(reps))
}

/// Estimate the load that could be lifted for `target_reps` reps
///
/// Inverts Epley from the estimated one-rep max. Both `reps` and
/// `target_reps` must fall within 1..=15.
pub fn estimate_rep_max(weight: f64, reps: u32, target_reps: u32) -> Option<f64> {
    if !(1..=MAX_RELIABLE_REPS).contains(&target_reps) {
        return None;
    }
    estimate_one_rep_max(weight, reps).map(|e1rm| e1rm / epley_factor(target_reps))
}

/// Estimate the ten-rep max from a submaximal set
pub fn estimate_ten_rep_max(weight: f64, reps: u32) -> Option<f64> {
    estimate_rep_max(weight, reps, 10)
}

/// Round to the nearest 2.5 increment, halves rounding up
pub fn round_to_plate_increment(weight: f64) -> f64 {
    (weight / PLATE_INCREMENT + 0.5).floor() * PLATE_INCREMENT
}
