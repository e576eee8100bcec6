use crate::constants::{
    SCORE_ABSOLUTE_TOLERANCE, SCORE_RELATIVE_TOLERANCE, TRUTH_EGG_LOG_BASE,
};

/// Converts an earnings multiplier into equivalent Truth Eggs.
///
/// Each Truth Egg is worth a 1.1x multiplier, so this is just a log in
/// that base. Non-positive multipliers (unrepresentable in the game) map
/// to negative infinity.
pub fn multiplier_to_units(multiplier: f64) -> f64 {
    if multiplier <= 0.0 {
        return f64::NEG_INFINITY;
    }
    multiplier.ln() / TRUTH_EGG_LOG_BASE.ln()
}

/// True when `a` beats `b` by more than the score tolerance. Used for
/// best-score tracking so ties under floating-point accumulation order
/// don't flip the chosen loadout.
pub fn definitely_greater(a: f64, b: f64) -> bool {
    a > b + SCORE_RELATIVE_TOLERANCE * b.abs() + SCORE_ABSOLUTE_TOLERANCE
}
