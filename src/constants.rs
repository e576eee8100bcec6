// Truth Egg conversion
pub const TRUTH_EGG_LOG_BASE: f64 = 1.1;

// Colleggtible progress tiers (max farm size reached)
pub const COLLEGGTIBLE_TIER_THRESHOLDS: [f64; 4] = [1e7, 1e8, 1e9, 1e10];

// Research discount
pub const MAX_EPIC_RESEARCH_DISCOUNT: f64 = 0.5;

// Loadout optimization
pub const STONE_POTENTIAL_BASE: f64 = 1.4;
pub const MIN_HOST_COUNT: u8 = 2;
pub const MAX_HOST_COUNT: u8 = 4;

// Score comparison tolerance; part of the public contract so that "best
// loadout" picks are stable under floating-point accumulation order.
pub const SCORE_RELATIVE_TOLERANCE: f64 = 1e-9;
pub const SCORE_ABSOLUTE_TOLERANCE: f64 = 1e-12;
