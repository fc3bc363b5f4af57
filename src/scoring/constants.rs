//! Threshold table for the heuristic scorer.
//!
//! All values are per 100 g. The same thresholds drive the descriptive
//! health labels where the meaning overlaps (e.g. `PROTEIN_HIGH`).

/// Starting score before any adjustment.
pub const BASE_SCORE: f64 = 3.0;

/// Final score bounds after rounding.
pub const SCORE_MIN: i32 = 1;
pub const SCORE_MAX: i32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// General nutrient thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Calories at or below this gain a full point.
pub const CAL_LOW: f64 = 100.0;

/// Calories at or below this gain half a point; also the low-calorie label cut.
pub const CAL_MODERATE: f64 = 200.0;

/// Calories above this lose a full point.
pub const CAL_HIGH: f64 = 400.0;

/// Protein at or above this gains a full point; also the high-protein label cut.
pub const PROTEIN_HIGH: f64 = 15.0;

/// Protein at or above this gains half a point.
pub const PROTEIN_MODERATE: f64 = 10.0;

/// Protein below this loses half a point.
pub const PROTEIN_LOW: f64 = 2.0;

/// Fat at or below this gains a full point; also the low-fat label cut.
pub const FAT_LOW: f64 = 5.0;

/// Fat at or below this gains half a point.
pub const FAT_MODERATE: f64 = 10.0;

/// Fat above this loses a full point.
pub const FAT_HIGH: f64 = 20.0;

/// Carbohydrates at or below this gain half a point; also the low-carb label cut.
pub const CARB_LOW: f64 = 20.0;

/// Carbohydrates above this lose half a point.
pub const CARB_HIGH: f64 = 50.0;

/// Fiber at or above this gains a full point; also the high-fiber label cut.
pub const FIBER_HIGH: f64 = 3.0;

/// Fiber at or above this gains half a point.
pub const FIBER_MODERATE: f64 = 1.0;

/// Sugar at or below this gains a full point; also the low-sugar label cut.
pub const SUGAR_LOW: f64 = 2.0;

/// Sugar at or below this gains half a point.
pub const SUGAR_MODERATE: f64 = 5.0;

/// Sugar above this loses a full point.
pub const SUGAR_HIGH: f64 = 15.0;

/// Bonus for vegetables and fruits.
pub const ANTIOXIDANT_BONUS: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Condition-specific adjustments (each worth a full point up or down)
// ─────────────────────────────────────────────────────────────────────────────

pub const DIABETES_CARB_LIMIT: f64 = 25.0;
pub const DIABETES_SUGAR_LIMIT: f64 = 5.0;
pub const DIABETES_CARB_PENALTY: f64 = 40.0;
pub const DIABETES_SUGAR_PENALTY: f64 = 15.0;

pub const HYPERTENSION_FAT_LIMIT: f64 = 10.0;
pub const HYPERTENSION_CAL_LIMIT: f64 = 300.0;
pub const HYPERTENSION_FAT_PENALTY: f64 = 20.0;

pub const OBESITY_CAL_LIMIT: f64 = 150.0;
pub const OBESITY_FAT_LIMIT: f64 = 5.0;
pub const OBESITY_CAL_PENALTY: f64 = 300.0;
pub const OBESITY_FAT_PENALTY: f64 = 15.0;

pub const HEART_FAT_LIMIT: f64 = 8.0;
pub const HEART_PROTEIN_FLOOR: f64 = 10.0;
pub const HEART_FAT_PENALTY: f64 = 15.0;
