//! STAGE 7: FEASIBILITY SCORING
//!
//! Weighted combination of roof area, annual rainfall and open space into a
//! numeric score and a Green/Yellow/Red tier. Weights, reference values and
//! thresholds are fixed constants; the score is monotonic non-decreasing in
//! each input.

use crate::types::FeasibilityTier;

const ROOF_AREA_REF_M2: f64 = 200.0;
const ROOF_AREA_WEIGHT: f64 = 30.0;
const RAINFALL_REF_MM: f64 = 1200.0;
const RAINFALL_WEIGHT: f64 = 30.0;
const BASELINE_POINTS: f64 = 25.0;
const OPEN_SPACE_REF_M2: f64 = 50.0;
const OPEN_SPACE_WEIGHT: f64 = 15.0;

const GREEN_THRESHOLD: f64 = 75.0;
const YELLOW_THRESHOLD: f64 = 40.0;

/// Numeric score plus its tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityScore {
    pub score: f64,
    pub tier: FeasibilityTier,
}

/// Score a site's overall harvesting suitability.
pub fn score_feasibility(
    roof_area_m2: f64,
    annual_rainfall_mm: f64,
    open_space_m2: f64,
) -> FeasibilityScore {
    let score = (roof_area_m2 / ROOF_AREA_REF_M2) * ROOF_AREA_WEIGHT
        + (annual_rainfall_mm / RAINFALL_REF_MM) * RAINFALL_WEIGHT
        + BASELINE_POINTS
        + (open_space_m2 / OPEN_SPACE_REF_M2) * OPEN_SPACE_WEIGHT;

    let tier = if score >= GREEN_THRESHOLD {
        FeasibilityTier::Green
    } else if score >= YELLOW_THRESHOLD {
        FeasibilityTier::Yellow
    } else {
        FeasibilityTier::Red
    };

    FeasibilityScore { score, tier }
}
