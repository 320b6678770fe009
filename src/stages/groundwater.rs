//! STAGE 3: GROUNDWATER DEPTH SAMPLING
//!
//! Draws a depth-to-groundwater value uniformly from the resolved zone's
//! range. The value is simulated; a real well log would replace this stage
//! without touching its consumers.

use crate::stages::zones::HydrogeologicalZone;
use rand::Rng;

/// Depth beyond which the water table counts as "deep" [m].
///
/// Drives shaft eligibility in the structure recommender.
pub const DEEP_WATER_TABLE_M: f64 = 12.0;

/// Sample a depth-to-groundwater value within the zone's range.
pub fn sample_depth(zone: &HydrogeologicalZone, rng: &mut impl Rng) -> f64 {
    let (min, max) = zone.depth_to_water_m;
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
