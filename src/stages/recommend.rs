//! STAGE 5: STRUCTURE RECOMMENDATION
//!
//! The central decision engine. Given the monsoon harvest, available open
//! ground, groundwater depth and household size, selects zero or more
//! recharge structures, each sized and costed.
//!
//! The three rules run as one greedy cascade (shaft → trench → pit) threading
//! a `remaining` target volume: each rule sees only the volume the earlier
//! rules left unsatisfied, so capacities are never double-counted. At most
//! one entry per kind; a rule whose guard fails contributes nothing rather
//! than a zero-volume entry.

use crate::stages::groundwater::DEEP_WATER_TABLE_M;
use crate::types::{RecommendedStructure, StructureDimensions, StructureList};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f64::consts::PI;

/// Below this open area no structure is practically buildable [m²]
pub const MIN_BUILDABLE_SPACE_M2: f64 = 2.0;

/// Target volumes at or under this are treated as negligible [m³]
pub const NEGLIGIBLE_TARGET_M3: f64 = 2.0;

/// Recharge fraction for a two-person household
const BASE_DEMAND_FRACTION: f64 = 0.7;

/// Extra recharge fraction per dweller beyond two
const DEMAND_FRACTION_PER_DWELLER: f64 = 0.05;

/// Ceiling on the demand-scaled recharge fraction
const MAX_DEMAND_FRACTION: f64 = 0.9;

/// Void fraction of the gravel/sand filter media filling each structure
pub const FILTER_POROSITY: f64 = 0.4;

/// Seasonal recharge cycles through the same void space
pub const PERCOLATION_FACTOR: f64 = 5.0;

// Shaft sizing and cost
const SHAFT_MIN_REMAINING_M3: f64 = 20.0;
const SHAFT_DIAMETER_M: f64 = 1.0;
const SHAFT_DEPTH_FACTOR: f64 = 0.7;
const SHAFT_MIN_DEPTH_M: f64 = 8.0;
const SHAFT_MAX_DEPTH_M: f64 = 25.0;
const SHAFT_COST_BASE: f64 = 30_000.0;
const SHAFT_COST_PER_METRE: f64 = 2_500.0;

// Trench sizing and cost
const TRENCH_MIN_REMAINING_M3: f64 = 40.0;
const TRENCH_MIN_SPACE_M2: f64 = 10.0;
const TRENCH_WIDTH_M: f64 = 1.0;
const TRENCH_DEPTH_M: f64 = 1.5;
const TRENCH_MAX_LENGTH_M: f64 = 40.0;
const TRENCH_MIN_LENGTH_M: f64 = 2.0;
const TRENCH_COST_BASE: f64 = 10_000.0;
const TRENCH_COST_PER_METRE: f64 = 1_500.0;

// Pit sizing and cost
const PIT_MIN_REMAINING_M3: f64 = 5.0;
const PIT_MIN_SPACE_M2: f64 = 4.0;
const PIT_MIN_FOOTPRINT_M2: f64 = 1.5 * 1.5;
const PIT_MAX_FOOTPRINT_M2: f64 = 4.0 * 4.0;
const PIT_SPACE_SHARE: f64 = 0.6;
const PIT_DEPTH_M: f64 = 3.0;
const PIT_MAX_COUNT: u32 = 3;
const PIT_COST_BASE: f64 = 8_000.0;
const PIT_COST_PER_M3: f64 = 1_200.0;

/// Why an assessment ends with an empty structure list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoStructureReason {
    /// Open ground below what any structure needs, despite real demand
    SpaceTooLimited,
    /// Target recharge volume too small for a structure to pay off
    DemandBelowThreshold,
}

/// Recommendation outcome: the structure list plus the reason when empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub structures: StructureList,
    /// Demand-scaled recharge target the cascade worked against [m³]
    pub target_volume_m3: f64,
    /// Populated exactly when `structures` is empty
    pub reason: Option<NoStructureReason>,
}

impl RecommendationOutcome {
    fn empty(target_volume_m3: f64, reason: NoStructureReason) -> Self {
        Self {
            structures: SmallVec::new(),
            target_volume_m3,
            reason: Some(reason),
        }
    }

    /// Total construction cost across all recommended structures
    pub fn total_cost(&self) -> f64 {
        self.structures.iter().map(|s| s.cost).sum()
    }
}

/// Demand-scaled fraction of the monsoon harvest to aim at recharging.
///
/// Two dwellers anchor the base fraction; each extra dweller adds 5 points,
/// capped so some harvest is always left unclaimed.
fn demand_fraction(household_size: u32) -> f64 {
    let extra = household_size.saturating_sub(2) as f64;
    (BASE_DEMAND_FRACTION + extra * DEMAND_FRACTION_PER_DWELLER).min(MAX_DEMAND_FRACTION)
}

/// Run the three-rule cascade and return sized, costed recommendations.
pub fn recommend_structures(
    monsoon_harvest_m3: f64,
    open_space_m2: f64,
    groundwater_depth_m: Option<f64>,
    household_size: u32,
) -> RecommendationOutcome {
    let target = monsoon_harvest_m3 * demand_fraction(household_size);

    if open_space_m2 < MIN_BUILDABLE_SPACE_M2 {
        return RecommendationOutcome::empty(target, NoStructureReason::SpaceTooLimited);
    }
    if target <= NEGLIGIBLE_TARGET_M3 {
        return RecommendationOutcome::empty(target, NoStructureReason::DemandBelowThreshold);
    }

    let mut structures: StructureList = SmallVec::new();
    let mut remaining = target;

    // RULE 1: Shaft, deep water table only
    if let Some(depth) = groundwater_depth_m {
        if depth > DEEP_WATER_TABLE_M && remaining > SHAFT_MIN_REMAINING_M3 {
            let shaft_depth = (SHAFT_DEPTH_FACTOR * depth).clamp(SHAFT_MIN_DEPTH_M, SHAFT_MAX_DEPTH_M);
            let top_area = PI * (SHAFT_DIAMETER_M / 2.0).powi(2);
            let physical = top_area * shaft_depth;
            let capacity = physical * FILTER_POROSITY * PERCOLATION_FACTOR;
            structures.push(RecommendedStructure {
                dimensions: StructureDimensions::Shaft {
                    top_area_m2: top_area,
                    depth_m: shaft_depth,
                },
                capacity_m3: capacity,
                cost: SHAFT_COST_BASE + SHAFT_COST_PER_METRE * shaft_depth,
                count: 1,
            });
            remaining = (remaining - capacity).max(0.0);
        }
    }

    // RULE 2: Trench, bulk volume when there is room to run one
    if remaining > TRENCH_MIN_REMAINING_M3 && open_space_m2 >= TRENCH_MIN_SPACE_M2 {
        let capacity_per_metre = TRENCH_WIDTH_M * TRENCH_DEPTH_M * FILTER_POROSITY * PERCOLATION_FACTOR;
        let length = (remaining / capacity_per_metre)
            .min(open_space_m2 / TRENCH_WIDTH_M)
            .min(TRENCH_MAX_LENGTH_M);
        if length > TRENCH_MIN_LENGTH_M {
            let capacity = length * capacity_per_metre;
            structures.push(RecommendedStructure {
                dimensions: StructureDimensions::Trench {
                    length_m: length,
                    width_m: TRENCH_WIDTH_M,
                    depth_m: TRENCH_DEPTH_M,
                },
                capacity_m3: capacity,
                cost: TRENCH_COST_BASE + TRENCH_COST_PER_METRE * length,
                count: 1,
            });
            remaining = (remaining - capacity).max(0.0);
        }
    }

    // RULE 3: Pit, the workhorse fallback
    if remaining > PIT_MIN_REMAINING_M3 && open_space_m2 >= PIT_MIN_SPACE_M2 {
        let footprint = (PIT_SPACE_SHARE * open_space_m2)
            .min(PIT_MAX_FOOTPRINT_M2)
            .max(PIT_MIN_FOOTPRINT_M2);
        let physical_per_pit = footprint * PIT_DEPTH_M;
        let capacity_per_pit = physical_per_pit * FILTER_POROSITY * PERCOLATION_FACTOR;
        let count = ((remaining / capacity_per_pit).ceil() as u32).clamp(1, PIT_MAX_COUNT);
        let capacity = capacity_per_pit * count as f64;
        structures.push(RecommendedStructure {
            dimensions: StructureDimensions::Pit {
                footprint_m2: footprint,
                depth_m: PIT_DEPTH_M,
            },
            capacity_m3: capacity,
            cost: (PIT_COST_BASE + PIT_COST_PER_M3 * physical_per_pit) * count as f64,
            count,
        });
    }

    let reason = if structures.is_empty() {
        // Real demand got past both guards yet no rule fired: either the plot
        // is too small for even a pit, or the target sits under every rule's
        // volume floor.
        if open_space_m2 < PIT_MIN_SPACE_M2 {
            Some(NoStructureReason::SpaceTooLimited)
        } else {
            Some(NoStructureReason::DemandBelowThreshold)
        }
    } else {
        None
    };

    RecommendationOutcome {
        structures,
        target_volume_m3: target,
        reason,
    }
}
