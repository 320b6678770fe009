//! Assessment stages
//!
//! Each stage is a pure function invoked once per assessment, in data-flow
//! order: rainfall → zone → groundwater → harvest → recommendation →
//! cost/benefit → feasibility. The engine threads the outputs; nothing here
//! holds state between calls.

pub mod rainfall;
pub mod zones;
pub mod groundwater;
pub mod harvest;
pub mod recommend;
pub mod cost_benefit;
pub mod feasibility;

// Re-export stage entry points
pub use rainfall::{estimate_rainfall, RainfallEstimate};
pub use zones::{resolve_zone, HydrogeologicalZone, ZONES};
pub use groundwater::{sample_depth, DEEP_WATER_TABLE_M};
pub use harvest::{harvest_volume_m3, SYSTEM_EFFICIENCY};
pub use recommend::{recommend_structures, NoStructureReason, RecommendationOutcome};
pub use cost_benefit::{analyze_cost_benefit, WATER_COST_PER_M3};
pub use feasibility::{score_feasibility, FeasibilityScore};
