//! Rooftop Rainwater-Harvesting Assessment Engine
//!
//! Turns a small set of site parameters (location, roof geometry and
//! material, open ground, household size) into a harvest estimate, a
//! hydrogeological description, sized and costed recharge-structure
//! recommendations, a feasibility tier and a payback summary.
//!
//! Module layout:
//! - `types`: input/output records and the validation error taxonomy
//! - `stages/`: the seven pure assessment stages
//! - `engine`: the orchestrator, sequential and parallel (Rayon) batch
//!
//! Rainfall and groundwater depth are simulated with an injectable random
//! source; seed the engine for deterministic replays.

pub mod types;
pub mod stages;
pub mod engine;

// Re-export commonly used types
pub use types::{
    AssessmentError, AssessmentInput, AssessmentResult, CostBenefit, FeasibilityTier,
    RecommendedStructure, RoofMaterial, StructureDimensions, StructureList,
};
pub use engine::{assess_with_rng, AssessmentEngine};
pub use stages::{NoStructureReason, RecommendationOutcome};
