//! Assessment Engine - Main coordinator for site assessment
//!
//! Runs the stage pipeline in data-flow order and assembles the final result
//! record. The engine is stateless between invocations apart from its random
//! source, which is injectable so deterministic replays are possible; see
//! [`AssessmentEngine::with_seed`] and [`assess_with_rng`].
//!
//! Includes both a sequential entry point and a parallel (Rayon) batch
//! variant for scoring many independent sites.

use crate::stages::{
    analyze_cost_benefit, estimate_rainfall, harvest_volume_m3, recommend_structures,
    resolve_zone, sample_depth, score_feasibility, HydrogeologicalZone, NoStructureReason,
    RecommendationOutcome, SYSTEM_EFFICIENCY,
};
use crate::types::{AssessmentError, AssessmentInput, AssessmentResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

/// Main assessment engine
///
/// Owns the random source used by the rainfall and groundwater stages.
/// Construct with [`new`](Self::new) for production entropy or
/// [`with_seed`](Self::with_seed) for reproducible reports.
pub struct AssessmentEngine {
    rng: StdRng,
    batch_seed: u64,
}

impl AssessmentEngine {
    /// Engine seeded from system entropy.
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let batch_seed = rng.gen();
        Self { rng, batch_seed }
    }

    /// Engine with a fixed seed: identical inputs produce identical results.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            batch_seed: seed,
        }
    }

    /// Assess one site.
    ///
    /// Fails only on malformed caller input; otherwise always returns a
    /// populated result, possibly with an empty structure list.
    pub fn assess(&mut self, input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
        assess_with_rng(input, &mut self.rng)
    }

    /// Assess many independent sites in parallel.
    ///
    /// Each site gets its own RNG derived from the engine seed and its index,
    /// so results are reproducible and independent of worker scheduling.
    pub fn assess_batch(
        &self,
        inputs: &[AssessmentInput],
    ) -> Vec<Result<AssessmentResult, AssessmentError>> {
        inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| {
                let mut rng = StdRng::seed_from_u64(self.batch_seed.wrapping_add(index as u64));
                assess_with_rng(input, &mut rng)
            })
            .collect()
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full pipeline with a caller-supplied random source.
pub fn assess_with_rng(
    input: &AssessmentInput,
    rng: &mut impl Rng,
) -> Result<AssessmentResult, AssessmentError> {
    input.validate()?;

    let zone = resolve_zone(input.latitude).ok_or(AssessmentError::LatitudeOutsideCoverage {
        got: input.latitude,
    })?;
    debug!(zone = zone.name, latitude = input.latitude, "zone resolved");

    let rainfall = estimate_rainfall(input.latitude, rng);
    debug!(annual_mm = rainfall.annual_mm, "rainfall estimated");

    let groundwater_depth_m = sample_depth(zone, rng);

    let runoff_coefficient = input.roof_material.runoff_coefficient();
    let annual_harvest_m3 =
        harvest_volume_m3(rainfall.annual_mm, input.roof_area_m2, runoff_coefficient);
    let monsoon_harvest_m3 =
        harvest_volume_m3(rainfall.monsoon_mm, input.roof_area_m2, runoff_coefficient);

    let outcome = recommend_structures(
        monsoon_harvest_m3,
        input.open_space_m2,
        Some(groundwater_depth_m),
        input.household_size,
    );
    let total_structure_cost = outcome.total_cost();

    let cost_benefit = analyze_cost_benefit(total_structure_cost, annual_harvest_m3);
    let feasibility = score_feasibility(input.roof_area_m2, rainfall.annual_mm, input.open_space_m2);

    info!(
        zone = zone.name,
        tier = %feasibility.tier,
        structures = outcome.structures.len(),
        "site assessed"
    );

    Ok(AssessmentResult {
        annual_rainfall_mm: rainfall.annual_mm,
        monsoon_rainfall_mm: rainfall.monsoon_mm,
        runoff_coefficient,
        annual_harvest_m3,
        monsoon_harvest_m3,
        aquifer_note: compose_aquifer_note(zone, &outcome),
        structures: outcome.structures,
        groundwater_depth_m: Some(groundwater_depth_m),
        feasibility: feasibility.tier,
        feasibility_score: feasibility.score,
        total_structure_cost,
        cost_benefit,
        location_label: format!(
            "{} ({:.2}°N, {:.2}°E)",
            zone.name, input.latitude, input.longitude
        ),
        system_efficiency: SYSTEM_EFFICIENCY,
    })
}

/// Zone description plus, for empty recommendations, the constraint that
/// emptied them. Distinguishes "nothing needed" from "no room to build".
fn compose_aquifer_note(zone: &HydrogeologicalZone, outcome: &RecommendationOutcome) -> String {
    let mut note = format!("{}. {}", zone.aquifer, zone.recharge_note);
    match outcome.reason {
        Some(NoStructureReason::SpaceTooLimited) => {
            note.push_str(
                " No structure recommended: open ground is too limited to site a recharge \
                 structure despite the available harvest.",
            );
        }
        Some(NoStructureReason::DemandBelowThreshold) => {
            note.push_str(
                " No structure recommended: the harvestable volume is below the point where \
                 a dedicated recharge structure pays off.",
            );
        }
        None => {}
    }
    note
}
