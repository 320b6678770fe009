//! STAGE 6: COST/BENEFIT ANALYSIS
//!
//! Converts total structure cost and annual harvest into annual savings and
//! a payback period. Payback is undefined (None), never an error, when there
//! are no savings to divide by.

use crate::types::CostBenefit;

/// Municipal water cost offset per harvested m³ [currency units]
pub const WATER_COST_PER_M3: f64 = 20.0;

/// Round to one decimal place, as reported payback figures are.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute annual savings and payback for the recommended structures.
pub fn analyze_cost_benefit(total_cost: f64, annual_harvest_m3: f64) -> CostBenefit {
    let annual_savings = annual_harvest_m3 * WATER_COST_PER_M3;
    let payback_years = if annual_savings > 0.0 {
        Some(round1(total_cost / annual_savings))
    } else {
        None
    };

    CostBenefit {
        annual_savings,
        payback_years,
    }
}
