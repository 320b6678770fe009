//! Engine Integration Tests
//!
//! End-to-end scenarios against a seeded engine, covering the documented
//! site archetypes: a well-suited Deccan plot, a plot with no room to build,
//! and malformed input.

use approx::assert_relative_eq;
use rtrwh_assessor::{
    AssessmentEngine, AssessmentError, AssessmentInput, RoofMaterial, StructureDimensions,
};

fn deccan_input() -> AssessmentInput {
    AssessmentInput {
        latitude: 13.0,
        longitude: 77.6,
        roof_area_m2: 100.0,
        roof_material: RoofMaterial::Rcc,
        open_space_m2: 50.0,
        household_size: 4,
        storage_consent: true,
    }
}

#[test]
fn deccan_scenario_recommends_at_least_a_pit() {
    for seed in 0..25 {
        let result = AssessmentEngine::with_seed(seed).assess(&deccan_input()).unwrap();

        assert_relative_eq!(result.runoff_coefficient, 0.90);
        assert!(result.location_label.starts_with("Deccan Plateau"));

        assert!(!result.structures.is_empty());
        let pit = result
            .structures
            .iter()
            .find(|s| matches!(s.dimensions, StructureDimensions::Pit { .. }))
            .expect("a pit should always fit this plot");
        assert!(pit.capacity_m3 > 0.0);
        assert!(pit.cost > 0.0);
        assert!(pit.count >= 1);

        for structure in &result.structures {
            assert!(structure.capacity_m3 > 0.0);
            assert!(structure.cost > 0.0);
            assert!(structure.count >= 1);
        }
    }
}

#[test]
fn feasibility_matches_the_published_formula() {
    let input = deccan_input();
    let result = AssessmentEngine::with_seed(3).assess(&input).unwrap();

    let expected = (input.roof_area_m2 / 200.0) * 30.0
        + (result.annual_rainfall_mm / 1200.0) * 30.0
        + 25.0
        + (input.open_space_m2 / 50.0) * 15.0;
    assert_relative_eq!(result.feasibility_score, expected, epsilon = 1e-9);
}

#[test]
fn payback_agrees_with_cost_over_savings() {
    let result = AssessmentEngine::with_seed(5).assess(&deccan_input()).unwrap();

    assert!(result.cost_benefit.annual_savings > 0.0);
    assert_relative_eq!(
        result.cost_benefit.annual_savings,
        result.annual_harvest_m3 * 20.0,
        epsilon = 1e-9
    );
    let expected =
        (result.total_structure_cost / result.cost_benefit.annual_savings * 10.0).round() / 10.0;
    assert_relative_eq!(result.cost_benefit.payback_years.unwrap(), expected);
}

#[test]
fn cramped_plot_gets_an_explanation_not_a_shrug() {
    let mut input = deccan_input();
    input.open_space_m2 = 1.0;

    let result = AssessmentEngine::with_seed(2).assess(&input).unwrap();
    assert!(result.structures.is_empty());
    assert!(result.aquifer_note.contains("open ground is too limited"));
    // The plot has plenty of water; the note must not blame the harvest
    assert!(!result.aquifer_note.contains("harvestable volume is below"));
    assert!(result.monsoon_harvest_m3 > 0.0);
}

#[test]
fn malformed_input_is_rejected_not_scored() {
    let mut engine = AssessmentEngine::with_seed(1);

    let mut zero_roof = deccan_input();
    zero_roof.roof_area_m2 = 0.0;
    assert!(matches!(
        engine.assess(&zero_roof),
        Err(AssessmentError::NonPositiveRoofArea { .. })
    ));

    let mut off_map = deccan_input();
    off_map.latitude = -12.0;
    assert!(matches!(
        engine.assess(&off_map),
        Err(AssessmentError::LatitudeOutsideCoverage { .. })
    ));
}

#[test]
fn harvest_ordering_holds_across_materials() {
    for material in [
        RoofMaterial::Metal,
        RoofMaterial::Tile,
        RoofMaterial::Rcc,
        RoofMaterial::Asphalt,
        RoofMaterial::Thatch,
    ] {
        let mut input = deccan_input();
        input.roof_material = material;
        let result = AssessmentEngine::with_seed(11).assess(&input).unwrap();
        assert_relative_eq!(result.runoff_coefficient, material.runoff_coefficient());
        assert!(result.annual_harvest_m3 >= result.monsoon_harvest_m3);
        assert!(result.monsoon_harvest_m3 >= 0.0);
    }
}

#[test]
fn result_json_carries_tagged_structures() {
    let result = AssessmentEngine::with_seed(13).assess(&deccan_input()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let structures = json["structures"].as_array().unwrap();
    assert!(!structures.is_empty());
    for structure in structures {
        let kind = structure["type"].as_str().unwrap();
        assert!(matches!(kind, "pit" | "trench" | "shaft"));
        assert!(structure["count"].as_u64().unwrap() >= 1);
    }
}
