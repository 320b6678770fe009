//! Core Types for Site Assessment
//!
//! Input record, result record, and the validation error taxonomy shared by
//! every assessment stage. All output types are serde-serializable so the
//! report layer can consume results as self-describing JSON.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Roof surface material, determining the runoff coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofMaterial {
    Metal,
    Tile,
    Rcc,
    Asphalt,
    Thatch,
}

impl fmt::Display for RoofMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoofMaterial::Metal => "metal",
            RoofMaterial::Tile => "tile",
            RoofMaterial::Rcc => "rcc",
            RoofMaterial::Asphalt => "asphalt",
            RoofMaterial::Thatch => "thatch",
        };
        f.write_str(name)
    }
}

impl FromStr for RoofMaterial {
    type Err = AssessmentError;

    /// Parse a material name as supplied by the form layer.
    ///
    /// Unknown materials are a hard error, never silently defaulted: a wrong
    /// coefficient would skew every downstream volume and cost figure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metal" => Ok(RoofMaterial::Metal),
            "tile" => Ok(RoofMaterial::Tile),
            "rcc" | "concrete" => Ok(RoofMaterial::Rcc),
            "asphalt" => Ok(RoofMaterial::Asphalt),
            "thatch" => Ok(RoofMaterial::Thatch),
            other => Err(AssessmentError::UnknownRoofMaterial {
                got: other.to_string(),
            }),
        }
    }
}

/// Caller-supplied site parameters
///
/// Immutable for the duration of one assessment. `longitude` and
/// `storage_consent` are carried through unchanged for the report layer;
/// current formulas do not consume them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Site latitude in degrees (supported coverage: 0..50)
    pub latitude: f64,
    /// Site longitude in degrees (carried, unused by current formulas)
    pub longitude: f64,
    /// Roof catchment area in m² (must be strictly positive)
    pub roof_area_m2: f64,
    /// Roof surface material
    pub roof_material: RoofMaterial,
    /// Available open ground in m² (must be non-negative)
    pub open_space_m2: f64,
    /// Number of dwellers (must be at least 1)
    pub household_size: u32,
    /// Whether the household consents to on-site storage (carried, unused)
    pub storage_consent: bool,
}

impl AssessmentInput {
    /// Validate numeric ranges before any stage runs.
    ///
    /// Latitude coverage is checked separately by the engine against the zone
    /// table, since the table defines what "covered" means.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        for (field, value) in [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("roof_area_m2", self.roof_area_m2),
            ("open_space_m2", self.open_space_m2),
        ] {
            if !value.is_finite() {
                return Err(AssessmentError::NonFiniteInput { field });
            }
        }
        if self.roof_area_m2 <= 0.0 {
            return Err(AssessmentError::NonPositiveRoofArea {
                got: self.roof_area_m2,
            });
        }
        if self.household_size == 0 {
            return Err(AssessmentError::ZeroHouseholdSize);
        }
        if self.open_space_m2 < 0.0 {
            return Err(AssessmentError::NegativeOpenSpace {
                got: self.open_space_m2,
            });
        }
        Ok(())
    }
}

/// Validation failures for caller-supplied input
///
/// The engine rejects malformed input instead of producing degenerate
/// recommendations; everything past validation is a total function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("roof area must be strictly positive, got {got} m²")]
    NonPositiveRoofArea { got: f64 },

    #[error("household size must be at least 1")]
    ZeroHouseholdSize,

    #[error("open ground space cannot be negative, got {got} m²")]
    NegativeOpenSpace { got: f64 },

    #[error("latitude {got}° is outside the supported zone coverage")]
    LatitudeOutsideCoverage { got: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("unknown roof material '{got}' (expected metal, tile, rcc, asphalt or thatch)")]
    UnknownRoofMaterial { got: String },
}

/// Type-specific dimensions of a recharge structure
///
/// A closed sum type: a trench can never carry a shaft's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructureDimensions {
    Pit { footprint_m2: f64, depth_m: f64 },
    Trench { length_m: f64, width_m: f64, depth_m: f64 },
    Shaft { top_area_m2: f64, depth_m: f64 },
}

impl StructureDimensions {
    /// Human-readable structure kind
    pub fn kind(&self) -> &'static str {
        match self {
            StructureDimensions::Pit { .. } => "recharge pit",
            StructureDimensions::Trench { .. } => "recharge trench",
            StructureDimensions::Shaft { .. } => "recharge shaft",
        }
    }
}

/// One recommended structure group (dimensions + capacity/cost envelope)
///
/// `capacity_m3` and `cost` cover the whole group of `count` identical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedStructure {
    #[serde(flatten)]
    pub dimensions: StructureDimensions,
    /// Seasonal recharge capacity of the group in m³
    pub capacity_m3: f64,
    /// Estimated construction cost of the group in currency units
    pub cost: f64,
    /// Number of identical units (>= 1)
    pub count: u32,
}

/// At most one entry per structure kind, so three is the hard ceiling.
pub type StructureList = SmallVec<[RecommendedStructure; 3]>;

/// Payback summary for the recommended structures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBenefit {
    /// Annual water-cost savings in currency units
    pub annual_savings: f64,
    /// Years for savings to repay construction cost; None when savings is zero
    pub payback_years: Option<f64>,
}

/// Three-tier site suitability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeasibilityTier {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for FeasibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeasibilityTier::Green => "Green",
            FeasibilityTier::Yellow => "Yellow",
            FeasibilityTier::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Complete assessment output
///
/// Built fresh per invocation; nothing here persists or mutates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Simulated annual rainfall in mm
    pub annual_rainfall_mm: f64,
    /// Simulated monsoon-season rainfall in mm
    pub monsoon_rainfall_mm: f64,
    /// Runoff coefficient applied (from the material table)
    pub runoff_coefficient: f64,
    /// Harvestable volume over a full year in m³
    pub annual_harvest_m3: f64,
    /// Harvestable volume over the monsoon season in m³
    pub monsoon_harvest_m3: f64,
    /// Recommended recharge structures (possibly empty)
    pub structures: StructureList,
    /// Sampled depth to groundwater in m
    pub groundwater_depth_m: Option<f64>,
    /// Aquifer description plus, when no structure is recommended, why not
    pub aquifer_note: String,
    /// Site suitability tier
    pub feasibility: FeasibilityTier,
    /// Numeric feasibility score behind the tier
    pub feasibility_score: f64,
    /// Total construction cost across all recommended structures
    pub total_structure_cost: f64,
    /// Savings and payback summary
    pub cost_benefit: CostBenefit,
    /// Zone name with coordinates, for report headers
    pub location_label: String,
    /// System efficiency factor applied to harvest volumes
    pub system_efficiency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_parsing_rejects_unknown() {
        assert_eq!("Metal".parse::<RoofMaterial>().unwrap(), RoofMaterial::Metal);
        assert_eq!(" tile ".parse::<RoofMaterial>().unwrap(), RoofMaterial::Tile);
        assert_eq!("concrete".parse::<RoofMaterial>().unwrap(), RoofMaterial::Rcc);

        let err = "plastic".parse::<RoofMaterial>().unwrap_err();
        assert!(matches!(err, AssessmentError::UnknownRoofMaterial { .. }));
    }

    #[test]
    fn material_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&RoofMaterial::Rcc).unwrap();
        assert_eq!(json, "\"rcc\"");
        assert!(serde_json::from_str::<RoofMaterial>("\"shingle\"").is_err());
    }

    #[test]
    fn validation_rejects_degenerate_input() {
        let mut input = AssessmentInput {
            latitude: 13.0,
            longitude: 77.6,
            roof_area_m2: 100.0,
            roof_material: RoofMaterial::Rcc,
            open_space_m2: 50.0,
            household_size: 4,
            storage_consent: true,
        };
        assert!(input.validate().is_ok());

        input.roof_area_m2 = 0.0;
        assert!(matches!(
            input.validate(),
            Err(AssessmentError::NonPositiveRoofArea { .. })
        ));

        input.roof_area_m2 = 100.0;
        input.household_size = 0;
        assert!(matches!(
            input.validate(),
            Err(AssessmentError::ZeroHouseholdSize)
        ));

        input.household_size = 4;
        input.open_space_m2 = -1.0;
        assert!(matches!(
            input.validate(),
            Err(AssessmentError::NegativeOpenSpace { .. })
        ));

        input.open_space_m2 = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(AssessmentError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn structure_json_is_tagged_by_kind() {
        let structure = RecommendedStructure {
            dimensions: StructureDimensions::Trench {
                length_m: 12.0,
                width_m: 1.0,
                depth_m: 1.5,
            },
            capacity_m3: 36.0,
            cost: 28_000.0,
            count: 1,
        };
        let json = serde_json::to_value(&structure).unwrap();
        assert_eq!(json["type"], "trench");
        assert_eq!(json["length_m"], 12.0);
        assert_eq!(json["count"], 1);
    }
}
