//! STAGE 4: HARVEST VOLUME CALCULATION
//!
//! Converts rainfall depth on a roof into collectible volume:
//! (rainfall / 1000) × area × runoff coefficient × system efficiency.
//! Applied once with annual rainfall and once with monsoon rainfall.

use crate::types::RoofMaterial;

/// Fraction of runoff surviving first-flush diversion, evaporation and
/// filter losses.
pub const SYSTEM_EFFICIENCY: f64 = 0.90;

impl RoofMaterial {
    /// Material-specific runoff coefficient.
    ///
    /// Smooth impervious surfaces shed nearly everything; thatch absorbs a
    /// large share before any runoff forms.
    pub fn runoff_coefficient(self) -> f64 {
        match self {
            RoofMaterial::Metal => 0.95,
            RoofMaterial::Tile => 0.90,
            RoofMaterial::Rcc => 0.90,
            RoofMaterial::Asphalt => 0.85,
            RoofMaterial::Thatch => 0.60,
        }
    }
}

/// Harvestable volume in m³ for one rainfall depth.
pub fn harvest_volume_m3(rainfall_mm: f64, roof_area_m2: f64, runoff_coefficient: f64) -> f64 {
    (rainfall_mm / 1000.0) * roof_area_m2 * runoff_coefficient * SYSTEM_EFFICIENCY
}
