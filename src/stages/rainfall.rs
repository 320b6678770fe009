//! STAGE 1: RAINFALL ESTIMATION
//!
//! Derives annual and monsoon rainfall for a latitude by linear interpolation
//! across the supported band, wetter in the south and drier in the north,
//! with bounded jitter to simulate natural year-to-year variability.
//!
//! This is a simulated estimate, not a measured one. Callers must not treat
//! the figures as ground truth; they exist to size structures, not to
//! forecast weather.

use rand::Rng;

/// Southern (wetter) edge of the supported latitude band [°]
pub const LAT_WET_EDGE: f64 = 8.0;

/// Northern (drier) edge of the supported latitude band [°]
pub const LAT_DRY_EDGE: f64 = 37.0;

/// Annual rainfall assigned at the wet edge [mm]
pub const ANNUAL_MAX_MM: f64 = 3000.0;

/// Annual rainfall assigned at the dry edge [mm]
pub const ANNUAL_MIN_MM: f64 = 600.0;

/// Half-width of the uniform jitter band [mm]
pub const JITTER_MM: f64 = 100.0;

/// Share of annual rainfall falling in the monsoon season
pub const MONSOON_FRACTION: f64 = 0.8;

/// Simulated rainfall for one site
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainfallEstimate {
    pub annual_mm: f64,
    pub monsoon_mm: f64,
}

/// Estimate annual and monsoon rainfall for a latitude.
///
/// The normalized position within the band is clamped to [0, 1], so latitudes
/// outside it get the nearest edge value (plus jitter). The jittered annual
/// figure is floored at zero.
pub fn estimate_rainfall(latitude: f64, rng: &mut impl Rng) -> RainfallEstimate {
    let t = ((LAT_DRY_EDGE - latitude) / (LAT_DRY_EDGE - LAT_WET_EDGE)).clamp(0.0, 1.0);
    let base = ANNUAL_MIN_MM + t * (ANNUAL_MAX_MM - ANNUAL_MIN_MM);
    let jitter = rng.gen_range(-JITTER_MM..=JITTER_MM);
    let annual_mm = (base + jitter).max(0.0);

    RainfallEstimate {
        annual_mm,
        monsoon_mm: annual_mm * MONSOON_FRACTION,
    }
}
