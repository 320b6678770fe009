//! STAGE 2: HYDROGEOLOGICAL ZONE RESOLUTION
//!
//! Maps a latitude to a zone record from a static reference table. Resolution
//! is "first defined wins": two rows deliberately overlap (the Indo-Gangetic
//! Plain and the Himalayan Foothills share 28..30°), and table order is the
//! documented tie-break, so row order here is load-bearing.

/// One row of the hydrogeological reference table
#[derive(Debug, PartialEq)]
pub struct HydrogeologicalZone {
    pub name: &'static str,
    /// Half-open latitude range [low, high) in degrees
    pub lat_range: (f64, f64),
    /// Depth-to-groundwater range (min, max) in metres
    pub depth_to_water_m: (f64, f64),
    /// Aquifer-type description
    pub aquifer: &'static str,
    /// Recharge-suitability note
    pub recharge_note: &'static str,
}

/// Static zone table: five named zones plus a fallback covering [0, 50).
///
/// Ranges are matched top to bottom; keep the fallback last.
pub const ZONES: [HydrogeologicalZone; 6] = [
    HydrogeologicalZone {
        name: "Southern Peninsular",
        lat_range: (8.0, 13.0),
        depth_to_water_m: (5.0, 15.0),
        aquifer: "Weathered crystalline basement (gneiss and charnockite)",
        recharge_note: "Moderate intake through fracture networks; pits and trenches work well in the weathered mantle.",
    },
    HydrogeologicalZone {
        name: "Deccan Plateau",
        lat_range: (13.0, 18.0),
        depth_to_water_m: (8.0, 20.0),
        aquifer: "Fractured basalt traps with perched water bodies",
        recharge_note: "Intake depends on fracture connectivity; shafts reach the deeper saturated fractures.",
    },
    HydrogeologicalZone {
        name: "Central Highlands",
        lat_range: (18.0, 24.0),
        depth_to_water_m: (10.0, 25.0),
        aquifer: "Mixed sandstone and hard-rock aquifers",
        recharge_note: "Deep water table favours recharge shafts over shallow pits.",
    },
    HydrogeologicalZone {
        name: "Indo-Gangetic Plain",
        lat_range: (24.0, 30.0),
        depth_to_water_m: (3.0, 10.0),
        aquifer: "Thick unconsolidated alluvium with high storativity",
        recharge_note: "Excellent shallow intake; even small pits infiltrate quickly.",
    },
    HydrogeologicalZone {
        name: "Himalayan Foothills",
        lat_range: (28.0, 37.0),
        depth_to_water_m: (2.0, 8.0),
        aquifer: "Boulder and gravel fans over fractured bedrock",
        recharge_note: "Steep gradients; contour trenches slow runoff long enough to sink it.",
    },
    HydrogeologicalZone {
        name: "Unclassified",
        lat_range: (0.0, 50.0),
        depth_to_water_m: (5.0, 12.0),
        aquifer: "Unmapped mixed aquifer conditions",
        recharge_note: "Site survey advised before fixing structure dimensions.",
    },
];

/// Resolve a latitude to the first matching zone row.
///
/// Returns None only when the latitude falls outside every row including the
/// fallback, which the engine reports as a validation error.
pub fn resolve_zone(latitude: f64) -> Option<&'static HydrogeologicalZone> {
    ZONES
        .iter()
        .find(|zone| latitude >= zone.lat_range.0 && latitude < zone.lat_range.1)
}
