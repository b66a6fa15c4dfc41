//! Antipodal coordinate math.
//!
//! The transform is closed-form and has no failure modes: latitude is
//! negated, longitude is shifted by 180° and re-wrapped into [-180, 180].
//! Inputs are not validated; out-of-range values pass through the same
//! arithmetic unchanged.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The point diametrically opposite this one.
    pub fn antipode(&self) -> Coordinate {
        let (lat, lon) = antipode(self.lat, self.lon);
        Coordinate { lat, lon }
    }
}

/// Compute the antipodal point for the given latitude and longitude.
///
/// The longitude branch sends `lon <= 0` through `+180`, so a longitude of
/// exactly 0 yields 180 rather than -180. Both denote the same meridian;
/// downstream consumers rely on the positive value.
pub fn antipode(lat: f64, lon: f64) -> (f64, f64) {
    let antipode_lat = -lat;
    let antipode_lon = if lon <= 0.0 { lon + 180.0 } else { lon - 180.0 };
    (antipode_lat, antipode_lon)
}
