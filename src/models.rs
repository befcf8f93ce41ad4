//! Shared geographic value types.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, expected in [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, expected in [-180, 180]
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
