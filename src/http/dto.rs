//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters are accepted as raw strings and parsed leniently: a
//! value that does not parse as a number is treated the same as an absent
//! one, so malformed input always gets the structured 400 body instead of
//! a framework-level rejection.

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

// Response shapes for the proxy endpoints live with their clients.
pub use crate::upstream::{Mosque, PrayerSchedule, PrayerTimings};

fn parse_f64(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()?.parse().ok()
}

fn parse_i64(raw: &Option<String>) -> Option<i64> {
    raw.as_deref()?.parse().ok()
}

/// Query parameters carrying observer coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoordsQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}

impl CoordsQuery {
    /// Resolve the observer point, or `None` when either coordinate is
    /// absent or unparsable. A coordinate of exactly 0.0 is treated as
    /// absent too, so requests from the equator or prime meridian are
    /// rejected; this is the service's published validation contract.
    pub fn observer(&self) -> Option<GeoPoint> {
        match (parse_f64(&self.lat), parse_f64(&self.lng)) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => {
                Some(GeoPoint::new(lat, lng))
            }
            _ => None,
        }
    }
}

/// Query parameters for the prayer-times endpoint.
///
/// The `method` and `school` codes are opaque integers forwarded verbatim
/// to the upstream service; unparsable values fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrayerTimesQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    /// Calculation method code (default 2 = ISNA)
    #[serde(default)]
    pub method: Option<String>,
    /// Jurisprudence school code (default 0 = Shafi, 1 = Hanafi)
    #[serde(default)]
    pub school: Option<String>,
}

impl PrayerTimesQuery {
    pub fn coords(&self) -> CoordsQuery {
        CoordsQuery {
            lat: self.lat.clone(),
            lng: self.lng.clone(),
        }
    }

    pub fn method_code(&self) -> Option<i64> {
        parse_i64(&self.method)
    }

    pub fn school_code(&self) -> Option<i64> {
        parse_i64(&self.school)
    }
}

/// Qibla bearing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QiblaResponse {
    /// Compass bearing toward the Kaaba, degrees clockwise from north
    pub bearing_deg: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: Option<&str>, lng: Option<&str>) -> CoordsQuery {
        CoordsQuery {
            lat: lat.map(str::to_string),
            lng: lng.map(str::to_string),
        }
    }

    #[test]
    fn test_observer_present() {
        let p = coords(Some("51.5"), Some("-0.12")).observer().unwrap();
        assert_eq!(p.lat, 51.5);
        assert_eq!(p.lng, -0.12);
    }

    #[test]
    fn test_observer_missing_lng() {
        assert!(coords(Some("51.5"), None).observer().is_none());
    }

    #[test]
    fn test_observer_non_numeric_treated_as_absent() {
        assert!(coords(Some("abc"), Some("1.0")).observer().is_none());
        assert!(coords(Some("1.0"), Some("12,5")).observer().is_none());
    }

    #[test]
    fn test_observer_zero_latitude_rejected() {
        // Equatorial coordinates are indistinguishable from absent input.
        assert!(coords(Some("0"), Some("39.8")).observer().is_none());
    }

    #[test]
    fn test_observer_zero_longitude_rejected() {
        assert!(coords(Some("21.4"), Some("0.0")).observer().is_none());
    }

    #[test]
    fn test_method_code_forwarded_verbatim() {
        let q = PrayerTimesQuery {
            method: Some("-1".to_string()),
            school: Some("99".to_string()),
            ..Default::default()
        };
        assert_eq!(q.method_code(), Some(-1));
        assert_eq!(q.school_code(), Some(99));
    }

    #[test]
    fn test_method_code_unparsable_is_absent() {
        let q = PrayerTimesQuery {
            method: Some("isna".to_string()),
            ..Default::default()
        };
        assert!(q.method_code().is_none());
        assert!(q.school_code().is_none());
    }
}
