//! Qibla bearing calculation.
//!
//! Computes the initial great-circle bearing (forward azimuth) from an
//! observer to the Kaaba on a spherical Earth model. This is the standard
//! closed-form azimuth formula; no upstream call is involved.

use crate::models::GeoPoint;

/// Coordinates of the Kaaba in Mecca.
pub const KAABA: GeoPoint = GeoPoint::new(21.422487, 39.826206);

/// Initial great-circle bearing from `observer` toward the Kaaba, in
/// compass degrees clockwise from north.
///
/// Always returns a value in `[0, 360)`. Deterministic for identical input.
/// When the observer sits exactly at the Kaaba the azimuth is undefined;
/// `atan2(0, 0)` yields 0.0 and callers treat that as a valid result.
pub fn bearing_to_kaaba(observer: GeoPoint) -> f64 {
    let phi1 = observer.lat.to_radians();
    let phi2 = KAABA.lat.to_radians();
    let d_lambda = (KAABA.lng - observer.lng).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
