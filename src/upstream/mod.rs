//! HTTP clients for the two third-party upstream services.
//!
//! Both clients share one [`reqwest::Client`] with a fixed total timeout.
//! Transport-level failures (connect, timeout, malformed JSON) are never
//! retried; they propagate to the handler layer as [`UpstreamError`] and
//! surface as a generic server fault.
//!
//! The clients are consumed through the [`PlacesApi`] and [`PrayerTimesApi`]
//! traits so handlers can be exercised against in-process fakes.

pub mod places;
pub mod prayer;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::GeoPoint;

pub use places::{GooglePlacesClient, Mosque};
pub use prayer::{AladhanClient, PrayerSchedule, PrayerTimings};

/// Total per-request timeout for both upstreams.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the shared outbound HTTP client.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
}

/// Errors raised while talking to an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure, timeout, or non-JSON response body.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream answered with JSON that does not match its documented shape.
    #[error("unexpected upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The prayer-times upstream reported a non-success status code in its
    /// payload. Carries the raw body for diagnostics.
    #[error("upstream reported failure")]
    Rejected { raw: Value },
}

/// Places-search upstream: nearest mosque by distance ranking.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Look up the mosque nearest to `observer`. Returns `None` when the
    /// upstream result list is empty.
    async fn nearest_mosque(
        &self,
        api_key: &str,
        observer: GeoPoint,
    ) -> Result<Option<Mosque>, UpstreamError>;
}

/// Prayer-times upstream: calculated adhan times for the current date.
#[async_trait]
pub trait PrayerTimesApi: Send + Sync {
    /// Fetch today's prayer schedule for `observer` using the given
    /// calculation `method` and jurisprudence `school` codes. The codes are
    /// opaque to this service and forwarded verbatim.
    async fn timings(
        &self,
        observer: GeoPoint,
        method: i64,
        school: i64,
    ) -> Result<PrayerSchedule, UpstreamError>;
}
