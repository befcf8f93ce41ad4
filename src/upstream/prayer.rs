//! AlAdhan prayer-times client.
//!
//! Returns calculated adhan times; masjid iqama times can differ. No date
//! parameter is sent, so the upstream's own notion of "today" (its server
//! clock and the resolved timezone) governs which day is returned.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PrayerTimesApi, UpstreamError};
use crate::models::GeoPoint;

const TIMINGS_URL: &str = "https://api.aladhan.com/v1/timings";

/// The six daily timings exposed by this service, in canonical order.
/// Any other timing fields the upstream includes are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerTimings {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
}

/// Prayer schedule shaped for the API response. Fields the upstream omits
/// serialize as explicit nulls rather than being dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub timings: PrayerTimings,
    /// Hijri calendar date object, passed through verbatim
    pub hijri: Option<Value>,
    /// Gregorian calendar date object, passed through verbatim
    pub gregorian: Option<Value>,
    /// Timezone the upstream resolved for the coordinates
    pub timezone: Option<String>,
    /// Calculation-method metadata, passed through verbatim
    pub method: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct AladhanEnvelope {
    data: AladhanData,
}

#[derive(Debug, Deserialize)]
struct AladhanData {
    timings: PrayerTimings,
    date: AladhanDate,
    meta: AladhanMeta,
}

#[derive(Debug, Deserialize)]
struct AladhanDate {
    hijri: Option<Value>,
    gregorian: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct AladhanMeta {
    timezone: Option<String>,
    method: Option<Value>,
}

/// Reshape a raw AlAdhan payload into a [`PrayerSchedule`].
///
/// A payload whose `code` field is not 200 becomes
/// [`UpstreamError::Rejected`] carrying the raw body; a success payload
/// missing the `data`/`timings`/`date`/`meta` objects is a decode error.
pub fn shape_schedule(raw: Value) -> Result<PrayerSchedule, UpstreamError> {
    if raw.get("code").and_then(Value::as_i64) != Some(200) {
        return Err(UpstreamError::Rejected { raw });
    }

    let envelope: AladhanEnvelope = serde_json::from_value(raw)?;
    let data = envelope.data;

    Ok(PrayerSchedule {
        timings: data.timings,
        hijri: data.date.hijri,
        gregorian: data.date.gregorian,
        timezone: data.meta.timezone,
        method: data.meta.method,
    })
}

/// Live client against the AlAdhan API.
#[derive(Clone)]
pub struct AladhanClient {
    http: reqwest::Client,
    base_url: String,
}

impl AladhanClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: TIMINGS_URL.to_string(),
        }
    }

    /// Override the endpoint URL, for tests against a local server.
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PrayerTimesApi for AladhanClient {
    async fn timings(
        &self,
        observer: GeoPoint,
        method: i64,
        school: i64,
    ) -> Result<PrayerSchedule, UpstreamError> {
        let raw: Value = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", observer.lat.to_string()),
                ("longitude", observer.lng.to_string()),
                ("method", method.to_string()),
                ("school", school.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        shape_schedule(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success_payload() -> Value {
        json!({
            "code": 200,
            "status": "OK",
            "data": {
                "timings": {
                    "Fajr": "05:01",
                    "Sunrise": "06:30",
                    "Dhuhr": "12:15",
                    "Asr": "15:40",
                    "Sunset": "17:59",
                    "Maghrib": "18:00",
                    "Isha": "19:30",
                    "Imsak": "04:51",
                    "Midnight": "00:15"
                },
                "date": {
                    "readable": "01 Jan 2025",
                    "hijri": {"date": "01-07-1446", "month": {"en": "Rajab"}},
                    "gregorian": {"date": "01-01-2025"}
                },
                "meta": {
                    "latitude": 51.5,
                    "longitude": -0.12,
                    "timezone": "Europe/London",
                    "method": {"id": 2, "name": "Islamic Society of North America (ISNA)"}
                }
            }
        })
    }

    #[test]
    fn test_shape_extracts_six_timings_in_order() {
        let schedule = shape_schedule(success_payload()).unwrap();
        let timings = serde_json::to_value(&schedule.timings).unwrap();
        let keys: Vec<&String> = timings.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]
        );
        assert_eq!(schedule.timings.fajr.as_deref(), Some("05:01"));
        assert_eq!(schedule.timings.isha.as_deref(), Some("19:30"));
    }

    #[test]
    fn test_shape_drops_extra_timing_fields() {
        let schedule = shape_schedule(success_payload()).unwrap();
        let timings = serde_json::to_value(&schedule.timings).unwrap();
        assert!(timings.get("Sunset").is_none());
        assert!(timings.get("Imsak").is_none());
        assert!(timings.get("Midnight").is_none());
    }

    #[test]
    fn test_shape_passes_through_metadata() {
        let schedule = shape_schedule(success_payload()).unwrap();
        assert_eq!(schedule.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(schedule.hijri.unwrap()["month"]["en"], "Rajab");
        assert_eq!(schedule.method.unwrap()["id"], 2);
    }

    #[test]
    fn test_shape_missing_timing_becomes_null() {
        let mut payload = success_payload();
        payload["data"]["timings"]
            .as_object_mut()
            .unwrap()
            .remove("Maghrib");
        let schedule = shape_schedule(payload).unwrap();
        assert!(schedule.timings.maghrib.is_none());

        let value = serde_json::to_value(&schedule).unwrap();
        assert!(value["timings"]["Maghrib"].is_null());
    }

    #[test]
    fn test_shape_missing_timezone_serializes_null() {
        let mut payload = success_payload();
        payload["data"]["meta"]
            .as_object_mut()
            .unwrap()
            .remove("timezone");
        let schedule = shape_schedule(payload).unwrap();
        let value = serde_json::to_value(&schedule).unwrap();
        assert!(value["timezone"].is_null());
    }

    #[test]
    fn test_shape_non_success_code_is_rejected() {
        let payload = json!({"code": 400, "status": "Bad Request", "data": "invalid latitude"});
        match shape_schedule(payload.clone()) {
            Err(UpstreamError::Rejected { raw }) => assert_eq!(raw, payload),
            other => panic!("expected Rejected, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_shape_missing_code_is_rejected() {
        let payload = json!({"status": "error"});
        assert!(matches!(
            shape_schedule(payload),
            Err(UpstreamError::Rejected { .. })
        ));
    }

    #[test]
    fn test_shape_success_code_without_data_is_decode_error() {
        let payload = json!({"code": 200, "status": "OK"});
        assert!(matches!(
            shape_schedule(payload),
            Err(UpstreamError::Decode(_))
        ));
    }
}
