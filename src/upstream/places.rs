//! Google Places nearby-search client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{PlacesApi, UpstreamError};
use crate::models::GeoPoint;

const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Nearest-mosque result shaped for the API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mosque {
    /// Display name (null when the upstream omits it)
    pub name: Option<String>,
    /// Opaque Google place identifier
    pub place_id: Option<String>,
    /// Human-readable address
    pub address: String,
    /// Resolved latitude
    pub lat: f64,
    /// Resolved longitude
    pub lng: f64,
    /// Deep link to Google Maps turn-by-turn directions
    pub maps_directions_url: String,
}

/// Raw nearby-search response, narrowed to the fields this service reads.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceEntry {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Take strictly the first entry of the result list. The upstream already
/// ranks by distance; no local re-sorting or distance verification.
pub fn first_mosque(response: NearbySearchResponse) -> Option<Mosque> {
    let entry = response.results.into_iter().next()?;
    let location = entry.geometry.location;

    let address = entry
        .vicinity
        .or(entry.formatted_address)
        .unwrap_or_default();
    let maps_directions_url = format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        location.lat, location.lng
    );

    Some(Mosque {
        name: entry.name,
        place_id: entry.place_id,
        address,
        lat: location.lat,
        lng: location.lng,
        maps_directions_url,
    })
}

/// Live client against the Google Places API.
#[derive(Clone)]
pub struct GooglePlacesClient {
    http: reqwest::Client,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: NEARBY_SEARCH_URL.to_string(),
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
impl PlacesApi for GooglePlacesClient {
    async fn nearest_mosque(
        &self,
        api_key: &str,
        observer: GeoPoint,
    ) -> Result<Option<Mosque>, UpstreamError> {
        let location = format!("{},{}", observer.lat, observer.lng);
        let response: NearbySearchResponse = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", api_key),
                ("location", location.as_str()),
                ("rankby", "distance"),
                ("type", "mosque"),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(first_mosque(response))
    }
}
