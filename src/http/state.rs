//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::upstream::{PlacesApi, PrayerTimesApi};

/// Shared application state passed to all handlers.
///
/// Everything here is immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration (credentials, bind address)
    pub config: Arc<AppConfig>,
    /// Places-search upstream client
    pub places: Arc<dyn PlacesApi>,
    /// Prayer-times upstream client
    pub prayer_times: Arc<dyn PrayerTimesApi>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        places: Arc<dyn PlacesApi>,
        prayer_times: Arc<dyn PrayerTimesApi>,
    ) -> Self {
        Self {
            config,
            places,
            prayer_times,
        }
    }
}
