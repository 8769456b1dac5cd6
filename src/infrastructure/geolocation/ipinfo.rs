//! ipinfo.io geolocation adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{GeolocationError, Geolocator};
use crate::domain::location::GeoPoint;

/// Geolocation API base URL
const API_BASE_URL: &str = "https://ipinfo.io";

/// Lookup timeout; detection is best-effort and must fail fast
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct LookupResponse {
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

/// IP-based geolocation via the ipinfo JSON endpoint
pub struct IpinfoGeolocator {
    base_url: String,
    client: reqwest::Client,
}

impl IpinfoGeolocator {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create with a custom base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn lookup_url(&self) -> String {
        format!("{}/json", self.base_url)
    }
}

impl Default for IpinfoGeolocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geolocator for IpinfoGeolocator {
    async fn locate(&self) -> Result<GeoPoint, GeolocationError> {
        let response = self
            .client
            .get(self.lookup_url())
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeolocationError::ApiError(format!("HTTP {}", status)));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::ParseError(e.to_string()))?;

        Ok(GeoPoint {
            city: body.city,
            region: body.region,
            country: body.country,
        })
    }
}
