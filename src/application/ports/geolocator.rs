//! Geolocation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::location::GeoPoint;

/// Geolocation errors
#[derive(Debug, Clone, Error)]
pub enum GeolocationError {
    #[error("Geolocation request failed: {0}")]
    RequestFailed(String),

    #[error("Geolocation API error: {0}")]
    ApiError(String),

    #[error("Failed to parse geolocation response: {0}")]
    ParseError(String),
}

/// Port for IP-based location detection
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Look up the caller's approximate location.
    async fn locate(&self) -> Result<GeoPoint, GeolocationError>;
}
