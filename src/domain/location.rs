//! Location value objects

use std::fmt;

/// A free-text locality, as typed by the user or composed from geolocation.
/// Guaranteed non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Create a location from free text. Returns `None` for blank input.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the location text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw geolocation lookup result. Every field is optional because the
/// upstream endpoint omits fields it cannot resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoPoint {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl GeoPoint {
    /// Compose a "city, region, country" location string.
    ///
    /// A point without a city is unusable and yields `None`; region and
    /// country are appended only when present.
    pub fn compose(&self) -> Option<Location> {
        let city = self.city.as_deref()?.trim();
        if city.is_empty() {
            return None;
        }

        let mut parts = vec![city];
        if let Some(region) = self.region.as_deref() {
            if !region.trim().is_empty() {
                parts.push(region.trim());
            }
        }
        if let Some(country) = self.country.as_deref() {
            if !country.trim().is_empty() {
                parts.push(country.trim());
            }
        }

        Location::new(&parts.join(", "))
    }
}
