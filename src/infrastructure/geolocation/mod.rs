//! Geolocation adapters

pub mod ipinfo;

pub use ipinfo::IpinfoGeolocator;
