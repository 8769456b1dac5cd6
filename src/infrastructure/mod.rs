//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the geolocation, news-search, speech-synthesis,
//! and speech-recognition services.

pub mod config;
pub mod geolocation;
pub mod news;
pub mod speech;

// Re-export adapters
pub use config::XdgConfigStore;
pub use geolocation::IpinfoGeolocator;
pub use news::GnewsClient;
pub use speech::{CpalMicrophone, GoogleSpeechListener, TranslateTtsSpeaker};
