//! Speech adapters: synthesis playback and microphone recognition

pub mod flac;
pub mod google_stt;
pub mod gtts;
pub mod microphone;

pub use google_stt::GoogleSpeechListener;
pub use gtts::TranslateTtsSpeaker;
pub use microphone::CpalMicrophone;
