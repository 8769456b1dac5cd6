//! Agora - local news browser and voice-guided voting assistant
//!
//! This crate provides two independent interactive flows: browsing local news
//! headlines for a detected or user-provided location, and a spoken bilingual
//! voting dialogue driven by speech synthesis and speech recognition.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (locations, articles, candidates, intents) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (geolocation, news search, TTS, STT, config)
//! - **CLI**: Command-line interface, argument parsing, and interactive runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
