//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod news_browser;
pub mod ports;
pub mod voting;

// Re-export use cases
pub use news_browser::{BrowseOutcome, BrowserSession, NewsBrowser};
pub use voting::{VoteOutcome, VotingFlow, LISTEN_ATTEMPTS};
