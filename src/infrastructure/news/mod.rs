//! News-search adapters

pub mod gnews;

pub use gnews::GnewsClient;
