//! News search port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::location::Location;
use crate::domain::news::Article;

/// Parameters for one news search request
#[derive(Debug, Clone)]
pub struct NewsQuery {
    pub location: Location,
    pub lang: String,
    pub country: String,
    pub max_results: u32,
}

/// News search errors
#[derive(Debug, Clone, Error)]
pub enum NewsSearchError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("News request failed: {0}")]
    RequestFailed(String),

    #[error("News API error: {0}")]
    ApiError(String),

    #[error("Failed to parse news response: {0}")]
    ParseError(String),
}

/// Port for querying the news-search API
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Run a single search query and return the articles in API order.
    async fn search(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsSearchError>;
}
