//! News browsing use case

use crate::domain::location::Location;
use crate::domain::news::{Article, BrowseCommand};

use super::ports::{Geolocator, NewsQuery, NewsSearch};

/// News flow over the geolocation and news-search ports.
///
/// Every failure degrades to a safe default: detection failures fall back to
/// manual entry, search failures produce an empty article list. Neither
/// method propagates an error.
pub struct NewsBrowser<G, N>
where
    G: Geolocator,
    N: NewsSearch,
{
    geolocator: G,
    news: N,
}

impl<G, N> NewsBrowser<G, N>
where
    G: Geolocator,
    N: NewsSearch,
{
    pub fn new(geolocator: G, news: N) -> Self {
        Self { geolocator, news }
    }

    /// Attempt automatic location detection.
    ///
    /// Returns `None` on any failure or when the lookup has no usable city,
    /// so the caller falls back to prompting the user.
    pub async fn detect_location(&self) -> Option<Location> {
        match self.geolocator.locate().await {
            Ok(point) => point.compose(),
            Err(e) => {
                eprintln!("Warning: location auto-detection failed: {}", e);
                None
            }
        }
    }

    /// Run one search query.
    ///
    /// Any failure is reported to the console and collapses to an empty
    /// sequence; a refresh is always user-initiated, never retried here.
    pub async fn fetch(&self, query: &NewsQuery) -> Vec<Article> {
        match self.news.search(query).await {
            Ok(articles) => articles,
            Err(e) => {
                eprintln!("Warning: news fetch failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Result of handling one browsing command against the current list.
#[derive(Debug, PartialEq, Eq)]
pub enum BrowseOutcome<'a> {
    /// Show this article's detail view
    ShowArticle(&'a Article),
    /// Numeric input outside the current list bounds
    InvalidNumber,
    /// Input that is not `q`, `r`, or a number
    InvalidInput,
    /// Re-run the search with the same location
    Refresh,
    /// Explicit quit
    Quit,
}

/// The article list for one browsing session.
///
/// Command handling borrows the session immutably, so rejected input cannot
/// mutate the list; only [`BrowserSession::replace`] swaps it wholesale.
#[derive(Debug, Default)]
pub struct BrowserSession {
    articles: Vec<Article>,
}

impl BrowserSession {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Resolve a parsed command against the current list.
    pub fn handle(&self, command: BrowseCommand) -> BrowseOutcome<'_> {
        match command {
            BrowseCommand::Quit => BrowseOutcome::Quit,
            BrowseCommand::Refresh => BrowseOutcome::Refresh,
            BrowseCommand::Select(n) if n >= 1 && n <= self.articles.len() => {
                BrowseOutcome::ShowArticle(&self.articles[n - 1])
            }
            BrowseCommand::Select(_) => BrowseOutcome::InvalidNumber,
            BrowseCommand::Invalid => BrowseOutcome::InvalidInput,
        }
    }

    /// Replace the list after a refresh. Returns `false` when the refresh
    /// yielded nothing, which terminates the browsing loop.
    pub fn replace(&mut self, articles: Vec<Article>) -> bool {
        self.articles = articles;
        !self.articles.is_empty()
    }
}
