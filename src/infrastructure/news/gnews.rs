//! GNews search adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{NewsQuery, NewsSearch, NewsSearchError};
use crate::domain::news::Article;

/// News-search API base URL
const API_BASE_URL: &str = "https://gnews.io";

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

// Response types for the search endpoint

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<ArticleRecord>,
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Article {
            title: record.title,
            description: record.description,
            content: record.content,
            url: record.url,
        }
    }
}

/// GNews search client
pub struct GnewsClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GnewsClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(API_BASE_URL, api_key)
    }

    /// Create with a custom base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/api/v4/search", self.base_url)
    }
}

#[async_trait]
impl NewsSearch for GnewsClient {
    async fn search(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsSearchError> {
        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(self.search_url())
            .timeout(SEARCH_TIMEOUT)
            .query(&[
                ("q", query.location.as_str()),
                ("lang", query.lang.as_str()),
                ("country", query.country.as_str()),
                ("max", max_results.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsSearchError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NewsSearchError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NewsSearchError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NewsSearchError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| NewsSearchError::ParseError(e.to_string()))?;

        Ok(body.articles.into_iter().map(Article::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_has_api_path() {
        let client = GnewsClient::with_base_url("http://localhost:9000", "key");
        assert_eq!(client.search_url(), "http://localhost:9000/api/v4/search");
    }

    #[test]
    fn article_record_maps_all_fields() {
        let record = ArticleRecord {
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            content: None,
            url: Some("https://example.com".to_string()),
        };
        let article = Article::from(record);
        assert_eq!(article.title.as_deref(), Some("T"));
        assert_eq!(article.description.as_deref(), Some("D"));
        assert!(article.content.is_none());
        assert_eq!(article.link(), "https://example.com");
    }

    #[test]
    fn missing_articles_field_deserializes_empty() {
        let body: SearchResponse = serde_json::from_str("{\"totalArticles\": 0}").unwrap();
        assert!(body.articles.is_empty());
    }
}
