//! News search: turn topics into candidate article URLs.
//!
//! Each topic issues exactly one search request. A topic whose request fails
//! (network, status, or body) contributes nothing and the other topics carry
//! on; [`fetch_news`] itself never fails.

use crate::error::FetchError;
use crate::models::{RawArticleRef, Topic};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// One article entry from the search response. Only `url` matters downstream.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<SearchHit>,
}

/// A news search backend.
pub trait NewsSearch {
    /// Search for up to `limit` articles matching `query`.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, FetchError>;
}

/// [`NewsSearch`] backed by the GNews v4 search API.
#[derive(Debug, Clone)]
pub struct GNewsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl GNewsClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }
}

impl NewsSearch for GNewsClient {
    #[instrument(level = "info", skip(self), fields(endpoint = %self.endpoint))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, FetchError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(url::Url::parse(&self.endpoint)?)
            .query(&[
                ("q", query),
                ("token", self.api_key.as_str()),
                ("lang", self.language.as_str()),
                ("max", limit.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(hits = body.articles.len(), "Search returned");
        Ok(body.articles)
    }
}

/// Query the search backend once per topic and tag every hit with its topic.
///
/// Hits without a URL are skipped. Results are concatenated in topic order and
/// are not deduplicated.
///
/// # Arguments
///
/// * `search` - The search backend
/// * `topics` - Topics to query, each used verbatim
/// * `max_per_topic` - Result limit passed to each query
#[instrument(level = "info", skip(search))]
pub async fn fetch_news<S: NewsSearch>(
    search: &S,
    topics: &[Topic],
    max_per_topic: usize,
) -> Vec<RawArticleRef> {
    let mut refs = Vec::new();
    for topic in topics {
        match search.search(topic, max_per_topic).await {
            Ok(hits) => {
                let before = refs.len();
                refs.extend(
                    hits.into_iter()
                        .filter_map(|hit| hit.url)
                        .map(|url| RawArticleRef::new(url, topic.clone())),
                );
                info!(%topic, count = refs.len() - before, "Fetched article refs");
            }
            Err(e) => {
                error!(%topic, error = %e, "News search failed; topic contributes no articles");
            }
        }
    }
    refs
}
