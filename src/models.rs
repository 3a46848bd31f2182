//! Data models for the scrape-and-summarize pipeline.
//!
//! This module defines the records that flow through the pipeline, leaves first:
//! - [`RawArticleRef`]: A search hit tagged with the topic that produced it
//! - [`ScrapedArticle`]: Normalized article text that passed every scrape heuristic
//! - [`TopicGroup`]: Scraped articles partitioned by topic
//! - [`TopicSummary`]: Extractive summary, sentiment and sources for one topic
//! - [`NewsSummaries`]: Everything produced by one multi-topic run
//!
//! Nothing here outlives a single request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-supplied subject of interest, used verbatim as search query and grouping key.
pub type Topic = String;

/// Group key for articles that carry no topic tag.
pub const DEFAULT_TOPIC: &str = "general";

/// A candidate article URL returned by the news search, tagged with its originating topic.
///
/// Duplicate URLs across topics are kept; each one drives its own scrape attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticleRef {
    /// The article URL as returned by the search API.
    pub url: String,
    /// The topic whose query produced this hit.
    pub topic: Topic,
}

impl RawArticleRef {
    pub fn new(url: impl Into<String>, topic: impl Into<Topic>) -> Self {
        Self {
            url: url.into(),
            topic: topic.into(),
        }
    }
}

/// An article whose main text survived relevance, density and length checks.
///
/// `content` is whitespace-normalized, markup-free and at least
/// [`crate::scrapers::MIN_CONTENT_CHARS`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrapedArticle {
    /// Title from the first `<h1>`, else `<title>`, else `"Untitled"`.
    pub title: String,
    /// The extracted main body text.
    pub content: String,
    /// The page URL the article was scraped from.
    pub url: String,
    /// The topic of the search hit that produced this article.
    pub topic: Topic,
}

/// Coarse sentiment label derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lowercase label, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(title, url)` pair listed under a topic summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// The summary produced for one topic with at least one scraped article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicSummary {
    /// `"Summary for "` followed by the title-cased topic.
    pub headline: String,
    /// Extractive summary of the concatenated article bodies.
    pub summary: String,
    /// Sentiment of the concatenated article bodies.
    pub sentiment: Sentiment,
    /// One entry per article, in group order.
    pub sources: Vec<Source>,
}

/// Scraped articles partitioned by topic.
///
/// Topics keep first-seen order and articles keep input order within each
/// topic. Every article in a group has `article.topic == key`, except that
/// untagged articles live under [`DEFAULT_TOPIC`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicGroup {
    groups: IndexMap<Topic, Vec<ScrapedArticle>>,
}

impl TopicGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an article to the group for `key`, creating the group if needed.
    pub fn push(&mut self, key: &str, article: ScrapedArticle) {
        match self.groups.get_mut(key) {
            Some(articles) => articles.push(article),
            None => {
                self.groups.insert(key.to_string(), vec![article]);
            }
        }
    }

    /// Articles grouped under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[ScrapedArticle]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterate `(topic, articles)` pairs in first-seen topic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Topic, &[ScrapedArticle])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Per-topic summaries in first-seen topic order. Serializes as a JSON object.
pub type TopicSummaries = IndexMap<Topic, TopicSummary>;

/// Result of one multi-topic run: per-topic summaries plus the articles behind them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NewsSummaries {
    pub summaries: TopicSummaries,
    /// Every scraped article, in ref order.
    pub articles: Vec<ScrapedArticle>,
}

impl NewsSummaries {
    /// The summary for `topic`, if one was produced.
    pub fn summary_for(&self, topic: &str) -> Option<&TopicSummary> {
        self.summaries.get(topic)
    }
}
