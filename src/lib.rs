//! # FYI News
//!
//! Fetches news articles for a topic, scrapes their text, and produces an
//! extractive summary with a coarse sentiment label, optionally translated.
//!
//! ## Architecture
//!
//! Data flows strictly left to right within one request:
//! 1. **Fetching** ([`fetcher`]): one news search per topic yields candidate URLs
//! 2. **Scraping** ([`orchestrator`], [`scrapers`]): pages are downloaded six at a
//!    time and reduced to their main text with boilerplate-rejection heuristics
//! 3. **Grouping** ([`grouper`]): surviving articles are partitioned by topic
//! 4. **Summarizing** ([`summarizer`], [`sentiment`]): frequency-scored sentence
//!    extraction plus a compound polarity label per topic
//! 5. **Presenting** ([`presenter`], [`translate`]): the final chat message
//!
//! [`pipeline::NewsService`] ties these together and is the entry point for callers.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod grouper;
pub mod http;
pub mod models;
pub mod orchestrator;
pub mod outputs;
pub mod pipeline;
pub mod presenter;
pub mod scrapers;
pub mod sentiment;
pub mod summarizer;
pub mod translate;
pub mod utils;

pub use error::{FetchError, PipelineError, TranslateError};
pub use models::{
    NewsSummaries, RawArticleRef, ScrapedArticle, Sentiment, Topic, TopicSummaries, TopicSummary,
};
pub use pipeline::NewsService;
