//! The end-to-end pipeline: search → scrape → group → summarize → present.
//!
//! [`NewsService`] owns every collaborator. It is built once at startup and
//! shared by reference; nothing is cached between calls.

use crate::config::Settings;
use crate::error::PipelineError;
use crate::fetcher::{GNewsClient, NewsSearch, fetch_news};
use crate::grouper::group_by_topic;
use crate::models::{NewsSummaries, Topic};
use crate::orchestrator::{SCRAPE_WORKERS, scrape_all};
use crate::presenter::{no_summary_message, present};
use crate::scrapers::{HttpScraper, PageScraper};
use crate::sentiment::{PolarityScorer, VaderAnalyzer};
use crate::summarizer::{CHAT_MAX_SENTENCES, summarize_articles};
use crate::translate::{GoogleTranslator, MAX_CHUNK_CHARS, Translator, translate_text};
use reqwest::Client;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Articles requested per topic by [`NewsService::get_topic_summary`] callers by default.
pub const DEFAULT_NUM_ARTICLES: usize = 4;

/// The news summarization service and its collaborators.
pub struct NewsService<S, P, T> {
    search: S,
    scraper: P,
    translator: T,
    scorer: Box<dyn PolarityScorer>,
    workers: usize,
    chunk_chars: usize,
}

impl NewsService<GNewsClient, HttpScraper, GoogleTranslator> {
    /// Wire up the HTTP-backed collaborators from settings, sharing one client.
    pub fn from_settings(settings: &Settings, client: Client) -> Self {
        let api_key = settings.gnews_api_key.clone().unwrap_or_default();
        if api_key.is_empty() {
            warn!("No news search API key configured; searches will likely be rejected");
        }
        let search = GNewsClient::new(
            client.clone(),
            settings.search_endpoint.as_str(),
            api_key,
            settings.search_language.as_str(),
        );
        let scraper = HttpScraper::new(client.clone());
        let translator = GoogleTranslator::new(client, settings.translate_endpoint.as_str());

        NewsService::new(search, scraper, translator, Box::new(VaderAnalyzer::new()))
            .with_workers(settings.scrape_workers)
            .with_chunk_chars(settings.translate_chunk_chars)
    }
}

impl<S, P, T> NewsService<S, P, T>
where
    S: NewsSearch,
    P: PageScraper,
    T: Translator,
{
    pub fn new(search: S, scraper: P, translator: T, scorer: Box<dyn PolarityScorer>) -> Self {
        Self {
            search,
            scraper,
            translator,
            scorer,
            workers: SCRAPE_WORKERS,
            chunk_chars: MAX_CHUNK_CHARS,
        }
    }

    /// Override the number of concurrent scrapes.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Override the translation chunk size.
    pub fn with_chunk_chars(mut self, chunk_chars: usize) -> Self {
        self.chunk_chars = chunk_chars;
        self
    }

    /// Summarize several topics at once.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoArticles`] if no article survived scraping for any topic.
    #[instrument(level = "info", skip(self))]
    pub async fn get_news_summaries(
        &self,
        topics: &[Topic],
        max_per_topic: usize,
        max_sentences: usize,
    ) -> Result<NewsSummaries, PipelineError> {
        let t0 = Instant::now();
        let refs = fetch_news(&self.search, topics, max_per_topic).await;
        let articles = scrape_all(&self.scraper, &refs, self.workers).await;
        if articles.is_empty() {
            info!(refs = refs.len(), "No articles survived scraping");
            return Err(PipelineError::NoArticles);
        }

        let grouped = group_by_topic(&articles);
        let summaries = summarize_articles(&grouped, max_sentences, self.scorer.as_ref());
        info!(
            refs = refs.len(),
            articles = articles.len(),
            topics = summaries.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Built news summaries"
        );
        Ok(NewsSummaries {
            summaries,
            articles,
        })
    }

    /// Produce the rendered, possibly translated, summary message for one topic.
    ///
    /// Never fails: an empty result becomes a "could not find articles" message.
    ///
    /// # Arguments
    ///
    /// * `topic` - The user's topic
    /// * `num_articles` - Search result limit (see [`DEFAULT_NUM_ARTICLES`])
    /// * `target_lang` - Output language code
    #[instrument(level = "info", skip(self))]
    pub async fn get_topic_summary(&self, topic: &str, num_articles: usize, target_lang: &str) -> String {
        let topics = [topic.to_string()];
        let result = self
            .get_news_summaries(&topics, num_articles, CHAT_MAX_SENTENCES)
            .await
            .ok();
        self.render_topic(topic, result.as_ref(), target_lang).await
    }

    /// Render one topic's message from a run's result (`None` when the run found nothing).
    pub async fn render_topic(
        &self,
        topic: &str,
        result: Option<&NewsSummaries>,
        target_lang: &str,
    ) -> String {
        let Some(result) = result else {
            return present(&self.translator, topic, None, target_lang, self.chunk_chars).await;
        };
        match result.summary_for(topic) {
            Some(summary) => {
                present(
                    &self.translator,
                    topic,
                    Some(summary),
                    target_lang,
                    self.chunk_chars,
                )
                .await
            }
            None => {
                translate_text(
                    &self.translator,
                    &no_summary_message(topic),
                    target_lang,
                    self.chunk_chars,
                )
                .await
            }
        }
    }
}
