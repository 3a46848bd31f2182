//! Concurrent scraping of every candidate URL.
//!
//! At most `workers` scrapes are in flight at once. Results come back in ref
//! order (`buffered`, not `buffer_unordered`), and each article is tagged with
//! the topic of the ref at its own index, so duplicate URLs under different
//! topics keep their own tags.

use crate::models::{RawArticleRef, ScrapedArticle};
use crate::scrapers::PageScraper;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

/// Default number of concurrent scrapes.
pub const SCRAPE_WORKERS: usize = 6;

/// Scrape every ref with bounded concurrency and keep the successes, in ref order.
///
/// A failed or rejected scrape never affects the others. There is no
/// cancellation: the call returns once every ref has been attempted.
///
/// # Arguments
///
/// * `scraper` - The page scraper
/// * `refs` - Candidate URLs tagged with their topics
/// * `workers` - Maximum concurrent scrapes (values below 1 are treated as 1)
#[instrument(level = "info", skip_all, fields(refs = refs.len(), workers = workers))]
pub async fn scrape_all<P: PageScraper>(
    scraper: &P,
    refs: &[RawArticleRef],
    workers: usize,
) -> Vec<ScrapedArticle> {
    let results: Vec<(usize, Option<ScrapedArticle>)> = stream::iter(refs.iter().enumerate())
        .map(|(i, raw)| async move {
            match scraper.scrape(&raw.url, &raw.topic).await {
                Ok(Some(article)) => {
                    debug!(index = i, url = %raw.url, "Scraped article");
                    (i, Some(article))
                }
                Ok(None) => {
                    debug!(index = i, url = %raw.url, "Page rejected by content heuristics");
                    (i, None)
                }
                Err(e) => {
                    warn!(
                        index = i,
                        url = %truncate_for_log(&raw.url, 120),
                        error = %e,
                        "Scrape failed; skipping"
                    );
                    (i, None)
                }
            }
        })
        .buffered(workers.max(1))
        .collect()
        .await;

    let articles: Vec<ScrapedArticle> = results
        .into_iter()
        .filter_map(|(i, article)| {
            article.map(|mut a| {
                a.topic = refs[i].topic.clone();
                a
            })
        })
        .collect();

    info!(
        attempted = refs.len(),
        scraped = articles.len(),
        "Completed concurrent scrape"
    );
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Succeeds for every URL except those containing "bad" (error) or "empty" (rejected).
    struct StubScraper {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl StubScraper {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    impl PageScraper for StubScraper {
        async fn scrape(&self, url: &str, topic: &str) -> Result<Option<ScrapedArticle>, FetchError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            // uneven delays so completion order differs from ref order
            let delay = (url.len() as u64 * 7) % 30;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if url.contains("bad") {
                return Err(FetchError::Timeout);
            }
            if url.contains("empty") {
                return Ok(None);
            }
            Ok(Some(ScrapedArticle {
                title: format!("title of {}", url),
                content: "x".repeat(250),
                url: url.to_string(),
                topic: topic.to_string(),
            }))
        }
    }

    #[tokio::test]
    async fn test_duplicate_urls_keep_their_own_topics() {
        let refs = vec![
            RawArticleRef::new("https://same.test/story", "A"),
            RawArticleRef::new("https://same.test/story", "B"),
        ];
        let articles = scrape_all(&StubScraper::new(), &refs, SCRAPE_WORKERS).await;
        let topics: Vec<&str> = articles.iter().map(|a| a.topic.as_str()).collect();
        assert_eq!(topics, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_failures_are_dropped_and_order_kept() {
        let refs = vec![
            RawArticleRef::new("https://n.test/1", "t"),
            RawArticleRef::new("https://n.test/bad", "t"),
            RawArticleRef::new("https://n.test/empty", "t"),
            RawArticleRef::new("https://n.test/22222", "t"),
            RawArticleRef::new("https://n.test/333", "t"),
        ];
        let articles = scrape_all(&StubScraper::new(), &refs, SCRAPE_WORKERS).await;
        let urls: Vec<&str> = articles.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://n.test/1", "https://n.test/22222", "https://n.test/333"]
        );
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let refs: Vec<RawArticleRef> = (0..20)
            .map(|i| RawArticleRef::new(format!("https://n.test/{}", i), "t"))
            .collect();
        let scraper = StubScraper::new();
        let articles = scrape_all(&scraper, &refs, SCRAPE_WORKERS).await;
        assert_eq!(articles.len(), 20);
        let peak = scraper.peak.load(Ordering::SeqCst);
        assert!(peak <= SCRAPE_WORKERS, "peak concurrency was {}", peak);
        assert!(peak > 1);
    }

    #[tokio::test]
    async fn test_empty_input() {
        assert!(scrape_all(&StubScraper::new(), &[], SCRAPE_WORKERS).await.is_empty());
    }
}
