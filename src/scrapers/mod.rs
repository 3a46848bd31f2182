//! Article page scraping.
//!
//! A scrape downloads one page and turns it into a [`ScrapedArticle`] or
//! nothing. The result distinguishes the two ways of getting nothing:
//!
//! | Outcome | Return |
//! |---------|--------|
//! | Page accepted | `Ok(Some(article))` |
//! | Off-topic title, no main content, or too short | `Ok(None)` |
//! | Network failure, timeout, non-200 status | `Err(FetchError)` |
//!
//! The orchestrator logs both failure kinds and drops them alike.

pub mod extract;

use crate::error::FetchError;
use crate::models::ScrapedArticle;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Articles with less extracted content than this are dropped. Measured in characters.
pub const MIN_CONTENT_CHARS: usize = 200;
/// Title used when the page has neither `<h1>` nor `<title>`.
pub const UNTITLED: &str = "Untitled";

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Something that can turn a URL into an article.
pub trait PageScraper {
    /// Scrape `url`, keeping it only if its title is relevant to `topic`.
    async fn scrape(&self, url: &str, topic: &str) -> Result<Option<ScrapedArticle>, FetchError>;
}

/// [`PageScraper`] that downloads pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScraper {
    client: Client,
}

impl HttpScraper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageScraper for HttpScraper {
    #[instrument(level = "debug", skip(self))]
    async fn scrape(&self, url: &str, topic: &str) -> Result<Option<ScrapedArticle>, FetchError> {
        let parsed = url::Url::parse(url)?;
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(FetchError::from_reqwest_error)?;
        Ok(scrape_html(&body, url, topic))
    }
}

/// Title from the first `<h1>`, falling back to `<title>`, then [`UNTITLED`].
pub fn extract_title(document: &Html) -> String {
    document
        .select(&H1)
        .next()
        .or_else(|| document.select(&TITLE).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Title relevance gate.
///
/// An empty topic accepts everything. Otherwise at least one whitespace-separated
/// token of the topic must occur, case-insensitively, somewhere in the title.
pub fn is_relevant(title: &str, topic: &str) -> bool {
    if topic.is_empty() {
        return true;
    }
    let title = title.to_lowercase();
    topic
        .split_whitespace()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

/// Apply the title, relevance, extraction and length steps to downloaded HTML.
pub fn scrape_html(html: &str, url: &str, topic: &str) -> Option<ScrapedArticle> {
    let document = Html::parse_document(html);
    let title = extract_title(&document);

    if !is_relevant(&title, topic) {
        debug!(%url, %title, %topic, "Title not relevant to topic; dropping");
        return None;
    }

    let content = extract::extract_main_content(&document);
    let chars = content.chars().count();
    if chars < MIN_CONTENT_CHARS {
        debug!(%url, chars, "Extracted content too short; dropping");
        return None;
    }

    Some(ScrapedArticle {
        title,
        content,
        url: url.to_string(),
        topic: topic.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(title: &str, body: &str) -> String {
        format!(
            "<html><head><title>Site title</title></head><body><h1>{}</h1><article><p>{}</p></article></body></html>",
            title, body
        )
    }

    fn long_body() -> String {
        vec!["Parliament debated the energy bill today"; 20].join(" ")
    }

    fn client() -> Client {
        crate::http::build_client(&crate::config::Settings::default()).unwrap()
    }

    #[test]
    fn test_title_prefers_h1() {
        let doc = Html::parse_document(&page("  Real headline ", "x"));
        assert_eq!(extract_title(&doc), "Real headline");
    }

    #[test]
    fn test_title_falls_back() {
        let doc = Html::parse_document("<html><head><title>Doc</title></head><body></body></html>");
        assert_eq!(extract_title(&doc), "Doc");
        let doc = Html::parse_document("<html><body><p>nothing</p></body></html>");
        assert_eq!(extract_title(&doc), "Untitled");
    }

    #[test]
    fn test_relevance() {
        assert!(is_relevant("Energy Bill Passes", "energy prices"));
        assert!(is_relevant("Anything", ""));
        assert!(!is_relevant("Football results", "energy prices"));
        assert!(!is_relevant("Anything", "   "));
    }

    #[test]
    fn test_scrape_html_accepts_article() {
        let article = scrape_html(&page("Energy bill", &long_body()), "https://n.test/a", "energy").unwrap();
        assert_eq!(article.title, "Energy bill");
        assert_eq!(article.topic, "energy");
        assert_eq!(article.url, "https://n.test/a");
        assert_eq!(article.content, long_body());
    }

    #[test]
    fn test_scrape_html_rejects_irrelevant_title() {
        assert!(scrape_html(&page("Cup final", &long_body()), "https://n.test/a", "energy").is_none());
    }

    #[test]
    fn test_length_gate_at_199_characters() {
        let body = vec!["a"; 100].join(" ");
        assert_eq!(body.chars().count(), 199);
        let html = format!(
            "<html><body><h1>Topic</h1><div><p>{}</p></div></body></html>",
            body
        );
        assert!(scrape_html(&html, "https://n.test/a", "topic").is_none());

        let body = format!("{} b", body); // 201 characters
        let html = format!(
            "<html><body><h1>Topic</h1><div><p>{}</p></div></body></html>",
            body
        );
        assert!(scrape_html(&html, "https://n.test/a", "topic").is_some());
    }

    #[tokio::test]
    async fn test_http_scraper_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/story"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page("Energy news", &long_body())))
            .mount(&server)
            .await;

        let scraper = HttpScraper::new(client());
        let url = format!("{}/story", server.uri());
        let article = scraper.scrape(&url, "energy").await.unwrap().unwrap();
        assert_eq!(article.url, url);
    }

    #[tokio::test]
    async fn test_http_scraper_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let scraper = HttpScraper::new(client());
        let result = scraper.scrape(&format!("{}/gone", server.uri()), "energy").await;
        assert!(matches!(result, Err(FetchError::Status(s)) if s == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_http_scraper_invalid_url() {
        let scraper = HttpScraper::new(client());
        assert!(matches!(
            scraper.scrape("not a url", "energy").await,
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
