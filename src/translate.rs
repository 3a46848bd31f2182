//! Output translation.
//!
//! Long text is cut into fixed-size character chunks, each chunk is translated
//! on its own, and the results are joined with single spaces. The cut ignores
//! sentence and word boundaries, so a sentence straddling two chunks is
//! translated in two halves. Any failure returns the original text unchanged.

use crate::error::TranslateError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

/// Default chunk size, in characters.
pub const MAX_CHUNK_CHARS: usize = 4900;
/// Text in this language is never sent for translation.
pub const SOURCE_LANGUAGE: &str = "en";

/// A translation service that handles one chunk per call.
pub trait Translator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError>;
}

/// [`Translator`] backed by the public Google Translate `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists
/// `[translated, original, ...]` segments.
fn parse_translation(payload: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = payload
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::Payload("missing segment list".to_string()))?;
    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|t| t.as_str()))
        .collect();
    if translated.is_empty() {
        return Err(TranslateError::Payload("no translated segments".to_string()));
    }
    Ok(translated)
}

impl Translator for GoogleTranslator {
    #[instrument(level = "debug", skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("client", "gtx"), ("sl", "auto"), ("tl", target_lang), ("dt", "t")])
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded;charset=utf-8")
            .body(format!("q={}", urlencoding::encode(text)))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status));
        }
        let payload: serde_json::Value = response.json().await?;
        parse_translation(&payload)
    }
}

/// Split text into consecutive chunks of at most `max_chars` characters.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Translate `text` into `target_lang`, falling back to `text` on any failure.
///
/// Empty text and English targets are returned as-is without a request.
///
/// # Arguments
///
/// * `translator` - The translation service
/// * `text` - Text to translate
/// * `target_lang` - Target language code, e.g. `"hi"`
/// * `max_chars` - Chunk size in characters
pub async fn translate_text<T: Translator>(
    translator: &T,
    text: &str,
    target_lang: &str,
    max_chars: usize,
) -> String {
    if text.is_empty() || target_lang == SOURCE_LANGUAGE {
        return text.to_string();
    }

    let chunks = chunk_text(text, max_chars);
    debug!(chunks = chunks.len(), %target_lang, "Translating");
    let mut translated = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        match translator.translate(chunk, target_lang).await {
            Ok(t) => translated.push(t),
            Err(e) => {
                warn!(%target_lang, error = %e, "Translation failed; keeping original text");
                return text.to_string();
            }
        }
    }
    translated.join(" ")
}
