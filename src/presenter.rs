//! Render a topic summary as the final user-facing message.
//!
//! ```text
//! 📰 Summary for Climate Change
//!
//! <summary sentences>
//!
//! Sentiment: Neutral
//!
//! Sources:
//! - [Title one](https://...)
//! - [Title two](https://...)
//! ```
//!
//! For non-English output each visible string is translated separately, and a
//! failed translation only falls back for that one field.

use crate::models::{Source, TopicSummary};
use crate::translate::{SOURCE_LANGUAGE, Translator, translate_text};
use crate::utils::title_case;
use tracing::instrument;

pub const SENTIMENT_LABEL: &str = "Sentiment: ";
pub const SOURCES_LABEL: &str = "Sources:";

/// Message shown when nothing survived the pipeline for `topic`.
pub fn not_found_message(topic: &str) -> String {
    format!("Could not find articles on '{}'.", topic)
}

/// Message shown when articles exist but none were summarized under `topic`.
pub fn no_summary_message(topic: &str) -> String {
    format!("No summary found for '{}'.", topic)
}

/// Assemble the message from already-localized parts.
pub fn render_message(
    headline: &str,
    summary: &str,
    sentiment_label: &str,
    sentiment: &str,
    sources_label: &str,
    sources: &[Source],
) -> String {
    let list = sources
        .iter()
        .map(|s| format!("- [{}]({})", s.title, s.url))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "📰 {headline}\n\n{summary}\n\n{sentiment_label}{sentiment}\n\n{sources_label}\n{list}"
    )
}

/// Render `summary` for `topic` in `lang`.
///
/// A missing summary renders the translated [`not_found_message`].
///
/// # Arguments
///
/// * `translator` - Used only when `lang` isn't English
/// * `topic` - The topic as the user typed it
/// * `summary` - The topic's summary, if one was produced
/// * `lang` - Target language code
/// * `chunk_chars` - Translation chunk size in characters
#[instrument(level = "info", skip(translator, summary))]
pub async fn present<T: Translator>(
    translator: &T,
    topic: &str,
    summary: Option<&TopicSummary>,
    lang: &str,
    chunk_chars: usize,
) -> String {
    let Some(data) = summary else {
        return translate_text(translator, &not_found_message(topic), lang, chunk_chars).await;
    };

    let sentiment = title_case(data.sentiment.as_str());
    if lang == SOURCE_LANGUAGE {
        return render_message(
            &data.headline,
            &data.summary,
            SENTIMENT_LABEL,
            &sentiment,
            SOURCES_LABEL,
            &data.sources,
        );
    }

    let headline = translate_text(translator, &data.headline, lang, chunk_chars).await;
    let body = translate_text(translator, &data.summary, lang, chunk_chars).await;
    let sentiment_label = translate_text(translator, SENTIMENT_LABEL, lang, chunk_chars).await;
    let sentiment = translate_text(translator, &sentiment, lang, chunk_chars).await;
    let sources_label = translate_text(translator, SOURCES_LABEL, lang, chunk_chars).await;

    render_message(
        &headline,
        &body,
        &sentiment_label,
        &sentiment,
        &sources_label,
        &data.sources,
    )
}
