//! Extractive summarization and per-topic summaries.
//!
//! Sentences are scored by the summed frequency of their words across the
//! whole text, where a word is a run of three or more ASCII letters,
//! lowercased. The best-scoring sentences are returned in their original
//! order. No randomness is involved: the same input always yields the same
//! summary.

use crate::models::{ScrapedArticle, Source, TopicGroup, TopicSummaries, TopicSummary};
use crate::sentiment::{PolarityScorer, analyze_sentiment};
use crate::utils::title_case;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, instrument};
use unicode_segmentation::UnicodeSegmentation;

/// Texts shorter than this are returned unchanged. Measured in characters.
pub const SHORT_TEXT_CHARS: usize = 100;
/// Sentences kept by the general summary API unless the caller overrides it.
pub const DEFAULT_MAX_SENTENCES: usize = 3;
/// Sentences kept by the single-topic chat summary.
pub const CHAT_MAX_SENTENCES: usize = 5;

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "gov", "sen", "rep", "st", "jr", "sr", "gen", "col", "lt",
    "sgt", "capt", "cmdr", "adm", "rev", "hon", "pres", "supt", "insp", "atty", "corp", "inc",
    "ltd", "bros", "dept", "univ", "vs", "approx", "mt", "ft", "ave", "blvd", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());
/// Initials and dotted acronyms: "J.", "U.S.", "U.K.".
static INITIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[A-Za-z]\.)+$").unwrap());

fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Word frequency table over the whole text.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in words(text) {
        *freq.entry(word).or_insert(0) += 1;
    }
    freq
}

/// Whether `segment` ends in a title, initial or other abbreviation rather than a full stop.
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(last) = segment.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| !c.is_alphanumeric());
    match last.strip_suffix('.') {
        Some(stem) => {
            INITIALS.is_match(last) || ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
        }
        None => false,
    }
}

/// Split text into trimmed sentences, in order, dropping exact duplicates after the first.
///
/// Boundaries come from UAX #29, except that a boundary right after an
/// abbreviation such as "Mr." or "U.S." is not a sentence end.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut continues = false;
    for (start, segment) in text.split_sentence_bound_indices() {
        let end = start + segment.len();
        match spans.last_mut() {
            Some(span) if continues => span.1 = end,
            _ => spans.push((start, end)),
        }
        if !segment.trim().is_empty() {
            continues = ends_with_abbreviation(segment);
        }
    }

    spans
        .into_iter()
        .map(|(start, end)| text[start..end].trim())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .unique()
        .collect()
}

fn sentence_score(sentence: &str, freq: &HashMap<String, usize>) -> usize {
    words(sentence)
        .iter()
        .map(|w| freq.get(w).copied().unwrap_or(0))
        .sum()
}

/// Pick the `max_sentences` highest-scoring sentences and join them in text order.
///
/// Equal scores favour the earlier sentence. Text shorter than
/// [`SHORT_TEXT_CHARS`] characters is returned verbatim.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extractive_summary("Too short.", 3), "Too short.");
/// ```
pub fn extractive_summary(text: &str, max_sentences: usize) -> String {
    if text.chars().count() < SHORT_TEXT_CHARS {
        return text.to_string();
    }

    let sentences = split_sentences(text);
    let freq = word_frequencies(text);

    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, sentence_score(s, &freq)))
        .collect();
    // stable: ties keep text order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(max_sentences);
    scored.sort_by_key(|(i, _)| *i);

    debug!(
        sentences = sentences.len(),
        kept = scored.len(),
        "Scored sentences"
    );
    scored.iter().map(|(i, _)| sentences[*i]).join(" ")
}

/// Build the summary for one topic's articles.
///
/// Article bodies are joined with single spaces; the summary and the sentiment
/// are both computed over that joined text.
pub fn summarize_topic(
    topic: &str,
    articles: &[ScrapedArticle],
    max_sentences: usize,
    scorer: &dyn PolarityScorer,
) -> TopicSummary {
    let full_text = articles.iter().map(|a| a.content.as_str()).join(" ");
    TopicSummary {
        headline: format!("Summary for {}", title_case(topic)),
        summary: extractive_summary(&full_text, max_sentences),
        sentiment: analyze_sentiment(scorer, &full_text),
        sources: articles
            .iter()
            .map(|a| Source {
                title: a.title.clone(),
                url: a.url.clone(),
            })
            .collect(),
    }
}

/// Summarize every topic group, in group order.
#[instrument(level = "info", skip_all, fields(topics = groups.len(), max_sentences = max_sentences))]
pub fn summarize_articles(
    groups: &TopicGroup,
    max_sentences: usize,
    scorer: &dyn PolarityScorer,
) -> TopicSummaries {
    groups
        .iter()
        .map(|(topic, articles)| {
            let summary = summarize_topic(topic, articles, max_sentences, scorer);
            debug!(%topic, sentiment = %summary.sentiment, sources = summary.sources.len(), "Summarized topic");
            (topic.clone(), summary)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::sentiment::PolarityScores;

    struct Fixed(f64);

    impl PolarityScorer for Fixed {
        fn polarity(&self, _text: &str) -> PolarityScores {
            PolarityScores {
                compound: self.0,
                ..Default::default()
            }
        }
    }

    fn article(title: &str, content: &str, topic: &str) -> ScrapedArticle {
        ScrapedArticle {
            title: title.to_string(),
            content: content.to_string(),
            url: format!("https://news.test/{}", title),
            topic: topic.to_string(),
        }
    }

    #[test]
    fn test_short_text_is_returned_verbatim() {
        let text = "  Short   text. Not summarized!  ";
        assert_eq!(extractive_summary(text, 1), text);
    }

    #[test]
    fn test_selected_sentences_keep_text_order() {
        let blob = "The rust compiler is fast. Weather was mild today overall. \
                    Rust compiler rust compiler rust compiler improvements land.";
        assert!(blob.chars().count() >= SHORT_TEXT_CHARS);
        let expected = "The rust compiler is fast. \
                        Rust compiler rust compiler rust compiler improvements land.";
        for _ in 0..5 {
            assert_eq!(extractive_summary(blob, 2), expected);
        }
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let blob = "Apples grow on trees. Boats sail on lakes. Cats nap in sun. \
                    Dogs run at parks. Eggs fry in pans. Fish swim in seas.";
        assert_eq!(
            extractive_summary(blob, 2),
            "Apples grow on trees. Boats sail on lakes."
        );
    }

    #[test]
    fn test_duplicate_sentences_are_dropped() {
        let sentences = split_sentences("Markets rallied today. Markets rallied today. Bonds fell.");
        assert_eq!(sentences, vec!["Markets rallied today.", "Bonds fell."]);
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        let sentences =
            split_sentences("Mr. Smith said the plan works. Dr. Jones agreed with Gov. Brown today.");
        assert_eq!(
            sentences,
            vec![
                "Mr. Smith said the plan works.",
                "Dr. Jones agreed with Gov. Brown today."
            ]
        );

        let sentences = split_sentences(
            "The U.S. Senate voted on Tuesday. Sen. Ortiz and Rep. Lee backed it. \
             J. R. Hale of Acme Corp. Ltd. disagreed!",
        );
        assert_eq!(
            sentences,
            vec![
                "The U.S. Senate voted on Tuesday.",
                "Sen. Ortiz and Rep. Lee backed it.",
                "J. R. Hale of Acme Corp. Ltd. disagreed!"
            ]
        );
    }

    #[test]
    fn test_summary_never_returns_abbreviation_fragments() {
        let blob = "Mr. Smith met Dr. Jones in St. Louis on Friday. Gov. Brown praised Mr. Smith. \
                    Mrs. Brown stayed home. Prof. Adams wrote about Mr. Smith and Dr. Jones.";
        let summary = extractive_summary(blob, 2);
        assert_eq!(
            summary,
            "Mr. Smith met Dr. Jones in St. Louis on Friday. \
             Prof. Adams wrote about Mr. Smith and Dr. Jones."
        );
    }

    #[test]
    fn test_word_frequencies() {
        let freq = word_frequencies("The cat and THE dog; an ox.");
        assert_eq!(freq.get("the"), Some(&2));
        assert_eq!(freq.get("cat"), Some(&1));
        assert!(freq.get("an").is_none());
        assert!(freq.get("ox").is_none());
    }

    #[test]
    fn test_fewer_sentences_than_requested() {
        let blob = "One long sentence about the central bank raising interest rates again this quarter to cool inflation.";
        assert_eq!(extractive_summary(blob, 5), blob);
    }

    #[test]
    fn test_summarize_topic() {
        let articles = vec![
            article("first", "Solar output rose sharply.", "solar power"),
            article("second", "Wind output fell.", "solar power"),
        ];
        let summary = summarize_topic("solar power", &articles, 5, &Fixed(0.4));
        assert_eq!(summary.headline, "Summary for Solar Power");
        assert_eq!(summary.summary, "Solar output rose sharply. Wind output fell.");
        assert_eq!(summary.sentiment, Sentiment::Positive);
        let titles: Vec<&str> = summary.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_summarize_articles_per_group() {
        let mut groups = TopicGroup::new();
        groups.push("a", article("x", "Text a.", "a"));
        groups.push("b", article("y", "Text b.", "b"));
        let summaries = summarize_articles(&groups, 3, &Fixed(-0.3));
        assert_eq!(summaries.len(), 2);
        let topics: Vec<&str> = summaries.keys().map(String::as_str).collect();
        assert_eq!(topics, vec!["a", "b"]);
        assert_eq!(summaries["b"].sentiment, Sentiment::Negative);
    }
}
