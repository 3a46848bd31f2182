//! Main-content extraction with boilerplate rejection.
//!
//! Every `article`, `main` and `div` element is a candidate. Candidates whose
//! class names look structural or ad-related are skipped. For the rest, the
//! text of their long paragraphs is joined and the block is kept only if it
//! has enough words and few enough links. The longest surviving block wins.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Paragraphs this short (after trimming) are ignored. Measured in characters.
pub const MIN_PARAGRAPH_CHARS: usize = 30;
/// Candidates with fewer words are rejected.
pub const MIN_BLOCK_WORDS: usize = 100;
/// A candidate may have at most one link per this many words.
pub const WORDS_PER_LINK: usize = 5;

static CLASS_BLACKLIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(footer|header|nav|sidebar|ads|sponsored|related)").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TAG_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

static CONTAINERS: Lazy<Selector> = Lazy::new(|| Selector::parse("article, main, div").unwrap());
static PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Collapse whitespace runs to one space, drop tag-like substrings, and trim.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    TAG_LIKE.replace_all(&collapsed, "").trim().to_string()
}

/// Whether any of the element's class names hits the structural/ad blacklist.
fn is_blacklisted(element: &ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|class| CLASS_BLACKLIST.is_match(class))
}

/// Joined text of the candidate's paragraphs longer than [`MIN_PARAGRAPH_CHARS`].
fn paragraph_text(element: &ElementRef<'_>) -> String {
    element
        .select(&PARAGRAPHS)
        .map(|p| p.text().collect::<String>())
        .map(|t| t.trim().to_string())
        .filter(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Density gate: enough words, and no more than one link per [`WORDS_PER_LINK`] words.
pub fn passes_density(word_count: usize, link_count: usize) -> bool {
    word_count >= MIN_BLOCK_WORDS && link_count <= word_count / WORDS_PER_LINK
}

/// Extract the main article text from a parsed page.
///
/// Returns the cleaned text of the longest accepted candidate, or an empty
/// string if no candidate qualifies. On equal lengths the earlier candidate
/// in document order is kept.
pub fn extract_main_content(document: &Html) -> String {
    let mut best = String::new();
    let mut best_chars = 0usize;

    for candidate in document.select(&CONTAINERS) {
        if is_blacklisted(&candidate) {
            continue;
        }
        let text = paragraph_text(&candidate);
        let word_count = text.split_whitespace().count();
        let link_count = candidate.select(&LINKS).count();
        if !passes_density(word_count, link_count) {
            continue;
        }
        let chars = text.chars().count();
        if chars > best_chars {
            best = text;
            best_chars = chars;
        }
    }

    clean_text(&best)
}
