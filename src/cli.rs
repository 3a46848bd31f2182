//! Command-line interface definitions for FYI News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Options can be provided via command-line flags or environment variables.

use crate::pipeline::DEFAULT_NUM_ARTICLES;
use clap::Parser;

/// Command-line arguments for the FYI News application.
///
/// # Examples
///
/// ```sh
/// # One topic, rendered as a chat message
/// fyi_news "climate change"
///
/// # Hindi output, six articles
/// fyi_news "climate change" -n 6 --lang hi
///
/// # Several topics, also written as JSON
/// fyi_news space energy -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Topics to summarize
    #[arg(required = true)]
    pub topics: Vec<String>,

    /// Articles requested from the news search per topic
    #[arg(short, long, default_value_t = DEFAULT_NUM_ARTICLES)]
    pub num_articles: usize,

    /// Output language, as a code ("hi") or a name ("Hindi")
    #[arg(short, long, env = "FYI_LANG", default_value = "en")]
    pub lang: String,

    /// Sentences kept per summary (defaults to 5 for one topic, 3 for several)
    #[arg(short = 's', long)]
    pub max_sentences: Option<usize>,

    /// Optional path to a YAML settings file
    #[arg(short, long, env = "FYI_CONFIG")]
    pub config: Option<String>,

    /// GNews API key
    #[arg(long, env = "GNEWS_API_KEY")]
    pub gnews_api_key: Option<String>,

    /// Output directory for JSON summaries
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}
