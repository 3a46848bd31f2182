//! # FYI News
//!
//! Command-line front end: summarizes the news for one or more topics and
//! prints one message per topic.
//!
//! ## Usage
//!
//! ```sh
//! GNEWS_API_KEY=... fyi_news "climate change" --lang hi
//! ```

use clap::Parser;
use fyi_news::cli::Cli;
use fyi_news::config::{Settings, language_code};
use fyi_news::http::build_client;
use fyi_news::outputs::json;
use fyi_news::pipeline::NewsService;
use fyi_news::summarizer::{CHAT_MAX_SENTENCES, DEFAULT_MAX_SENTENCES};
use fyi_news::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("fyi_news starting up");

    let args = Cli::parse();
    debug!(?args.topics, args.num_articles, %args.lang, "Parsed CLI arguments");

    // ---- Settings ----
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.gnews_api_key.is_some() {
        settings.gnews_api_key = args.gnews_api_key.clone();
    }
    let lang = language_code(&args.lang);

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let client = build_client(&settings)?;
    let service = NewsService::from_settings(&settings, client);

    let max_sentences = args.max_sentences.unwrap_or(if args.topics.len() == 1 {
        CHAT_MAX_SENTENCES
    } else {
        DEFAULT_MAX_SENTENCES
    });

    // ---- Run the pipeline once for all topics ----
    let result = match service
        .get_news_summaries(&args.topics, args.num_articles, max_sentences)
        .await
    {
        Ok(result) => Some(result),
        Err(e) => {
            warn!(error = %e, "Pipeline produced no summaries");
            None
        }
    };

    for topic in &args.topics {
        let message = service.render_topic(topic, result.as_ref(), &lang).await;
        println!("{}\n", message);
    }

    // ---- JSON output ----
    if let (Some(dir), Some(result)) = (&args.json_output_dir, &result) {
        match json::write_summaries(result, &args.topics, dir).await {
            Ok(path) => info!(path = %path.display(), "Wrote JSON output"),
            Err(e) => error!(error = %e, "Failed to write JSON output"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
