//! JSON output of a run's summaries.
//!
//! # Output Structure
//!
//! Files are organized by date, one file per topic set:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── climate-change.json
//!     └── space_energy.json
//! ```

use crate::models::NewsSummaries;
use crate::utils::slugify_title;
use chrono::Local;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// File stem for a set of topics: each topic slugified, joined with `_`.
pub fn topics_file_stem(topics: &[String]) -> String {
    let stem = topics
        .iter()
        .map(|t| slugify_title(t.trim()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "general".to_string()
    } else {
        stem
    }
}

/// Write [`NewsSummaries`] as pretty JSON under a dated directory.
///
/// # Arguments
///
/// * `summaries` - The run's summaries and articles
/// * `topics` - The topics of the run, used for the file name
/// * `json_output_dir` - Base directory for JSON output
///
/// # Returns
///
/// The path of the written file, or an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_summaries(
    summaries: &NewsSummaries,
    topics: &[String],
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(summaries)?;

    let local_date = Local::now().date_naive().to_string();
    let full_json_dir = PathBuf::from(json_output_dir).join(&local_date);

    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{}.json", topics_file_stem(topics)));
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename.display(), "Wrote JSON summaries");

    Ok(output_json_filename)
}
