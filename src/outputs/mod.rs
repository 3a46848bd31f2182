//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: Writes a run's `NewsSummaries` to JSON files for API consumption
//!
//! The rendered chat message itself lives in [`crate::presenter`].

pub mod json;
