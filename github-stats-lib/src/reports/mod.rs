//! Report generation for collection results
//!
//! Two generators turn an [`AggregateReport`](crate::collection::AggregateReport) into
//! output, each through a `generate` function writing to a `core::fmt::Write`:
//!
//! - **Console**: the summary table, an optional per-metric breakdown and the
//!   rate-limit footer, with optional ANSI colors
//! - **JSON**: machine-readable structured data, including failed collectors and
//!   zero states substituted for unavailable data
//!
//! Headline values are rendered with digit grouping here; the collectors themselves
//! produce ungrouped numbers.

mod common;
mod console;
mod json;

pub use console::{ConsoleOptions, generate as generate_console, write_rate_limit};
pub use json::generate as generate_json;
