//! Command-line interface for github-stats
//!
//! This module implements the CLI commands and wires the client, the collectors and
//! the report generators together.
//!
//! # Commands
//!
//! - **stats**: Authenticate, confirm the account exists, check the remaining quota,
//!   collect every metric and print the summary table (optionally with a per-metric
//!   breakdown and a JSON report)
//! - **rate-limit**: Show the remaining API request quota and when it resets
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Commands that talk to GitHub first open a `Session`,
//! which sets up logging, loads the configuration, resolves the token (`--token`, then
//! `GITHUB_TOKEN`, then `GITHUB_PAT`) and validates it.
//!
//! Missing or rejected credentials and unknown accounts end the run with an error.
//! Anything that goes wrong after that is reported as a warning next to whatever
//! statistics could still be collected.

mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod rate_limit;
mod run;
mod stats;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use rate_limit::{RateLimitArgs, show_rate_limit};
pub use run::run;
pub use stats::{StatsArgs, process_stats};
