#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for github-stats
//!
//! This library consolidates all functionality for the github-stats tool, which reports
//! aggregate activity statistics (commits, stars, followers, pull requests and issues)
//! for a GitHub account while staying within the API's request budget.
//!
//! # Module Organization
//!
//! - [`client`]: The remote hosting capability and its GitHub implementation
//! - [`metrics`]: Metric collectors and the sampling estimator
//! - [`collection`]: Fault-isolated orchestration and the rate-limit guard
//! - [`commands`]: Command-line interface
//! - [`reports`]: Console and JSON output

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod client;
pub mod collection;
pub mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
