#![forbid(unsafe_code)]

//! LLM Quality Observer dashboard core: presentation state and data
//! orchestration for an LLM-serving observability dashboard.
//!
//! Four concerns:
//! 1. **Locale**: active locale with persistence, plus fixed-shape translation tables
//! 2. **Pagination**: ticket-guarded page fetches for the Logs and Evaluations views
//! 3. **Overview aggregation**: three concurrent slices with partial-success rendering
//! 4. **Formatting**: latency, score buckets, truncation, evaluation rate, chart pivots
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use llm_quality_observer::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use llm_quality_observer::core::config::Config;
//! use llm_quality_observer::dashboard::format::{format_latency, score_bucket};
//! ```

pub mod prelude;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod logging;
