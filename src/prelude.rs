//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use llm_quality_observer::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{LqoError, Result};

// API
pub use crate::api::client::{DashboardApi, HttpDashboardApi};
pub use crate::api::types::{
    DashboardSummary, EvaluationRecord, LogRecord, ModelStat, TimeSeriesPoint,
};

// Locale
pub use crate::dashboard::locale_store::{
    JsonFileStore, KeyValueStore, LocaleStore, MemoryStore, ViewContext,
};
pub use crate::i18n::{Locale, TranslationTable, resolve, verify_catalog};

// Dashboard state
pub use crate::dashboard::format::{
    ScoreBucket, evaluation_rate, format_latency, format_score, score_bucket, truncate,
};
pub use crate::dashboard::load_state::LoadState;
pub use crate::dashboard::model::Screen;
pub use crate::dashboard::overview::{CombinedState, OverviewAggregator};
pub use crate::dashboard::pagination::{FetchTicket, PaginationController};
pub use crate::dashboard::runtime::DashboardSession;
