//! Wire shapes returned by the dashboard backend.

#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate counters for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_logs: u64,
    pub total_evaluated: u64,
    #[serde(default)]
    pub avg_latency_ms: Option<f64>,
    #[serde(default)]
    pub avg_score: Option<f64>,
}

/// One recorded LLM request/response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: u64,
    /// Server timestamp, kept verbatim; parsed only for display.
    pub created_at: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub prompt: String,
    pub response: String,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    /// `"success"` or a backend-specific failure status.
    pub status: String,
}

impl LogRecord {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// One quality judgement of a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: u64,
    pub created_at: String,
    pub log_id: u64,
    /// Integer rating on the 1-5 scale.
    pub overall_score: i64,
    pub is_flagged: bool,
    pub label: String,
    pub judge_model: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub log_prompt: Option<String>,
    #[serde(default)]
    pub log_response: Option<String>,
    #[serde(default)]
    pub log_model_version: Option<String>,
}

/// Per-model aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStat {
    pub model_version: String,
    pub total_requests: u64,
    #[serde(default)]
    pub avg_latency_ms: Option<f64>,
    #[serde(default)]
    pub avg_score: Option<f64>,
    pub total_evaluated: u64,
}

/// One day of the trend feed. Points arrive ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub avg_latency_ms: Option<f64>,
    pub total_requests: u64,
    pub total_evaluated: u64,
}

/// Paginated log listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogListResponse {
    pub logs: Vec<LogRecord>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Paginated evaluation listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationListResponse {
    pub evaluations: Vec<EvaluationRecord>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatsResponse {
    pub models: Vec<ModelStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    pub data: Vec<TimeSeriesPoint>,
}
