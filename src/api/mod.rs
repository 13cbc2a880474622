//! Backend API: wire types and the request client.

pub mod client;
pub mod types;

pub use client::{DashboardApi, HttpDashboardApi, endpoint_url};
pub use types::{
    DashboardSummary, EvaluationListResponse, EvaluationRecord, LogListResponse, LogRecord,
    ModelStat, ModelStatsResponse, TimeSeriesPoint, TimeSeriesResponse,
};
