//! Request functions for the dashboard backend, one per resource.
//!
//! No caching, retry, or de-duplication: every call is one GET. Non-success
//! statuses become [`LqoError::Api`] carrying the status text, unreachable
//! hosts become [`LqoError::Transport`], and bodies that do not match the
//! resource shape become [`LqoError::Payload`].

use std::fmt::Write as _;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{
    DashboardSummary, EvaluationListResponse, LogListResponse, ModelStatsResponse,
    TimeSeriesResponse,
};
use crate::core::config::ApiConfig;
use crate::core::errors::{LqoError, Result};

pub const SUMMARY_PATH: &str = "/api/dashboard/summary";
pub const LOGS_PATH: &str = "/api/dashboard/logs";
pub const EVALUATIONS_PATH: &str = "/api/dashboard/evaluations";
pub const MODEL_STATS_PATH: &str = "/api/dashboard/models/stats";
pub const TIME_SERIES_PATH: &str = "/api/dashboard/timeseries";

const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Data source seam used by every view. The HTTP client is the production
/// implementation; tests substitute scripted sources.
pub trait DashboardApi: Send + Sync {
    fn summary(&self) -> Result<DashboardSummary>;
    fn logs_page(&self, page: u32, page_size: u32) -> Result<LogListResponse>;
    fn evaluations_page(&self, page: u32, page_size: u32) -> Result<EvaluationListResponse>;
    fn model_stats(&self) -> Result<ModelStatsResponse>;
    fn time_series(&self, days: u32) -> Result<TimeSeriesResponse>;
}

/// Compose `base + path + ?query`. Query values pass through unmodified.
#[must_use]
pub fn endpoint_url(base: &str, path: &str, query: &[(&str, String)]) -> String {
    let mut url = String::with_capacity(base.len() + path.len() + 32);
    url.push_str(base.trim_end_matches('/'));
    url.push_str(path);
    for (idx, (key, value)) in query.iter().enumerate() {
        let sep = if idx == 0 { '?' } else { '&' };
        let _ = write!(url, "{sep}{key}={value}");
    }
    url
}

/// Blocking HTTP implementation over a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpDashboardApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout())
            .timeout_read(config.read_timeout())
            .timeout_write(WRITE_TIMEOUT)
            .build();
        Self {
            base_url: config.base_url.clone(),
            agent,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = endpoint_url(&self.base_url, path, query);
        tracing::debug!(%url, resource, "api request");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let status_text = response.status_text().to_string();
                tracing::debug!(status, %status_text, resource, "api status error");
                return Err(LqoError::Api {
                    status,
                    status_text,
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(LqoError::Transport {
                    url,
                    details: transport.to_string(),
                });
            }
        };

        let body = response.into_string().map_err(|err| LqoError::Transport {
            url: url.clone(),
            details: err.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|err| LqoError::Payload {
            resource,
            details: err.to_string(),
        })
    }
}

impl DashboardApi for HttpDashboardApi {
    fn summary(&self) -> Result<DashboardSummary> {
        self.get_json("summary", SUMMARY_PATH, &[])
    }

    fn logs_page(&self, page: u32, page_size: u32) -> Result<LogListResponse> {
        self.get_json(
            "logs",
            LOGS_PATH,
            &[("page", page.to_string()), ("page_size", page_size.to_string())],
        )
    }

    fn evaluations_page(&self, page: u32, page_size: u32) -> Result<EvaluationListResponse> {
        self.get_json(
            "evaluations",
            EVALUATIONS_PATH,
            &[("page", page.to_string()), ("page_size", page_size.to_string())],
        )
    }

    fn model_stats(&self) -> Result<ModelStatsResponse> {
        self.get_json("model stats", MODEL_STATS_PATH, &[])
    }

    fn time_series(&self, days: u32) -> Result<TimeSeriesResponse> {
        self.get_json("time series", TIME_SERIES_PATH, &[("days", days.to_string())])
    }
}
