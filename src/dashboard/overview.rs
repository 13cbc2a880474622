//! Overview screen: three independent slices fetched concurrently at mount.

use serde::Serialize;

use crate::api::types::{
    DashboardSummary, LogListResponse, LogRecord, TimeSeriesPoint, TimeSeriesResponse,
};
use crate::core::errors::LqoError;

use super::load_state::{LoadState, SliceSlot, SlotTicket};

/// Days of trend history requested for the charts.
pub const TREND_DAYS: u32 = 30;

/// Recent-activity list length (logs page 1 at this page size).
pub const RECENT_LOG_COUNT: u32 = 5;

/// Independent slices behind the overview.
pub const SLICE_COUNT: usize = 3;

/// Tickets for the three fetches issued by one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewTickets {
    pub summary: SlotTicket,
    pub time_series: SlotTicket,
    pub recent_logs: SlotTicket,
}

/// Combined view over the three slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinedState {
    Idle,
    /// At least one slice has not settled.
    Loading,
    /// Every slice settled; individual slices may still have failed.
    Settled,
}

#[derive(Debug, Clone, Default)]
pub struct OverviewAggregator {
    summary: SliceSlot<DashboardSummary>,
    time_series: SliceSlot<Vec<TimeSeriesPoint>>,
    recent_logs: SliceSlot<Vec<LogRecord>>,
}

impl OverviewAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every slice in `Loading` and issue one ticket per fetch.
    pub fn mount(&mut self) -> OverviewTickets {
        OverviewTickets {
            summary: self.summary.begin(),
            time_series: self.time_series.begin(),
            recent_logs: self.recent_logs.begin(),
        }
    }

    pub fn apply_summary(
        &mut self,
        ticket: SlotTicket,
        result: Result<DashboardSummary, LqoError>,
    ) -> bool {
        self.summary.finish(ticket, result)
    }

    pub fn apply_time_series(
        &mut self,
        ticket: SlotTicket,
        result: Result<TimeSeriesResponse, LqoError>,
    ) -> bool {
        self.time_series
            .finish(ticket, result.map(|response| response.data))
    }

    pub fn apply_recent_logs(
        &mut self,
        ticket: SlotTicket,
        result: Result<LogListResponse, LqoError>,
    ) -> bool {
        self.recent_logs
            .finish(ticket, result.map(|response| response.logs))
    }

    #[must_use]
    pub const fn summary(&self) -> &LoadState<DashboardSummary> {
        self.summary.state()
    }

    #[must_use]
    pub const fn time_series(&self) -> &LoadState<Vec<TimeSeriesPoint>> {
        self.time_series.state()
    }

    #[must_use]
    pub const fn recent_logs(&self) -> &LoadState<Vec<LogRecord>> {
        self.recent_logs.state()
    }

    /// Error messages of failed slices, in summary, charts, recent-activity
    /// order.
    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        [
            self.summary().error(),
            self.time_series().error(),
            self.recent_logs().error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    #[must_use]
    pub fn combined(&self) -> CombinedState {
        let states = [
            self.summary().is_settled(),
            self.time_series().is_settled(),
            self.recent_logs().is_settled(),
        ];
        if states.iter().all(|settled| *settled) {
            CombinedState::Settled
        } else if matches!(self.summary(), LoadState::Idle)
            && matches!(self.time_series(), LoadState::Idle)
            && matches!(self.recent_logs(), LoadState::Idle)
        {
            CombinedState::Idle
        } else {
            CombinedState::Loading
        }
    }
}
