//! Dashboard model: screens, per-screen data controllers, messages, commands.
//!
//! Elm-style split: [`DashboardModel`] holds all presentation state,
//! [`DashboardMsg`] is every event that can change it, and [`DashboardCmd`]
//! describes side effects for the runtime to perform. The pure
//! [`super::update::update`] function is the only place state changes.

use serde::Serialize;

use crate::api::types::{
    DashboardSummary, EvaluationListResponse, LogListResponse, ModelStat, ModelStatsResponse,
    TimeSeriesResponse,
};
use crate::core::errors::LqoError;
use crate::i18n::Locale;

use super::load_state::{SliceSlot, SlotTicket};
use super::overview::OverviewAggregator;
use super::pagination::{DEFAULT_PAGE_SIZE, FetchTicket, PaginationController};

// ──────────────────── screens ────────────────────

/// Top-level dashboard screens in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Summary cards, trend charts, recent activity.
    #[default]
    Overview,
    /// Paginated request/response logs.
    Logs,
    /// Paginated quality evaluations.
    Evaluations,
    /// Per-model comparison.
    Models,
}

// ──────────────────── model ────────────────────

/// Complete presentation state. Mutated only by `update`.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub screen: Screen,
    /// Locale the current labels were rendered with.
    pub locale: Locale,
    pub overview: OverviewAggregator,
    pub logs: PaginationController<LogListResponse>,
    pub evaluations: PaginationController<EvaluationListResponse>,
    pub models: SliceSlot<Vec<ModelStat>>,
    /// Set once the session is torn down; later completions are dropped.
    pub closed: bool,
}

impl DashboardModel {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            screen: Screen::default(),
            locale,
            overview: OverviewAggregator::new(),
            logs: PaginationController::new(DEFAULT_PAGE_SIZE),
            evaluations: PaginationController::new(DEFAULT_PAGE_SIZE),
            models: SliceSlot::new(),
            closed: false,
        }
    }
}

// ──────────────────── messages ────────────────────

/// Every event the dashboard reacts to.
#[derive(Debug)]
pub enum DashboardMsg {
    /// Show a screen and fetch its data.
    Navigate(Screen),
    /// Page controls on the current list screen.
    NextPage,
    PreviousPage,
    GoToPage(u32),
    /// Refetch everything the current screen shows.
    Reload,
    /// The shared locale store switched locale.
    LocaleChanged(Locale),
    SummaryLoaded(SlotTicket, Result<DashboardSummary, LqoError>),
    TimeSeriesLoaded(SlotTicket, Result<TimeSeriesResponse, LqoError>),
    RecentLogsLoaded(SlotTicket, Result<LogListResponse, LqoError>),
    LogsLoaded(FetchTicket, Result<LogListResponse, LqoError>),
    EvaluationsLoaded(FetchTicket, Result<EvaluationListResponse, LqoError>),
    ModelStatsLoaded(SlotTicket, Result<ModelStatsResponse, LqoError>),
    /// Tear the session down.
    Close,
}

// ──────────────────── commands ────────────────────

/// Side effects requested by `update`, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCmd {
    /// No side-effect.
    None,
    /// Execute multiple commands.
    Batch(Vec<Self>),
    FetchSummary(SlotTicket),
    FetchTimeSeries { ticket: SlotTicket, days: u32 },
    FetchRecentLogs { ticket: SlotTicket, page_size: u32 },
    FetchLogs(FetchTicket),
    FetchEvaluations(FetchTicket),
    FetchModelStats(SlotTicket),
}

impl DashboardCmd {
    /// Number of fetches this command issues.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Batch(cmds) => cmds.iter().map(Self::fetch_count).sum(),
            _ => 1,
        }
    }
}
