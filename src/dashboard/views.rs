//! Display-ready projections of fetched records.
//!
//! Everything here is pure: records plus a translation table in, rows and
//! labels out. The text renderer and `--json` output both consume these.

#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::types::{
    DashboardSummary, EvaluationListResponse, EvaluationRecord, LogListResponse, LogRecord,
    ModelStat, TimeSeriesPoint,
};
use crate::i18n::TranslationTable;

use super::format::{
    NOT_APPLICABLE, ScoreBucket, evaluation_rate, format_latency, format_score, format_timestamp,
    score_bucket, truncate, truncate_opt,
};
use super::load_state::LoadState;
use super::overview::{CombinedState, OverviewAggregator};
use super::pagination::{Paged, PaginationController};

/// Log prompt/response column width.
pub const LOG_TEXT_WIDTH: usize = 80;
/// Evaluation prompt/response column width.
pub const EVALUATION_TEXT_WIDTH: usize = 60;
/// Evaluation comment column width.
pub const COMMENT_WIDTH: usize = 50;
/// Recent-activity prompt width on the overview.
pub const RECENT_PROMPT_WIDTH: usize = 60;

// ──────────────────── overview ────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCards {
    pub total_logs: u64,
    pub total_evaluated: u64,
    pub avg_latency: String,
    pub avg_score: String,
    pub score_bucket: ScoreBucket,
}

#[must_use]
pub fn summary_cards(summary: &DashboardSummary) -> SummaryCards {
    SummaryCards {
        total_logs: summary.total_logs,
        total_evaluated: summary.total_evaluated,
        avg_latency: format_latency(summary.avg_latency_ms),
        avg_score: format_score(summary.avg_score),
        score_bucket: score_bucket(summary.avg_score),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub requests: u64,
    pub evaluated: u64,
}

/// Trend datasets in backend order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub quality: Vec<ChartPoint>,
    pub latency: Vec<ChartPoint>,
    pub volume: Vec<VolumePoint>,
}

impl ChartSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volume.is_empty()
    }
}

#[must_use]
pub fn chart_series(points: &[TimeSeriesPoint]) -> ChartSeries {
    ChartSeries {
        quality: points
            .iter()
            .map(|p| ChartPoint {
                date: p.date,
                value: p.avg_score,
            })
            .collect(),
        latency: points
            .iter()
            .map(|p| ChartPoint {
                date: p.date,
                value: p.avg_latency_ms,
            })
            .collect(),
        volume: points
            .iter()
            .map(|p| VolumePoint {
                date: p.date,
                requests: p.total_requests,
                evaluated: p.total_evaluated,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivityRow {
    pub id: u64,
    pub created_at: String,
    pub model: String,
    pub prompt: String,
    pub latency: String,
    pub success: bool,
}

#[must_use]
pub fn recent_activity(logs: &[LogRecord]) -> Vec<RecentActivityRow> {
    logs.iter()
        .map(|log| RecentActivityRow {
            id: log.id,
            created_at: format_timestamp(&log.created_at),
            model: log
                .model_version
                .clone()
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            prompt: truncate(&log.prompt, RECENT_PROMPT_WIDTH),
            latency: format_latency(log.latency_ms),
            success: log.is_success(),
        })
        .collect()
}

// ──────────────────── logs ────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub id: u64,
    pub created_at: String,
    pub user_id: String,
    pub prompt: String,
    pub response: String,
    pub model: String,
    pub latency: String,
    pub status: String,
    pub success: bool,
}

#[must_use]
pub fn log_row(log: &LogRecord) -> LogRow {
    LogRow {
        id: log.id,
        created_at: format_timestamp(&log.created_at),
        user_id: log
            .user_id
            .clone()
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        prompt: truncate(&log.prompt, LOG_TEXT_WIDTH),
        response: truncate(&log.response, LOG_TEXT_WIDTH),
        model: log
            .model_version
            .clone()
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        latency: format_latency(log.latency_ms),
        status: log.status.clone(),
        success: log.is_success(),
    }
}

/// Header line: `{total} logs | Page {page} of {total_pages}`.
#[must_use]
pub fn logs_page_line(table: &TranslationTable, page: &LogListResponse) -> String {
    let t = &table.logs;
    format!(
        "{} {} | {} {} {} {}",
        page.total, t.logs_text, t.page, page.page, t.of, page.total_pages
    )
}

/// Footer line: `Showing {n} of {total} logs`.
#[must_use]
pub fn logs_showing_line(table: &TranslationTable, page: &LogListResponse) -> String {
    let t = &table.logs;
    format!(
        "{} {} {} {} {}",
        t.showing,
        page.logs.len(),
        t.of,
        page.total,
        t.logs_text
    )
}

// ──────────────────── evaluations ────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationRow {
    pub id: u64,
    pub created_at: String,
    pub log_id: u64,
    pub prompt: String,
    pub response: String,
    /// `N/5`.
    pub score: String,
    pub score_bucket: ScoreBucket,
    pub label: String,
    pub judge: String,
    pub comment: String,
    pub flagged: bool,
}

#[must_use]
pub fn evaluation_row(evaluation: &EvaluationRecord) -> EvaluationRow {
    #[allow(clippy::cast_precision_loss)]
    let score = evaluation.overall_score as f64;
    EvaluationRow {
        id: evaluation.id,
        created_at: format_timestamp(&evaluation.created_at),
        log_id: evaluation.log_id,
        prompt: truncate_opt(evaluation.log_prompt.as_deref(), EVALUATION_TEXT_WIDTH),
        response: truncate_opt(evaluation.log_response.as_deref(), EVALUATION_TEXT_WIDTH),
        score: format!("{}/5", evaluation.overall_score),
        score_bucket: score_bucket(Some(score)),
        label: evaluation.label.clone(),
        judge: evaluation.judge_model.clone(),
        comment: truncate_opt(evaluation.comment.as_deref(), COMMENT_WIDTH),
        flagged: evaluation.is_flagged,
    }
}

/// Header line: `Total: {total} evaluations | Page {page} of {total_pages}`.
#[must_use]
pub fn evaluations_page_line(table: &TranslationTable, page: &EvaluationListResponse) -> String {
    let t = &table.evaluations;
    format!(
        "{} {} {} | {} {} {} {}",
        t.total, page.total, t.evaluations_text, t.page, page.page, t.of, page.total_pages
    )
}

/// Footer line: `Showing {n} of {total} evaluations`.
#[must_use]
pub fn evaluations_showing_line(
    table: &TranslationTable,
    page: &EvaluationListResponse,
) -> String {
    let t = &table.evaluations;
    format!(
        "{} {} {} {} {}",
        t.showing,
        page.evaluations.len(),
        t.of,
        page.total,
        t.evaluations_text
    )
}

// ──────────────────── models ────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRow {
    pub model_version: String,
    pub total_requests: u64,
    pub total_evaluated: u64,
    pub avg_latency: String,
    pub avg_score: String,
    pub score_bucket: ScoreBucket,
    pub evaluation_rate: String,
}

#[must_use]
pub fn model_row(stat: &ModelStat) -> ModelRow {
    ModelRow {
        model_version: stat.model_version.clone(),
        total_requests: stat.total_requests,
        total_evaluated: stat.total_evaluated,
        avg_latency: format_latency(stat.avg_latency_ms),
        avg_score: format_score(stat.avg_score),
        score_bucket: score_bucket(stat.avg_score),
        evaluation_rate: evaluation_rate(stat.total_evaluated, stat.total_requests),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummaryCards {
    pub total_models: usize,
    pub best_avg_score: String,
    pub best_avg_latency: String,
}

/// Summary cards over all models. Missing scores count as 0 for the best
/// score; missing latencies are skipped for the best latency.
#[must_use]
pub fn model_summary_cards(stats: &[ModelStat]) -> ModelSummaryCards {
    let best_score = stats
        .iter()
        .map(|s| s.avg_score.unwrap_or(0.0))
        .fold(None, |best: Option<f64>, score| {
            Some(best.map_or(score, |b| b.max(score)))
        });
    let best_latency = stats
        .iter()
        .filter_map(|s| s.avg_latency_ms)
        .fold(None, |best: Option<f64>, ms| Some(best.map_or(ms, |b| b.min(ms))));

    ModelSummaryCards {
        total_models: stats.len(),
        best_avg_score: format_score(best_score),
        best_avg_latency: format_latency(best_latency),
    }
}

// ──────────────────── screen projections ────────────────────

/// Everything the overview screen shows, slice by slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub state: CombinedState,
    pub summary: LoadState<SummaryCards>,
    pub charts: LoadState<ChartSeries>,
    pub recent_activity: LoadState<Vec<RecentActivityRow>>,
}

#[must_use]
pub fn overview_view(overview: &OverviewAggregator) -> OverviewView {
    OverviewView {
        state: overview.combined(),
        summary: overview.summary().map(summary_cards),
        charts: overview.time_series().map(|points| chart_series(points)),
        recent_activity: overview.recent_logs().map(|logs| recent_activity(logs)),
    }
}

/// One rendered page of a list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPageView<R> {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub header: String,
    pub footer: String,
    pub rows: Vec<R>,
}

fn list_page_view<T: Paged, R>(
    controller: &PaginationController<T>,
    payload: &T,
    header: String,
    footer: String,
    rows: Vec<R>,
) -> ListPageView<R> {
    ListPageView {
        page: controller.page(),
        page_size: controller.page_size(),
        total: payload.total(),
        total_pages: controller.known_total_pages().unwrap_or(0),
        has_previous: controller.has_previous(),
        has_next: controller.has_next(),
        header,
        footer,
        rows,
    }
}

#[must_use]
pub fn logs_view(
    table: &TranslationTable,
    controller: &PaginationController<LogListResponse>,
) -> LoadState<ListPageView<LogRow>> {
    controller.state().map(|page| {
        list_page_view(
            controller,
            page,
            logs_page_line(table, page),
            logs_showing_line(table, page),
            page.logs.iter().map(log_row).collect(),
        )
    })
}

#[must_use]
pub fn evaluations_view(
    table: &TranslationTable,
    controller: &PaginationController<EvaluationListResponse>,
) -> LoadState<ListPageView<EvaluationRow>> {
    controller.state().map(|page| {
        list_page_view(
            controller,
            page,
            evaluations_page_line(table, page),
            evaluations_showing_line(table, page),
            page.evaluations.iter().map(evaluation_row).collect(),
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelsView {
    pub cards: ModelSummaryCards,
    pub rows: Vec<ModelRow>,
}

#[must_use]
pub fn models_view(stats: &LoadState<Vec<ModelStat>>) -> LoadState<ModelsView> {
    stats.map(|stats| ModelsView {
        cards: model_summary_cards(stats),
        rows: stats.iter().map(model_row).collect(),
    })
}
