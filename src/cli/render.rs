//! Plain-text renderer for dashboard screens.
//!
//! Consumes the view projections in [`crate::dashboard::views`] and the
//! active translation table. Color goes through `colored`, so `--no-color`
//! (or a non-terminal stdout) strips it globally.

#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::dashboard::format::ScoreBucket;
use crate::dashboard::load_state::LoadState;
use crate::dashboard::views::{
    ChartPoint, ChartSeries, EvaluationRow, ListPageView, LogRow, ModelsView, OverviewView,
};
use crate::i18n::{Locale, TranslationTable};

// ──────────────────── sparkline characters ────────────────────

/// Unicode block characters for sparkline rendering (8 levels).
const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Gap marker for days without a value.
const SPARK_GAP: char = '·';

// ──────────────────── color mapping ────────────────────

fn bucket_paint(bucket: ScoreBucket) -> fn(&str) -> ColoredString {
    match bucket {
        ScoreBucket::Good => |s| s.green(),
        ScoreBucket::Warning => |s| s.yellow(),
        ScoreBucket::Bad => |s| s.red(),
        ScoreBucket::Neutral => |s| s.normal(),
    }
}

// ──────────────────── layout helpers ────────────────────

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Column-aligned table. `cells` are plain text; `paint` may color a cell
/// after padding so escape codes do not skew widths.
struct TextTable<'a> {
    headers: Vec<&'a str>,
    rows: Vec<Vec<(String, Option<fn(&str) -> ColoredString>)>>,
}

impl<'a> TextTable<'a> {
    fn new(headers: Vec<&'a str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<(String, Option<fn(&str) -> ColoredString>)>) {
        self.rows.push(row);
    }

    fn render(&self, out: &mut String) {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (idx, (cell, _)) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        let _ = writeln!(out, "{}", header.join("  ").trim_end().bold());

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|((cell, paint), w)| {
                    let padded = pad(cell, *w);
                    paint.map_or(padded.clone(), |paint| paint(&padded).to_string())
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        }
    }
}

fn plain(text: impl Into<String>) -> (String, Option<fn(&str) -> ColoredString>) {
    (text.into(), None)
}

fn bucket_cell(text: &str, bucket: ScoreBucket) -> (String, Option<fn(&str) -> ColoredString>) {
    (text.to_string(), Some(bucket_paint(bucket)))
}

fn status_cell(text: &str, success: bool) -> (String, Option<fn(&str) -> ColoredString>) {
    let paint: fn(&str) -> ColoredString = if success {
        |s| s.green()
    } else {
        |s| s.red()
    };
    (text.to_string(), Some(paint))
}

fn title(out: &mut String, heading: &str, subtitle: &str) {
    let _ = writeln!(out, "{}", heading.bold());
    let _ = writeln!(out, "{}", subtitle.dimmed());
    out.push('\n');
}

fn slice_notice<T>(out: &mut String, table: &TranslationTable, state: &LoadState<T>) {
    match state {
        LoadState::Idle | LoadState::Loading => {
            let _ = writeln!(out, "{}", table.common.loading.dimmed());
        }
        LoadState::Failed(message) => {
            let _ = writeln!(out, "{}", format!("{} {message}", table.common.error).red());
        }
        LoadState::Ready(_) => {}
    }
}

// ──────────────────── sparklines ────────────────────

/// Render a sparkline scaled between the series min and max.
fn render_sparkline(values: &[Option<f64>]) -> String {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let (Some(min), Some(max)) = (
        present.iter().copied().reduce(f64::min),
        present.iter().copied().reduce(f64::max),
    ) else {
        return SPARK_GAP.to_string().repeat(values.len());
    };
    let span = max - min;

    values
        .iter()
        .map(|value| match value {
            None => SPARK_GAP,
            Some(v) => {
                let normalized = if span > 0.0 { (v - min) / span } else { 0.5 };
                let idx = (normalized.clamp(0.0, 1.0) * 7.0).round() as usize;
                SPARK_CHARS[idx.min(7)]
            }
        })
        .collect()
}

fn series_values(points: &[ChartPoint]) -> Vec<Option<f64>> {
    points.iter().map(|p| p.value).collect()
}

fn date_range(series: &ChartSeries) -> String {
    match (series.volume.first(), series.volume.last()) {
        (Some(first), Some(last)) => format!("{} .. {}", first.date, last.date),
        _ => String::new(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn render_charts(out: &mut String, table: &TranslationTable, series: &ChartSeries) {
    let range = date_range(series);
    let _ = writeln!(out, "{}", table.overview.quality_trend.bold());
    let _ = writeln!(out, "  {}  {range}", render_sparkline(&series_values(&series.quality)));
    let _ = writeln!(out, "{}", table.overview.latency_trend.bold());
    let _ = writeln!(out, "  {}  {range}", render_sparkline(&series_values(&series.latency)));

    let requests: Vec<Option<f64>> = series
        .volume
        .iter()
        .map(|p| Some(p.requests as f64))
        .collect();
    let evaluated: Vec<Option<f64>> = series
        .volume
        .iter()
        .map(|p| Some(p.evaluated as f64))
        .collect();
    let _ = writeln!(out, "{}", table.overview.volume_trend.bold());
    let _ = writeln!(
        out,
        "  {}  {}",
        render_sparkline(&requests),
        table.models.total_requests
    );
    let _ = writeln!(
        out,
        "  {}  {}",
        render_sparkline(&evaluated),
        table.overview.evaluated
    );
}

// ──────────────────── screens ────────────────────

#[must_use]
pub fn render_overview(table: &TranslationTable, view: &OverviewView) -> String {
    let mut out = String::new();
    title(&mut out, table.overview.title, table.overview.subtitle);

    match &view.summary {
        LoadState::Ready(cards) => {
            let _ = writeln!(
                out,
                "{:<22}{}",
                table.overview.total_logs,
                cards.total_logs
            );
            let _ = writeln!(
                out,
                "{:<22}{}",
                table.overview.evaluated,
                cards.total_evaluated
            );
            let _ = writeln!(
                out,
                "{:<22}{}",
                table.overview.avg_latency,
                cards.avg_latency
            );
            let _ = writeln!(
                out,
                "{:<22}{}",
                table.overview.avg_score,
                bucket_paint(cards.score_bucket)(&cards.avg_score)
            );
        }
        other => slice_notice(&mut out, table, other),
    }
    out.push('\n');

    match &view.charts {
        LoadState::Ready(series) => render_charts(&mut out, table, series),
        other => slice_notice(&mut out, table, other),
    }
    out.push('\n');

    let _ = writeln!(out, "{}", table.overview.recent_activity.bold());
    match &view.recent_activity {
        LoadState::Ready(rows) if rows.is_empty() => {
            let _ = writeln!(out, "{}", table.logs.no_logs.dimmed());
        }
        LoadState::Ready(rows) => {
            let mut grid = TextTable::new(vec![
                table.logs.id,
                table.logs.created_at,
                table.logs.model,
                table.logs.prompt,
                table.logs.latency,
            ]);
            for row in rows {
                grid.push(vec![
                    plain(row.id.to_string()),
                    plain(row.created_at.clone()),
                    plain(row.model.clone()),
                    plain(row.prompt.clone()),
                    status_cell(&row.latency, row.success),
                ]);
            }
            grid.render(&mut out);
        }
        other => slice_notice(&mut out, table, other),
    }
    out
}

#[must_use]
pub fn render_logs(table: &TranslationTable, view: &LoadState<ListPageView<LogRow>>) -> String {
    let t = &table.logs;
    let mut out = String::new();
    title(&mut out, t.title, t.subtitle);
    let _ = writeln!(out, "{}", t.table_title.bold());

    match view {
        LoadState::Ready(page) => {
            let _ = writeln!(out, "{}", page.header.dimmed());
            if page.rows.is_empty() {
                let _ = writeln!(out, "{}", t.no_logs.dimmed());
                return out;
            }
            let mut grid = TextTable::new(vec![
                t.id,
                t.created_at,
                t.user_id,
                t.prompt,
                t.response,
                t.model,
                t.latency,
                t.status,
            ]);
            for row in &page.rows {
                grid.push(vec![
                    plain(row.id.to_string()),
                    plain(row.created_at.clone()),
                    plain(row.user_id.clone()),
                    plain(row.prompt.clone()),
                    plain(row.response.clone()),
                    plain(row.model.clone()),
                    plain(row.latency.clone()),
                    status_cell(&row.status, row.success),
                ]);
            }
            grid.render(&mut out);
            render_pager(&mut out, &page.footer, t.previous, t.next, page.has_previous, page.has_next);
        }
        other => slice_notice(&mut out, table, other),
    }
    out
}

#[must_use]
pub fn render_evaluations(
    table: &TranslationTable,
    view: &LoadState<ListPageView<EvaluationRow>>,
) -> String {
    let t = &table.evaluations;
    let mut out = String::new();
    title(&mut out, t.title, t.subtitle);
    let _ = writeln!(out, "{}", t.table_title.bold());

    match view {
        LoadState::Ready(page) => {
            let _ = writeln!(out, "{}", page.header.dimmed());
            if page.rows.is_empty() {
                let _ = writeln!(out, "{}", t.no_evaluations.dimmed());
                return out;
            }
            let mut grid = TextTable::new(vec![
                t.id,
                t.created_at,
                t.log_id,
                t.prompt,
                t.response,
                t.score,
                t.label,
                t.judge,
                t.comment,
            ]);
            for row in &page.rows {
                grid.push(vec![
                    plain(row.id.to_string()),
                    plain(row.created_at.clone()),
                    plain(row.log_id.to_string()),
                    plain(row.prompt.clone()),
                    plain(row.response.clone()),
                    bucket_cell(&row.score, row.score_bucket),
                    plain(row.label.clone()),
                    plain(row.judge.clone()),
                    plain(row.comment.clone()),
                ]);
            }
            grid.render(&mut out);
            render_pager(&mut out, &page.footer, t.previous, t.next, page.has_previous, page.has_next);
        }
        other => slice_notice(&mut out, table, other),
    }
    out
}

fn render_pager(
    out: &mut String,
    footer: &str,
    previous: &str,
    next: &str,
    has_previous: bool,
    has_next: bool,
) {
    let prev = if has_previous {
        format!("[{previous}]").normal()
    } else {
        format!("[{previous}]").dimmed()
    };
    let next = if has_next {
        format!("[{next}]").normal()
    } else {
        format!("[{next}]").dimmed()
    };
    let _ = writeln!(out, "{}  {prev} {next}", footer.dimmed());
}

#[must_use]
pub fn render_models(table: &TranslationTable, view: &LoadState<ModelsView>) -> String {
    let t = &table.models;
    let mut out = String::new();
    title(&mut out, t.title, t.subtitle);

    let LoadState::Ready(models) = view else {
        slice_notice(&mut out, table, view);
        return out;
    };

    let _ = writeln!(out, "{}", t.table_title.bold());
    if models.rows.is_empty() {
        let _ = writeln!(out, "{}", t.no_models.dimmed());
        return out;
    }

    let mut grid = TextTable::new(vec![
        t.model_version,
        t.total_requests,
        t.evaluated_count,
        t.avg_latency,
        t.avg_score,
        t.evaluation_rate,
    ]);
    for row in &models.rows {
        grid.push(vec![
            plain(row.model_version.clone()),
            plain(row.total_requests.to_string()),
            plain(row.total_evaluated.to_string()),
            plain(row.avg_latency.clone()),
            bucket_cell(&row.avg_score, row.score_bucket),
            plain(row.evaluation_rate.clone()),
        ]);
    }
    grid.render(&mut out);
    out.push('\n');

    let cards = &models.cards;
    let _ = writeln!(out, "{:<22}{}  {}", t.total_models, cards.total_models, t.total_models_desc.dimmed());
    let _ = writeln!(out, "{:<22}{}  {}", t.best_avg_score, cards.best_avg_score, t.best_avg_score_desc.dimmed());
    let _ = writeln!(
        out,
        "{:<22}{}  {}",
        t.best_avg_latency,
        cards.best_avg_latency,
        t.best_avg_latency_desc.dimmed()
    );
    out
}

/// Language switcher listing with the active locale marked.
#[must_use]
pub fn render_locales(current: Locale) -> String {
    let mut out = String::new();
    for locale in Locale::ALL {
        let marker = if locale == current { "*" } else { " " };
        let line = format!("{marker} {}  {}", locale.code(), locale.native_name());
        if locale == current {
            let _ = writeln!(out, "{}", line.bold());
        } else {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}
