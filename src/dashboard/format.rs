//! Pure display formatters. Every function is total over its inputs.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;

/// Marker shown wherever a value is absent.
pub const NOT_APPLICABLE: &str = "N/A";

/// Color class for a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Good,
    Warning,
    Bad,
    Neutral,
}

impl ScoreBucket {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }
}

/// `<1000` ms renders as rounded milliseconds, otherwise seconds with two
/// decimals. Ties round away from zero in both forms.
#[must_use]
pub fn format_latency(ms: Option<f64>) -> String {
    match ms {
        None => NOT_APPLICABLE.to_string(),
        Some(ms) if ms < 1000.0 => format!("{:.0}ms", ms.round()),
        Some(ms) => format!("{:.2}s", (ms / 10.0).round() / 100.0),
    }
}

/// Two decimals, ties rounded away from zero.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(
        || NOT_APPLICABLE.to_string(),
        |s| format!("{:.2}", (s * 100.0).round() / 100.0),
    )
}

/// Inclusive lower bounds: 4 and up is good, 3 and up is a warning.
#[must_use]
pub fn score_bucket(score: Option<f64>) -> ScoreBucket {
    match score {
        None => ScoreBucket::Neutral,
        Some(s) if s >= 4.0 => ScoreBucket::Good,
        Some(s) if s >= 3.0 => ScoreBucket::Warning,
        Some(_) => ScoreBucket::Bad,
    }
}

/// Code-point truncation. Text longer than `max` chars keeps the first `max`
/// chars followed by `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Like [`truncate`], with the N/A marker for absent text.
#[must_use]
pub fn truncate_opt(text: Option<&str>, max: usize) -> String {
    text.map_or_else(|| NOT_APPLICABLE.to_string(), |t| truncate(t, max))
}

/// Share of evaluated requests as a one-decimal percentage, ties rounded up.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn evaluation_rate(evaluated: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let permille = (evaluated as f64 * 1000.0 / total as f64).round();
    format!("{:.1}%", permille / 10.0)
}

/// Render a backend timestamp in the viewer's local time.
///
/// Offset-qualified timestamps are converted; naive timestamps are taken as
/// already local. Unparseable input is returned verbatim.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY).to_string();
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match naive {
        Ok(naive) => Local
            .from_local_datetime(&naive)
            .earliest()
            .map_or_else(|| naive.format(DISPLAY).to_string(), |dt| dt.format(DISPLAY).to_string()),
        Err(_) => raw.to_string(),
    }
}
