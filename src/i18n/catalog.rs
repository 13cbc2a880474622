//! Fixed-shape UI string tables and the structural catalog check.
//!
//! Every locale is a value of the same [`TranslationTable`] type, so a table
//! missing a field does not compile. [`verify_catalog`] re-checks the flattened
//! key sets at startup so a serializer rename or a blank string is caught
//! before any view renders.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use super::Locale;
use crate::core::errors::{LqoError, Result};

// ──────────────────── table shape ────────────────────

/// Complete set of UI strings for one locale.
///
/// Serialized key paths use the camelCase names the dashboard has always
/// used (`overview.welcomeDesc`, `evaluations.llmBased`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationTable {
    pub nav: NavText,
    pub overview: OverviewText,
    pub logs: LogsText,
    pub evaluations: EvaluationsText,
    pub models: ModelsText,
    pub common: CommonText,
}

/// Navigation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavText {
    pub overview: &'static str,
    pub logs: &'static str,
    pub evaluations: &'static str,
    pub models: &'static str,
}

/// Overview screen strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub total_logs: &'static str,
    pub total_logs_desc: &'static str,
    pub evaluated: &'static str,
    pub evaluated_desc: &'static str,
    pub avg_latency: &'static str,
    pub avg_latency_desc: &'static str,
    pub avg_score: &'static str,
    pub avg_score_desc: &'static str,
    pub quality_trend: &'static str,
    pub latency_trend: &'static str,
    pub volume_trend: &'static str,
    pub recent_activity: &'static str,
}

/// Logs screen strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub table_title: &'static str,
    pub id: &'static str,
    pub created_at: &'static str,
    pub user_id: &'static str,
    pub prompt: &'static str,
    pub response: &'static str,
    pub model: &'static str,
    pub latency: &'static str,
    pub status: &'static str,
    pub showing: &'static str,
    pub of: &'static str,
    pub logs_text: &'static str,
    pub page: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub no_logs: &'static str,
}

/// Evaluations screen strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub table_title: &'static str,
    pub total: &'static str,
    pub evaluations_text: &'static str,
    pub id: &'static str,
    pub created_at: &'static str,
    pub log_id: &'static str,
    pub prompt: &'static str,
    pub response: &'static str,
    pub score: &'static str,
    pub score_instruction: &'static str,
    pub score_truthfulness: &'static str,
    pub label: &'static str,
    pub judge: &'static str,
    pub judge_type: &'static str,
    pub comment: &'static str,
    pub showing: &'static str,
    pub of: &'static str,
    pub page: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub no_evaluations: &'static str,
    pub rule_based: &'static str,
    pub llm_based: &'static str,
}

/// Models screen strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub table_title: &'static str,
    pub model_version: &'static str,
    pub total_requests: &'static str,
    pub evaluated_count: &'static str,
    pub avg_latency: &'static str,
    pub avg_score: &'static str,
    pub evaluation_rate: &'static str,
    pub total_models: &'static str,
    pub total_models_desc: &'static str,
    pub best_avg_score: &'static str,
    pub best_avg_score_desc: &'static str,
    pub best_avg_latency: &'static str,
    pub best_avg_latency_desc: &'static str,
    pub no_models: &'static str,
}

/// Strings shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonText {
    pub loading: &'static str,
    pub error: &'static str,
    pub na: &'static str,
}

// ──────────────────── resolution ────────────────────

/// Table for `locale`. Pure and total.
#[must_use]
pub fn resolve(locale: Locale) -> &'static TranslationTable {
    match locale {
        Locale::En => &super::en::EN,
        Locale::Ko => &super::ko::KO,
        Locale::Ja => &super::ja::JA,
        Locale::Zh => &super::zh::ZH,
    }
}

/// Look up a string by dotted key path, e.g. `models.noModels`.
#[must_use]
pub fn lookup(locale: Locale, path: &str) -> Option<String> {
    let value = serde_json::to_value(resolve(locale)).ok()?;
    let mut node = &value;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(str::to_string)
}

/// Flattened dotted key paths of one table.
pub fn key_paths(table: &TranslationTable) -> Result<BTreeSet<String>> {
    let value = serde_json::to_value(table)?;
    let mut out = BTreeSet::new();
    flatten("", &value, &mut out);
    Ok(out)
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (key, child) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            flatten(&path, child, out);
        }
    } else {
        out.insert(prefix.to_string());
    }
}

/// Check that every locale exposes exactly the `en` key set with no blank strings.
pub fn verify_catalog() -> Result<()> {
    let reference = key_paths(resolve(Locale::En))?;

    for locale in Locale::ALL {
        let keys = key_paths(resolve(locale))?;
        let missing: Vec<&String> = reference.difference(&keys).collect();
        let extra: Vec<&String> = keys.difference(&reference).collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(LqoError::Runtime {
                details: format!(
                    "translation table {} diverges from en: missing {missing:?}, extra {extra:?}",
                    locale.code()
                ),
            });
        }

        let blank: Vec<&String> = keys
            .iter()
            .filter(|path| lookup(locale, path).is_none_or(|text| text.trim().is_empty()))
            .collect();
        if !blank.is_empty() {
            return Err(LqoError::Runtime {
                details: format!(
                    "translation table {} has blank strings: {blank:?}",
                    locale.code()
                ),
            });
        }
    }

    tracing::debug!(keys = reference.len(), "translation catalog verified");
    Ok(())
}
