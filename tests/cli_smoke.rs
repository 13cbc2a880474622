//! CLI smoke tests: run the `lqo` binary against a throwaway HOME and a
//! fake backend.

mod common;

use common::{json_line, logs_page_json, ok_json, query_u32, run_cli_in, serve_routes, server_error};

const SUMMARY_BODY: &str =
    r#"{"total_logs":42,"total_evaluated":7,"avg_latency_ms":812.4,"avg_score":4.1}"#;

fn dashboard_backend(time_series_fails: bool) -> String {
    serve_routes(move |target| {
        if target.starts_with("/api/dashboard/summary") {
            ok_json(SUMMARY_BODY)
        } else if target.starts_with("/api/dashboard/timeseries") {
            if time_series_fails {
                server_error()
            } else {
                ok_json(
                    r#"{"data":[{"date":"2025-03-01","avg_score":4.0,"avg_latency_ms":300.0,"total_requests":10,"total_evaluated":4}]}"#,
                )
            }
        } else if target.starts_with("/api/dashboard/logs") {
            let page = query_u32(target, "page").unwrap_or(1);
            let page_size = query_u32(target, "page_size").unwrap_or(10);
            ok_json(&logs_page_json(25, page, page_size))
        } else if target.starts_with("/api/dashboard/models/stats") {
            ok_json(
                r#"{"models":[{"model_version":"gpt-4o-mini","total_requests":10,"avg_latency_ms":450.0,"avg_score":4.4,"total_evaluated":5}]}"#,
            )
        } else {
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        }
    })
}

#[test]
fn help_command_prints_usage() {
    let home = tempfile::tempdir().unwrap();
    let result = run_cli_in("help_command_prints_usage", home.path(), &["--help"], &[]);
    assert!(
        result.status.success(),
        "expected success; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stdout.contains("Usage: lqo [OPTIONS] <COMMAND>"),
        "missing help banner; log: {}",
        result.log_path.display()
    );
}

#[test]
fn completions_generate_for_bash() {
    let home = tempfile::tempdir().unwrap();
    let result = run_cli_in("completions_bash", home.path(), &["completions", "bash"], &[]);
    assert!(result.status.success(), "log: {}", result.log_path.display());
    assert!(result.stdout.contains("lqo"));
}

#[test]
fn locale_list_reports_default_english() {
    let home = tempfile::tempdir().unwrap();
    let result = run_cli_in("locale_list", home.path(), &["--json", "locale", "list"], &[]);
    assert!(result.status.success(), "log: {}", result.log_path.display());

    let payload = json_line(&result);
    let locales = payload["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 4);
    let active: Vec<&str> = locales
        .iter()
        .filter(|l| l["active"] == true)
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(active, ["en"]);
}

#[test]
fn locale_set_persists_and_override_does_not() {
    let home = tempfile::tempdir().unwrap();
    let set = run_cli_in("locale_set_ko", home.path(), &["--json", "locale", "set", "ko"], &[]);
    assert!(set.status.success(), "log: {}", set.log_path.display());
    let payload = json_line(&set);
    assert_eq!(payload["previous"], "en");
    assert_eq!(payload["locale"], "ko");
    assert_eq!(payload["persisted"], true);

    let show = run_cli_in("locale_show_ko", home.path(), &["--json", "locale", "show"], &[]);
    assert_eq!(json_line(&show)["locale"], "ko");

    let overridden = run_cli_in(
        "locale_show_override",
        home.path(),
        &["--json", "--locale", "ja", "locale", "show"],
        &[],
    );
    assert_eq!(json_line(&overridden)["locale"], "ja");

    let raw = std::fs::read_to_string(home.path().join("state.json")).unwrap();
    assert!(raw.contains("\"ko\""), "state file: {raw}");
}

#[test]
fn unsupported_locale_exits_with_user_error() {
    let home = tempfile::tempdir().unwrap();
    let result = run_cli_in("locale_set_fr", home.path(), &["locale", "set", "fr"], &[]);
    assert_eq!(result.status.code(), Some(1), "log: {}", result.log_path.display());
    assert!(result.stderr.contains("lqo: unsupported locale"));
    assert!(!home.path().join("state.json").exists());
}

#[test]
fn overview_against_unreachable_backend_fails_every_slice() {
    let home = tempfile::tempdir().unwrap();
    let result = run_cli_in(
        "overview_unreachable",
        home.path(),
        &["--json", "overview"],
        &[
            ("LQO_API_BASE_URL", "http://127.0.0.1:9"),
            ("LQO_API_CONNECT_TIMEOUT_MS", "500"),
        ],
    );
    assert_eq!(result.status.code(), Some(2), "log: {}", result.log_path.display());

    let view = &json_line(&result)["view"];
    assert_eq!(view["state"], "settled");
    for slice in ["summary", "charts", "recent_activity"] {
        assert_eq!(view[slice]["state"], "failed", "slice {slice}");
    }
    assert!(result.stderr.contains("lqo: overview unavailable"));
}

#[test]
fn overview_renders_partial_success() {
    let home = tempfile::tempdir().unwrap();
    let base = dashboard_backend(true);
    let result = run_cli_in(
        "overview_partial",
        home.path(),
        &["--json", "overview"],
        &[("LQO_API_BASE_URL", base.as_str())],
    );
    assert_eq!(result.status.code(), Some(4), "log: {}", result.log_path.display());

    let view = &json_line(&result)["view"];
    assert_eq!(view["summary"]["state"], "ready");
    assert_eq!(view["summary"]["value"]["total_logs"], 42);
    assert_eq!(view["summary"]["value"]["avg_latency"], "812ms");
    assert_eq!(view["charts"]["state"], "failed");
    assert_eq!(view["charts"]["value"], "API Error: Internal Server Error");
    assert_eq!(view["recent_activity"]["state"], "ready");
    assert_eq!(view["recent_activity"]["value"].as_array().unwrap().len(), 5);
}

#[test]
fn logs_page_renders_human_table() {
    let home = tempfile::tempdir().unwrap();
    let base = dashboard_backend(false);
    let result = run_cli_in(
        "logs_page_two",
        home.path(),
        &["--no-color", "logs", "--page", "2"],
        &[("LQO_API_BASE_URL", base.as_str()), ("LQO_OUTPUT_FORMAT", "human")],
    );
    assert!(result.status.success(), "log: {}", result.log_path.display());
    assert!(result.stdout.contains("25 logs | Page 2 of 3"));
    assert!(result.stdout.contains("Showing 10 of 25 logs"));
    assert!(result.stdout.contains("prompt 11"));
    assert!(!result.stdout.contains("prompt 1 "));
}

#[test]
fn logs_page_past_end_moves_to_last_page() {
    let home = tempfile::tempdir().unwrap();
    let base = dashboard_backend(false);
    let result = run_cli_in(
        "logs_page_past_end",
        home.path(),
        &["--json", "logs", "--page", "9"],
        &[("LQO_API_BASE_URL", base.as_str())],
    );
    assert!(result.status.success(), "log: {}", result.log_path.display());

    let view = &json_line(&result)["view"];
    assert_eq!(view["state"], "ready");
    assert_eq!(view["value"]["page"], 3);
    assert_eq!(view["value"]["has_next"], false);
    assert_eq!(view["value"]["rows"].as_array().unwrap().len(), 5);
}

#[test]
fn models_screen_in_korean() {
    let home = tempfile::tempdir().unwrap();
    let base = dashboard_backend(false);
    let result = run_cli_in(
        "models_ko",
        home.path(),
        &["--no-color", "--locale", "ko", "models"],
        &[("LQO_API_BASE_URL", base.as_str()), ("LQO_OUTPUT_FORMAT", "human")],
    );
    assert!(result.status.success(), "log: {}", result.log_path.display());
    assert!(result.stdout.contains("gpt-4o-mini"));
    assert!(result.stdout.contains("50.0%"));
    assert!(!home.path().join("state.json").exists());
}
