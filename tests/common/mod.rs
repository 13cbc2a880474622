#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_lqo") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "lqo.exe" } else { "lqo" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve lqo binary path for integration test"),
    }
}

/// Run `lqo` with HOME and the state file confined to `home`.
pub fn run_cli_in(case_name: &str, home: &Path, args: &[&str], envs: &[(&str, &str)]) -> CmdResult {
    let root = std::env::temp_dir().join("lqo-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let log_path = root.join(format!("{}-{}.log", sanitize(case_name), now_millis()));
    let bin_path = resolve_bin_path();

    let mut command = Command::new(&bin_path);
    command
        .args(args)
        .env("HOME", home)
        .env("LQO_STATE_FILE", home.join("state.json"))
        .env_remove("LQO_API_BASE_URL")
        .env_remove("LQO_OUTPUT_FORMAT")
        .env_remove("LQO_LOG")
        .env("RUST_BACKTRACE", "1");
    for (key, value) in envs {
        command.env(key, value);
    }
    let output = command.output().expect("execute lqo command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let mut log_content = String::new();
    log_content.push_str(&format!("case={case_name}\n"));
    log_content.push_str(&format!("bin={}\n", bin_path.display()));
    log_content.push_str(&format!("args={args:?}\n"));
    log_content.push_str(&format!("status={}\n", output.status));
    log_content.push_str("----- stdout -----\n");
    log_content.push_str(&stdout);
    log_content.push('\n');
    log_content.push_str("----- stderr -----\n");
    log_content.push_str(&stderr);
    log_content.push('\n');
    fs::write(&log_path, log_content).expect("write test log");

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}

/// Parse the single JSON line a `--json` invocation prints.
pub fn json_line(result: &CmdResult) -> serde_json::Value {
    let line = result
        .stdout
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_else(|| panic!("no stdout; log: {}", result.log_path.display()));
    serde_json::from_str(line)
        .unwrap_or_else(|e| panic!("invalid json ({e}); log: {}", result.log_path.display()))
}

// ──────────────────── fake backend ────────────────────

/// Serve HTTP on an ephemeral port, answering each request with
/// `route(path_and_query)`. Returns the base URL.
pub fn serve_routes<F>(route: F) -> String
where
    F: Fn(&str) -> String + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
    let addr = listener.local_addr().expect("fake backend addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut header = String::new();
                match reader.read_line(&mut header) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if header == "\r\n" => break,
                    Ok(_) => {}
                }
            }
            let target = request_line.split_whitespace().nth(1).unwrap_or("/");
            let _ = stream.write_all(route(target).as_bytes());
        }
    });
    format!("http://{addr}")
}

pub fn ok_json(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

pub fn server_error() -> String {
    "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        .to_string()
}

pub fn query_u32(target: &str, key: &str) -> Option<u32> {
    let (_, query) = target.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
}

/// A logs page over `total` synthetic records, shaped like the backend's.
pub fn logs_page_json(total: u32, page: u32, page_size: u32) -> String {
    let total_pages = total.div_ceil(page_size.max(1));
    let start = (page.saturating_sub(1) * page_size).min(total);
    let end = (start + page_size).min(total);
    let logs: Vec<serde_json::Value> = (start..end)
        .map(|i| {
            serde_json::json!({
                "id": i + 1,
                "created_at": "2025-03-01T12:00:00Z",
                "user_id": null,
                "prompt": format!("prompt {}", i + 1),
                "response": "ok",
                "model_version": "gpt-4o-mini",
                "latency_ms": 250.0,
                "status": if i % 4 == 0 { "error" } else { "success" },
            })
        })
        .collect();
    serde_json::json!({
        "logs": logs,
        "total": total,
        "page": page,
        "page_size": page_size,
        "total_pages": total_pages,
    })
    .to_string()
}
