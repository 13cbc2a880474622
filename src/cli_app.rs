//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::control;
use serde_json::{Value, json};
use thiserror::Error;

use llm_quality_observer::api::client::HttpDashboardApi;
use llm_quality_observer::cli::render;
use llm_quality_observer::core::config::Config;
use llm_quality_observer::core::errors::LqoError;
use llm_quality_observer::dashboard::load_state::LoadState;
use llm_quality_observer::dashboard::locale_store::{
    JsonFileStore, KeyValueStore, LOCALE_KEY, LocaleStore, MemoryStore, ViewContext,
};
use llm_quality_observer::dashboard::model::{DashboardMsg, Screen};
use llm_quality_observer::dashboard::overview::SLICE_COUNT;
use llm_quality_observer::dashboard::runtime::{DEFAULT_SETTLE_TIMEOUT, DashboardSession};
use llm_quality_observer::dashboard::views;
use llm_quality_observer::i18n::{Locale, verify_catalog};
use llm_quality_observer::logging::{self, Verbosity};

/// LLM Quality Observer: read-only dashboard over an LLM serving backend.
#[derive(Debug, Parser)]
#[command(
    name = "lqo",
    author,
    version,
    about = "LLM Quality Observer - quality dashboard for LLM serving",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Render with this locale for one invocation without persisting it.
    #[arg(long, global = true, value_name = "CODE")]
    locale: Option<String>,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Summary cards, 30-day trends, and recent activity.
    Overview,
    /// One page of request logs.
    Logs(PageArgs),
    /// One page of quality evaluations.
    Evaluations(PageArgs),
    /// Per-model comparison.
    Models,
    /// Show, list, or switch the display language.
    Locale(LocaleArgs),
    /// Inspect configuration.
    Config(ConfigArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct PageArgs {
    /// Page to show (1-based).
    #[arg(long, default_value_t = 1, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
}

#[derive(Debug, Clone, Args)]
struct LocaleArgs {
    #[command(subcommand)]
    command: Option<LocaleCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum LocaleCommand {
    /// Print the active locale.
    Show,
    /// List supported locales.
    List,
    /// Switch and persist the active locale.
    Set {
        /// Locale code (en, ko, ja, zh).
        code: String,
    },
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Print the config file path.
    Path,
    /// Print the effective configuration.
    Show,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// Operation partially succeeded.
    #[error("{0}")]
    Partial(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Internal(_) | Self::Json(_) => 3,
            Self::Partial(_) => 4,
        }
    }
}

impl From<LqoError> for CliError {
    fn from(err: LqoError) -> Self {
        match err {
            LqoError::InvalidConfig { .. }
            | LqoError::MissingConfig { .. }
            | LqoError::ConfigParse { .. } => {
                Self::User(err.to_string())
            }
            LqoError::ContextMissing { .. } | LqoError::ChannelClosed { .. } => {
                Self::Internal(err.to_string())
            }
            _ => Self::Runtime(err.to_string()),
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));
    verify_catalog().map_err(|e| CliError::Internal(e.to_string()))?;

    match &cli.command {
        Command::Overview => run_overview(cli),
        Command::Logs(args) => run_logs(cli, args),
        Command::Evaluations(args) => run_evaluations(cli, args),
        Command::Models => run_models(cli),
        Command::Locale(args) => run_locale(cli, args),
        Command::Config(args) => run_config(cli, args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

// ──────────────────── session wiring ────────────────────

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    Ok(Config::load(cli.config.as_deref())?)
}

fn parse_locale(code: &str) -> Result<Locale, CliError> {
    code.parse::<Locale>()
        .map_err(|_| CliError::User(format!("unsupported locale {code:?} (expected en, ko, ja, or zh)")))
}

/// Locale store for this invocation. `--locale` seeds a throwaway in-memory
/// store so the override is never written to the state file.
fn locale_store(cli: &Cli, config: &Config) -> Result<Arc<LocaleStore>, CliError> {
    let storage: Box<dyn KeyValueStore> = match cli.locale.as_deref() {
        Some(code) => {
            let locale = parse_locale(code)?;
            Box::new(MemoryStore::with_entry(LOCALE_KEY, locale.code()))
        }
        None => Box::new(JsonFileStore::new(config.paths.state_file.clone())),
    };
    Ok(Arc::new(LocaleStore::load(storage)))
}

/// Open `screen`, run `prepare`, and block until every fetch has settled.
fn settled_session(
    cli: &Cli,
    screen: Screen,
    prepare: impl FnOnce(&mut DashboardSession) -> Result<(), LqoError>,
) -> Result<DashboardSession, CliError> {
    let config = load_config(cli)?;
    let store = locale_store(cli, &config)?;
    let api = HttpDashboardApi::new(&config.api);
    tracing::debug!(base_url = api.base_url(), ?screen, "opening dashboard session");

    let mut session = DashboardSession::new(Arc::new(api), ViewContext::new(store))?;
    session.open(screen)?;
    prepare(&mut session)?;
    session.wait_idle(DEFAULT_SETTLE_TIMEOUT)?;
    session.close();
    Ok(session)
}

// ──────────────────── screens ────────────────────

fn run_overview(cli: &Cli) -> Result<(), CliError> {
    let session = settled_session(cli, Screen::Overview, |_| Ok(()))?;
    let view = views::overview_view(&session.model().overview);
    let locale = session.model().locale;

    match output_mode(cli) {
        OutputMode::Human => {
            print!("{}", render::render_overview(session.translations(), &view));
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "overview",
                "locale": locale,
                "view": serde_json::to_value(&view)?,
            });
            write_json_line(&payload)?;
        }
    }

    let failures = session.model().overview.failures();
    match failures.len() {
        0 => Ok(()),
        SLICE_COUNT => Err(CliError::Runtime(format!(
            "overview unavailable: {}",
            failures.join("; ")
        ))),
        n => Err(CliError::Partial(format!(
            "{n} of {SLICE_COUNT} overview sections failed to load"
        ))),
    }
}

fn run_logs(cli: &Cli, args: &PageArgs) -> Result<(), CliError> {
    let page = args.page;
    let session = settled_session(cli, Screen::Logs, |session| {
        if page > 1 {
            session.dispatch(DashboardMsg::GoToPage(page))?;
        }
        Ok(())
    })?;
    let table = session.translations();
    let view = views::logs_view(table, &session.model().logs);

    match output_mode(cli) {
        OutputMode::Human => print!("{}", render::render_logs(table, &view)),
        OutputMode::Json => {
            let payload = json!({
                "command": "logs",
                "requested_page": page,
                "view": serde_json::to_value(&view)?,
            });
            write_json_line(&payload)?;
        }
    }
    list_outcome("logs", &view)
}

fn run_evaluations(cli: &Cli, args: &PageArgs) -> Result<(), CliError> {
    let page = args.page;
    let session = settled_session(cli, Screen::Evaluations, |session| {
        if page > 1 {
            session.dispatch(DashboardMsg::GoToPage(page))?;
        }
        Ok(())
    })?;
    let table = session.translations();
    let view = views::evaluations_view(table, &session.model().evaluations);

    match output_mode(cli) {
        OutputMode::Human => print!("{}", render::render_evaluations(table, &view)),
        OutputMode::Json => {
            let payload = json!({
                "command": "evaluations",
                "requested_page": page,
                "view": serde_json::to_value(&view)?,
            });
            write_json_line(&payload)?;
        }
    }
    list_outcome("evaluations", &view)
}

fn list_outcome<T>(what: &str, view: &LoadState<T>) -> Result<(), CliError> {
    view.error().map_or(Ok(()), |message| {
        Err(CliError::Runtime(format!("{what} unavailable: {message}")))
    })
}

fn run_models(cli: &Cli) -> Result<(), CliError> {
    let session = settled_session(cli, Screen::Models, |_| Ok(()))?;
    let table = session.translations();
    let view = views::models_view(session.model().models.state());

    match output_mode(cli) {
        OutputMode::Human => print!("{}", render::render_models(table, &view)),
        OutputMode::Json => {
            let payload = json!({
                "command": "models",
                "view": serde_json::to_value(&view)?,
            });
            write_json_line(&payload)?;
        }
    }
    list_outcome("models", &view)
}

// ──────────────────── locale ────────────────────

fn run_locale(cli: &Cli, args: &LocaleArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;

    match &args.command {
        None | Some(LocaleCommand::Show) => {
            let current = locale_store(cli, &config)?.current();
            match output_mode(cli) {
                OutputMode::Human => println!("{} ({})", current.code(), current.native_name()),
                OutputMode::Json => write_json_line(&json!({
                    "command": "locale show",
                    "locale": current,
                    "name": current.native_name(),
                }))?,
            }
            Ok(())
        }
        Some(LocaleCommand::List) => {
            let current = locale_store(cli, &config)?.current();
            match output_mode(cli) {
                OutputMode::Human => print!("{}", render::render_locales(current)),
                OutputMode::Json => {
                    let locales: Vec<Value> = Locale::ALL
                        .iter()
                        .map(|locale| {
                            json!({
                                "code": locale,
                                "name": locale.native_name(),
                                "active": *locale == current,
                            })
                        })
                        .collect();
                    write_json_line(&json!({
                        "command": "locale list",
                        "locales": locales,
                    }))?;
                }
            }
            Ok(())
        }
        Some(LocaleCommand::Set { code }) => {
            let locale = parse_locale(code)?;
            // Switching always targets the persisted store, even under --locale.
            let state_file = config.paths.state_file.clone();
            let store = LocaleStore::load(Box::new(JsonFileStore::new(state_file.clone())));
            let previous = store.current();
            let persisted = store.set_locale(locale);

            match output_mode(cli) {
                OutputMode::Human => {
                    println!("{} -> {}", previous.code(), locale.code());
                }
                OutputMode::Json => write_json_line(&json!({
                    "command": "locale set",
                    "previous": previous,
                    "locale": locale,
                    "persisted": persisted,
                    "state_file": state_file.to_string_lossy(),
                }))?,
            }

            if persisted {
                Ok(())
            } else {
                Err(CliError::Partial(format!(
                    "locale switched to {locale} but could not be saved to {}",
                    state_file.display()
                )))
            }
        }
    }
}

// ──────────────────── config ────────────────────

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    match &args.command {
        None | Some(ConfigCommand::Path) => {
            let path = cli.config.clone().unwrap_or_else(Config::default_path);
            let exists = path.exists();

            match output_mode(cli) {
                OutputMode::Human => {
                    println!("{}", path.display());
                    if !exists {
                        println!("  (file does not exist; defaults will be used)");
                    }
                }
                OutputMode::Json => {
                    let payload = json!({
                        "command": "config path",
                        "path": path.to_string_lossy(),
                        "exists": exists,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Show) => {
            let config = load_config(cli)?;

            match output_mode(cli) {
                OutputMode::Human => {
                    let toml_str = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::Runtime(format!("serialize config: {e}")))?;
                    println!("{toml_str}");
                }
                OutputMode::Json => {
                    let value = serde_json::to_value(&config)?;
                    let payload = json!({
                        "command": "config show",
                        "config": value,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
    }
}

// ──────────────────── output ────────────────────

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("LQO_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref(), io::stdout().is_terminal())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>, stdout_is_tty: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    let fallback = if stdout_is_tty {
        OutputMode::Human
    } else {
        OutputMode::Json
    };

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        Some("human") => OutputMode::Human,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_before_and_after_subcommand() {
        let before = Cli::try_parse_from([
            "lqo",
            "--config",
            "/tmp/lqo.toml",
            "--json",
            "--no-color",
            "--locale",
            "ko",
            "-v",
            "overview",
        ]);
        assert!(before.is_ok());

        let after = Cli::try_parse_from(["lqo", "models", "--json", "--no-color", "-q"]);
        assert!(after.is_ok());
    }

    #[test]
    fn parses_every_subcommand() {
        let cases = [
            vec!["lqo", "overview"],
            vec!["lqo", "logs"],
            vec!["lqo", "logs", "--page", "3"],
            vec!["lqo", "evaluations", "--page", "2"],
            vec!["lqo", "models"],
            vec!["lqo", "locale"],
            vec!["lqo", "locale", "show"],
            vec!["lqo", "locale", "list"],
            vec!["lqo", "locale", "set", "ja"],
            vec!["lqo", "config", "path"],
            vec!["lqo", "config", "show"],
        ];

        for case in cases {
            let parsed = Cli::try_parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse {case:?}");
        }
    }

    #[test]
    fn page_zero_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["lqo", "logs", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["lqo", "evaluations", "--page", "-1"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["lqo", "-v", "-q", "overview"]).is_err());
    }

    #[test]
    fn completions_support_bash_zsh_and_fish() {
        for shell in ["bash", "zsh", "fish"] {
            let parsed = Cli::try_parse_from(["lqo", "completions", shell]);
            assert!(parsed.is_ok(), "failed shell parse for {shell}");
        }
    }

    #[test]
    fn output_mode_resolution_honors_precedence() {
        assert_eq!(
            resolve_output_mode(true, Some("human"), true),
            OutputMode::Json
        );
        assert_eq!(
            resolve_output_mode(false, Some("json"), true),
            OutputMode::Json
        );
        assert_eq!(
            resolve_output_mode(false, Some("human"), false),
            OutputMode::Human
        );
        assert_eq!(
            resolve_output_mode(false, Some("auto"), true),
            OutputMode::Human
        );
        assert_eq!(resolve_output_mode(false, None, false), OutputMode::Json);
    }

    #[test]
    fn unsupported_locale_is_a_user_error() {
        let err = parse_locale("fr").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(parse_locale(" KO ").unwrap(), Locale::Ko);
    }

    #[test]
    fn library_errors_map_to_exit_codes() {
        let user: CliError = LqoError::InvalidConfig {
            details: "bad".to_string(),
        }
        .into();
        assert_eq!(user.exit_code(), 1);

        let runtime: CliError = LqoError::Transport {
            url: "http://127.0.0.1:1".to_string(),
            details: "refused".to_string(),
        }
        .into();
        assert_eq!(runtime.exit_code(), 2);

        let internal: CliError = LqoError::ContextMissing {
            what: "locale store",
        }
        .into();
        assert_eq!(internal.exit_code(), 3);
    }

    #[test]
    fn locale_override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.state_file = dir.path().join("state.json");

        let cli = Cli::try_parse_from(["lqo", "--locale", "zh", "overview"]).unwrap();
        let store = locale_store(&cli, &config).unwrap();
        assert_eq!(store.current(), Locale::Zh);
        assert!(!config.paths.state_file.exists());
    }
}
