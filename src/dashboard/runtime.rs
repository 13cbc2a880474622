//! Session runtime: runs `update`, executes its commands on worker threads,
//! and feeds completions back through a channel.
//!
//! The model is only touched by the thread that owns the session. Each fetch
//! runs on its own short-lived worker and posts exactly one message back.
//! Dropping the session drops the receiver, so late results are discarded
//! by the failed send.

#![allow(missing_docs)]

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};

use crate::api::client::DashboardApi;
use crate::core::errors::{LqoError, Result};
use crate::dashboard::locale_store::ViewContext;
use crate::i18n::{Locale, TranslationTable};

use super::model::{DashboardCmd, DashboardModel, DashboardMsg, Screen};
use super::update::update;

/// Default wait used by one-shot callers such as the CLI.
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

pub struct DashboardSession {
    api: Arc<dyn DashboardApi>,
    context: ViewContext,
    model: DashboardModel,
    tx: Sender<DashboardMsg>,
    rx: Receiver<DashboardMsg>,
    locale_rx: Receiver<Locale>,
    pending: usize,
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("screen", &self.model.screen)
            .field("locale", &self.model.locale)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl DashboardSession {
    /// Build a session bound to the context's locale store.
    ///
    /// Fails with [`LqoError::ContextMissing`] when the context was not
    /// provisioned with a store.
    pub fn new(api: Arc<dyn DashboardApi>, context: ViewContext) -> Result<Self> {
        let store = context.locale_store()?;
        let locale_rx = store.subscribe();
        let model = DashboardModel::new(store.current());
        let (tx, rx) = unbounded();
        Ok(Self {
            api,
            context,
            model,
            tx,
            rx,
            locale_rx,
            pending: 0,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &DashboardModel {
        &self.model
    }

    #[must_use]
    pub const fn context(&self) -> &ViewContext {
        &self.context
    }

    /// Fetches issued but not yet fed back into the model.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Labels for the locale the model currently renders with.
    #[must_use]
    pub fn translations(&self) -> &'static TranslationTable {
        self.model.locale.table()
    }

    /// Show `screen` and start its fetches.
    pub fn open(&mut self, screen: Screen) -> Result<()> {
        self.dispatch(DashboardMsg::Navigate(screen))
    }

    /// Run one message through `update` and execute the resulting command.
    pub fn dispatch(&mut self, msg: DashboardMsg) -> Result<()> {
        let cmd = update(&mut self.model, msg);
        self.execute(cmd)
    }

    /// Switch the shared locale and apply the change to this session.
    ///
    /// Returns whether the new locale was persisted.
    pub fn set_locale(&mut self, locale: Locale) -> Result<bool> {
        let persisted = self.context.locale_store()?.set_locale(locale);
        self.drain_locale_changes()?;
        Ok(persisted)
    }

    /// Apply every completion already delivered, without blocking.
    pub fn pump(&mut self) -> Result<usize> {
        self.drain_locale_changes()?;
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.dispatch(msg)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Block until every issued fetch (including follow-ups) has been applied.
    pub fn wait_idle(&mut self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        self.drain_locale_changes()?;
        while self.pending > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.pending -= 1;
                    self.dispatch(msg)?;
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(LqoError::Runtime {
                        details: format!(
                            "timed out after {timeout:?} with {} fetch(es) outstanding",
                            self.pending
                        ),
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(LqoError::ChannelClosed {
                        component: "dashboard session",
                    });
                }
            }
        }
        Ok(())
    }

    /// Stop applying results. Outstanding fetches finish and are dropped.
    pub fn close(&mut self) {
        let _ = update(&mut self.model, DashboardMsg::Close);
    }

    fn drain_locale_changes(&mut self) -> Result<()> {
        while let Ok(locale) = self.locale_rx.try_recv() {
            self.dispatch(DashboardMsg::LocaleChanged(locale))?;
        }
        Ok(())
    }

    fn execute(&mut self, cmd: DashboardCmd) -> Result<()> {
        match cmd {
            DashboardCmd::None => Ok(()),
            DashboardCmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd)?;
                }
                Ok(())
            }
            DashboardCmd::FetchSummary(ticket) => self.spawn_fetch("summary", move |api| {
                DashboardMsg::SummaryLoaded(ticket, api.summary())
            }),
            DashboardCmd::FetchTimeSeries { ticket, days } => {
                self.spawn_fetch("timeseries", move |api| {
                    DashboardMsg::TimeSeriesLoaded(ticket, api.time_series(days))
                })
            }
            DashboardCmd::FetchRecentLogs { ticket, page_size } => {
                self.spawn_fetch("recent-logs", move |api| {
                    DashboardMsg::RecentLogsLoaded(ticket, api.logs_page(1, page_size))
                })
            }
            DashboardCmd::FetchLogs(ticket) => self.spawn_fetch("logs", move |api| {
                DashboardMsg::LogsLoaded(ticket, api.logs_page(ticket.page, ticket.page_size))
            }),
            DashboardCmd::FetchEvaluations(ticket) => self.spawn_fetch("evaluations", move |api| {
                DashboardMsg::EvaluationsLoaded(
                    ticket,
                    api.evaluations_page(ticket.page, ticket.page_size),
                )
            }),
            DashboardCmd::FetchModelStats(ticket) => self.spawn_fetch("models", move |api| {
                DashboardMsg::ModelStatsLoaded(ticket, api.model_stats())
            }),
        }
    }

    fn spawn_fetch<F>(&mut self, name: &'static str, job: F) -> Result<()>
    where
        F: FnOnce(&dyn DashboardApi) -> DashboardMsg + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        thread::Builder::new()
            .name(format!("lqo-fetch-{name}"))
            .spawn(move || {
                let msg = job(api.as_ref());
                if tx.send(msg).is_err() {
                    tracing::debug!(fetch = name, "session gone, dropping result");
                }
            })
            .map_err(|source| LqoError::Runtime {
                details: format!("failed to spawn {name} fetch: {source}"),
            })?;

        self.pending += 1;
        tracing::debug!(fetch = name, pending = self.pending, "fetch issued");
        Ok(())
    }
}
