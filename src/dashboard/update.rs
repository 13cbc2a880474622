//! Pure state transitions: `update(model, msg) -> cmd`.
//!
//! No I/O happens here. Fetches are requested by returning commands; their
//! results come back as messages carrying the ticket they were issued with.

use super::model::{DashboardCmd, DashboardModel, DashboardMsg, Screen};
use super::overview::{RECENT_LOG_COUNT, TREND_DAYS};
use super::pagination::{Completion, FetchTicket};

/// Apply one message to the model and return the side effects it requires.
pub fn update(model: &mut DashboardModel, msg: DashboardMsg) -> DashboardCmd {
    if model.closed {
        tracing::debug!(?msg, "session closed, dropping message");
        return DashboardCmd::None;
    }

    match msg {
        DashboardMsg::Navigate(screen) => {
            model.screen = screen;
            mount_screen(model)
        }
        DashboardMsg::Reload => mount_screen(model),
        DashboardMsg::NextPage => match model.screen {
            Screen::Logs => logs_cmd(model.logs.next()),
            Screen::Evaluations => evaluations_cmd(model.evaluations.next()),
            Screen::Overview | Screen::Models => DashboardCmd::None,
        },
        DashboardMsg::PreviousPage => match model.screen {
            Screen::Logs => logs_cmd(model.logs.previous()),
            Screen::Evaluations => evaluations_cmd(model.evaluations.previous()),
            Screen::Overview | Screen::Models => DashboardCmd::None,
        },
        DashboardMsg::GoToPage(page) => match model.screen {
            Screen::Logs => logs_cmd(model.logs.go_to_page(page)),
            Screen::Evaluations => evaluations_cmd(model.evaluations.go_to_page(page)),
            Screen::Overview | Screen::Models => DashboardCmd::None,
        },
        DashboardMsg::LocaleChanged(locale) => {
            // Labels re-resolve from the table; fetched data is locale-independent.
            model.locale = locale;
            DashboardCmd::None
        }
        DashboardMsg::SummaryLoaded(ticket, result) => {
            model.overview.apply_summary(ticket, result);
            DashboardCmd::None
        }
        DashboardMsg::TimeSeriesLoaded(ticket, result) => {
            model.overview.apply_time_series(ticket, result);
            DashboardCmd::None
        }
        DashboardMsg::RecentLogsLoaded(ticket, result) => {
            model.overview.apply_recent_logs(ticket, result);
            DashboardCmd::None
        }
        DashboardMsg::LogsLoaded(ticket, result) => match model.logs.complete(ticket, result) {
            Completion::Refetch(next) => DashboardCmd::FetchLogs(next),
            Completion::Applied | Completion::Stale => DashboardCmd::None,
        },
        DashboardMsg::EvaluationsLoaded(ticket, result) => {
            match model.evaluations.complete(ticket, result) {
                Completion::Refetch(next) => DashboardCmd::FetchEvaluations(next),
                Completion::Applied | Completion::Stale => DashboardCmd::None,
            }
        }
        DashboardMsg::ModelStatsLoaded(ticket, result) => {
            model
                .models
                .finish(ticket, result.map(|response| response.models));
            DashboardCmd::None
        }
        DashboardMsg::Close => {
            model.closed = true;
            DashboardCmd::None
        }
    }
}

/// Issue every fetch the current screen needs.
fn mount_screen(model: &mut DashboardModel) -> DashboardCmd {
    match model.screen {
        Screen::Overview => {
            let tickets = model.overview.mount();
            DashboardCmd::Batch(vec![
                DashboardCmd::FetchSummary(tickets.summary),
                DashboardCmd::FetchTimeSeries {
                    ticket: tickets.time_series,
                    days: TREND_DAYS,
                },
                DashboardCmd::FetchRecentLogs {
                    ticket: tickets.recent_logs,
                    page_size: RECENT_LOG_COUNT,
                },
            ])
        }
        Screen::Logs => DashboardCmd::FetchLogs(model.logs.mount()),
        Screen::Evaluations => DashboardCmd::FetchEvaluations(model.evaluations.mount()),
        Screen::Models => DashboardCmd::FetchModelStats(model.models.begin()),
    }
}

fn logs_cmd(ticket: Option<FetchTicket>) -> DashboardCmd {
    ticket.map_or(DashboardCmd::None, DashboardCmd::FetchLogs)
}

fn evaluations_cmd(ticket: Option<FetchTicket>) -> DashboardCmd {
    ticket.map_or(DashboardCmd::None, DashboardCmd::FetchEvaluations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{LogListResponse, ModelStat, ModelStatsResponse};
    use crate::core::errors::LqoError;
    use crate::i18n::Locale;

    fn logs_payload(total: u64, page: u32) -> LogListResponse {
        LogListResponse {
            logs: Vec::new(),
            total,
            page,
            page_size: 10,
            total_pages: u32::try_from(total.div_ceil(10)).unwrap(),
        }
    }

    fn expect_logs_fetch(cmd: DashboardCmd) -> FetchTicket {
        match cmd {
            DashboardCmd::FetchLogs(ticket) => ticket,
            other => panic!("expected FetchLogs, got {other:?}"),
        }
    }

    #[test]
    fn navigate_overview_issues_three_fetches() {
        let mut model = DashboardModel::new(Locale::En);
        let cmd = update(&mut model, DashboardMsg::Navigate(Screen::Overview));
        assert_eq!(cmd.fetch_count(), 3);
        match cmd {
            DashboardCmd::Batch(cmds) => {
                assert!(matches!(cmds[0], DashboardCmd::FetchSummary(_)));
                assert!(matches!(
                    cmds[1],
                    DashboardCmd::FetchTimeSeries { days: 30, .. }
                ));
                assert!(matches!(
                    cmds[2],
                    DashboardCmd::FetchRecentLogs { page_size: 5, .. }
                ));
            }
            other => panic!("expected batch, got {other:?}"),
        }
    }

    #[test]
    fn logs_next_issues_exactly_one_fetch() {
        let mut model = DashboardModel::new(Locale::En);
        let first = expect_logs_fetch(update(&mut model, DashboardMsg::Navigate(Screen::Logs)));
        assert_eq!(first.page, 1);
        let cmd = update(&mut model, DashboardMsg::LogsLoaded(first, Ok(logs_payload(25, 1))));
        assert_eq!(cmd, DashboardCmd::None);

        let cmd = update(&mut model, DashboardMsg::NextPage);
        assert_eq!(cmd.fetch_count(), 1);
        assert_eq!(expect_logs_fetch(cmd).page, 2);
    }

    #[test]
    fn previous_on_first_page_does_nothing() {
        let mut model = DashboardModel::new(Locale::En);
        let first = expect_logs_fetch(update(&mut model, DashboardMsg::Navigate(Screen::Logs)));
        update(&mut model, DashboardMsg::LogsLoaded(first, Ok(logs_payload(25, 1))));
        assert_eq!(update(&mut model, DashboardMsg::PreviousPage), DashboardCmd::None);
        assert_eq!(model.logs.page(), 1);
    }

    #[test]
    fn page_messages_ignored_off_list_screens() {
        let mut model = DashboardModel::new(Locale::En);
        update(&mut model, DashboardMsg::Navigate(Screen::Models));
        assert_eq!(update(&mut model, DashboardMsg::NextPage), DashboardCmd::None);
        assert_eq!(update(&mut model, DashboardMsg::GoToPage(3)), DashboardCmd::None);
    }

    #[test]
    fn stale_log_page_does_not_overwrite_newer_one() {
        let mut model = DashboardModel::new(Locale::En);
        model.screen = Screen::Logs;
        let first = expect_logs_fetch(update(&mut model, DashboardMsg::Reload));
        let second = expect_logs_fetch(update(&mut model, DashboardMsg::GoToPage(2)));

        update(&mut model, DashboardMsg::LogsLoaded(second, Ok(logs_payload(25, 2))));
        update(&mut model, DashboardMsg::LogsLoaded(first, Ok(logs_payload(25, 1))));
        assert_eq!(model.logs.state().ready().map(|p| p.page), Some(2));
    }

    #[test]
    fn model_stats_failure_is_confined() {
        let mut model = DashboardModel::new(Locale::En);
        let ticket = match update(&mut model, DashboardMsg::Navigate(Screen::Models)) {
            DashboardCmd::FetchModelStats(ticket) => ticket,
            other => panic!("unexpected {other:?}"),
        };
        update(
            &mut model,
            DashboardMsg::ModelStatsLoaded(
                ticket,
                Err(LqoError::Api {
                    status: 404,
                    status_text: "Not Found".to_string(),
                }),
            ),
        );
        assert_eq!(model.models.state().error(), Some("API Error: Not Found"));
        assert!(matches!(
            model.overview.summary(),
            crate::dashboard::load_state::LoadState::Idle
        ));
    }

    #[test]
    fn model_stats_success_keeps_rows() {
        let mut model = DashboardModel::new(Locale::En);
        let DashboardCmd::FetchModelStats(ticket) =
            update(&mut model, DashboardMsg::Navigate(Screen::Models))
        else {
            panic!("expected model stats fetch");
        };
        let stats = ModelStatsResponse {
            models: vec![ModelStat {
                model_version: "m".to_string(),
                total_requests: 1,
                avg_latency_ms: None,
                avg_score: None,
                total_evaluated: 0,
            }],
        };
        update(&mut model, DashboardMsg::ModelStatsLoaded(ticket, Ok(stats)));
        assert_eq!(model.models.state().ready().map(Vec::len), Some(1));
    }

    #[test]
    fn locale_change_updates_model_without_fetching() {
        let mut model = DashboardModel::new(Locale::En);
        let cmd = update(&mut model, DashboardMsg::LocaleChanged(Locale::Ko));
        assert_eq!(cmd, DashboardCmd::None);
        assert_eq!(model.locale, Locale::Ko);
    }

    #[test]
    fn closed_session_drops_late_results() {
        let mut model = DashboardModel::new(Locale::En);
        let ticket = expect_logs_fetch(update(&mut model, DashboardMsg::Navigate(Screen::Logs)));
        update(&mut model, DashboardMsg::Close);
        update(&mut model, DashboardMsg::LogsLoaded(ticket, Ok(logs_payload(3, 1))));
        assert!(model.logs.state().is_loading());
    }

    #[test]
    fn shrunken_listing_triggers_follow_up_fetch() {
        let mut model = DashboardModel::new(Locale::En);
        model.screen = Screen::Logs;
        let ticket = expect_logs_fetch(update(&mut model, DashboardMsg::GoToPage(4)));
        let cmd = update(&mut model, DashboardMsg::LogsLoaded(ticket, Ok(logs_payload(15, 4))));
        assert_eq!(expect_logs_fetch(cmd).page, 2);
    }
}
