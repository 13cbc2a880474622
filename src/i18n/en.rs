//! English (default) strings.

use super::catalog::{
    CommonText, EvaluationsText, LogsText, ModelsText, NavText, OverviewText, TranslationTable,
};

pub static EN: TranslationTable = TranslationTable {
    nav: NavText {
        overview: "Overview",
        logs: "Logs",
        evaluations: "Evaluations",
        models: "Models",
    },
    overview: OverviewText {
        title: "Overview",
        subtitle: "Real-time monitoring of LLM quality metrics",
        welcome: "Welcome to LLM Quality Observer",
        welcome_desc: "Monitor your LLM application's quality metrics in real-time. Navigate to Logs, Evaluations, or Models pages for detailed analysis.",
        total_logs: "Total Logs",
        total_logs_desc: "LLM request/response logs",
        evaluated: "Evaluated",
        evaluated_desc: "Quality evaluated",
        avg_latency: "Avg Latency",
        avg_latency_desc: "Response time",
        avg_score: "Avg Score",
        avg_score_desc: "Quality rating (1-5)",
        quality_trend: "Quality Score Trend (Last 30 Days)",
        latency_trend: "Latency Trend (Last 30 Days)",
        volume_trend: "Request Volume Trend (Last 30 Days)",
        recent_activity: "Recent Activity",
    },
    logs: LogsText {
        title: "Logs",
        subtitle: "View all LLM request and response logs",
        table_title: "LLM Request Logs",
        id: "ID",
        created_at: "Created At",
        user_id: "User ID",
        prompt: "Prompt",
        response: "Response",
        model: "Model",
        latency: "Latency",
        status: "Status",
        showing: "Showing",
        of: "of",
        logs_text: "logs",
        page: "Page",
        previous: "Previous",
        next: "Next",
        no_logs: "No logs found",
    },
    evaluations: EvaluationsText {
        title: "Evaluations",
        subtitle: "View LLM evaluation results and quality scores",
        table_title: "Quality Evaluations",
        total: "Total:",
        evaluations_text: "evaluations",
        id: "ID",
        created_at: "Created At",
        log_id: "Log ID",
        prompt: "Prompt",
        response: "Response",
        score: "Score",
        score_instruction: "Instruction",
        score_truthfulness: "Truthfulness",
        label: "Label",
        judge: "Judge",
        judge_type: "Judge Type",
        comment: "Comment",
        showing: "Showing",
        of: "of",
        page: "Page",
        previous: "Previous",
        next: "Next",
        no_evaluations: "No evaluations found",
        rule_based: "Rule-Based",
        llm_based: "LLM Judge",
    },
    models: ModelsText {
        title: "Models",
        subtitle: "Compare performance metrics across different LLM models",
        table_title: "Model Performance Comparison",
        model_version: "Model Version",
        total_requests: "Total Requests",
        evaluated_count: "Evaluated",
        avg_latency: "Avg Latency",
        avg_score: "Avg Score",
        evaluation_rate: "Evaluation Rate",
        total_models: "Total Models",
        total_models_desc: "Different models tracked",
        best_avg_score: "Best Avg Score",
        best_avg_score_desc: "Highest quality rating",
        best_avg_latency: "Best Avg Latency",
        best_avg_latency_desc: "Fastest response time",
        no_models: "No model data found",
    },
    common: CommonText {
        loading: "Loading...",
        error: "Error:",
        na: "N/A",
    },
};
