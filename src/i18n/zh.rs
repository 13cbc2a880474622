//! Simplified Chinese strings.

use super::catalog::{
    CommonText, EvaluationsText, LogsText, ModelsText, NavText, OverviewText, TranslationTable,
};

pub static ZH: TranslationTable = TranslationTable {
    nav: NavText {
        overview: "概览",
        logs: "日志",
        evaluations: "评估",
        models: "模型",
    },
    overview: OverviewText {
        title: "概览",
        subtitle: "LLM质量指标实时监控",
        welcome: "欢迎使用LLM Quality Observer",
        welcome_desc: "实时监控您的LLM应用程序的质量指标。导航到日志、评估或模型页面以查看详细分析。",
        total_logs: "总日志数",
        total_logs_desc: "LLM请求/响应日志",
        evaluated: "已评估",
        evaluated_desc: "质量已评估",
        avg_latency: "平均延迟",
        avg_latency_desc: "响应时间",
        avg_score: "平均分数",
        avg_score_desc: "质量评分 (1-5)",
        quality_trend: "质量分数趋势（最近30天）",
        latency_trend: "延迟趋势（最近30天）",
        volume_trend: "请求量趋势（最近30天）",
        recent_activity: "最近活动",
    },
    logs: LogsText {
        title: "日志",
        subtitle: "查看所有LLM请求和响应日志",
        table_title: "LLM请求日志",
        id: "ID",
        created_at: "创建时间",
        user_id: "用户ID",
        prompt: "提示",
        response: "响应",
        model: "模型",
        latency: "延迟",
        status: "状态",
        showing: "显示",
        of: "/",
        logs_text: "日志",
        page: "页",
        previous: "上一页",
        next: "下一页",
        no_logs: "未找到日志",
    },
    evaluations: EvaluationsText {
        title: "评估",
        subtitle: "查看LLM评估结果和质量分数",
        table_title: "质量评估",
        total: "总计:",
        evaluations_text: "评估",
        id: "ID",
        created_at: "创建时间",
        log_id: "日志ID",
        prompt: "提示",
        response: "响应",
        score: "分数",
        score_instruction: "指令遵循",
        score_truthfulness: "真实性",
        label: "标签",
        judge: "评审员",
        judge_type: "评估方式",
        comment: "评论",
        showing: "显示",
        of: "/",
        page: "页",
        previous: "上一页",
        next: "下一页",
        no_evaluations: "未找到评估",
        rule_based: "基于规则",
        llm_based: "LLM评审",
    },
    models: ModelsText {
        title: "模型",
        subtitle: "比较不同LLM模型的性能指标",
        table_title: "模型性能比较",
        model_version: "模型版本",
        total_requests: "总请求数",
        evaluated_count: "评估数",
        avg_latency: "平均延迟",
        avg_score: "平均分数",
        evaluation_rate: "评估率",
        total_models: "总模型数",
        total_models_desc: "跟踪的模型数",
        best_avg_score: "最佳平均分数",
        best_avg_score_desc: "最高质量评分",
        best_avg_latency: "最佳平均延迟",
        best_avg_latency_desc: "最快响应时间",
        no_models: "未找到模型数据",
    },
    common: CommonText {
        loading: "加载中...",
        error: "错误:",
        na: "N/A",
    },
};
