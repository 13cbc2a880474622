//! Japanese strings.

use super::catalog::{
    CommonText, EvaluationsText, LogsText, ModelsText, NavText, OverviewText, TranslationTable,
};

pub static JA: TranslationTable = TranslationTable {
    nav: NavText {
        overview: "概要",
        logs: "ログ",
        evaluations: "評価",
        models: "モデル",
    },
    overview: OverviewText {
        title: "概要",
        subtitle: "LLM品質メトリクスのリアルタイム監視",
        welcome: "LLM Quality Observerへようこそ",
        welcome_desc: "LLMアプリケーションの品質メトリクスをリアルタイムで監視します。ログ、評価、モデルページで詳細な分析を確認できます。",
        total_logs: "総ログ数",
        total_logs_desc: "LLMリクエスト/レスポンスログ",
        evaluated: "評価済み",
        evaluated_desc: "品質評価済み",
        avg_latency: "平均レイテンシ",
        avg_latency_desc: "応答時間",
        avg_score: "平均スコア",
        avg_score_desc: "品質評価 (1-5)",
        quality_trend: "品質スコア推移 (過去30日)",
        latency_trend: "レイテンシ推移 (過去30日)",
        volume_trend: "リクエスト数推移 (過去30日)",
        recent_activity: "最近のアクティビティ",
    },
    logs: LogsText {
        title: "ログ",
        subtitle: "すべてのLLMリクエストとレスポンスログを表示",
        table_title: "LLMリクエストログ",
        id: "ID",
        created_at: "作成日時",
        user_id: "ユーザーID",
        prompt: "プロンプト",
        response: "レスポンス",
        model: "モデル",
        latency: "レイテンシ",
        status: "ステータス",
        showing: "表示中",
        of: "/",
        logs_text: "ログ",
        page: "ページ",
        previous: "前へ",
        next: "次へ",
        no_logs: "ログが見つかりません",
    },
    evaluations: EvaluationsText {
        title: "評価",
        subtitle: "LLM評価結果と品質スコアを表示",
        table_title: "品質評価",
        total: "合計:",
        evaluations_text: "評価",
        id: "ID",
        created_at: "作成日時",
        log_id: "ログID",
        prompt: "プロンプト",
        response: "レスポンス",
        score: "スコア",
        score_instruction: "指示遵守",
        score_truthfulness: "正確性",
        label: "ラベル",
        judge: "評価者",
        judge_type: "評価方式",
        comment: "コメント",
        showing: "表示中",
        of: "/",
        page: "ページ",
        previous: "前へ",
        next: "次へ",
        no_evaluations: "評価が見つかりません",
        rule_based: "ルールベース",
        llm_based: "LLM評価",
    },
    models: ModelsText {
        title: "モデル",
        subtitle: "異なるLLMモデルのパフォーマンスメトリクスを比較",
        table_title: "モデルパフォーマンス比較",
        model_version: "モデルバージョン",
        total_requests: "総リクエスト数",
        evaluated_count: "評価数",
        avg_latency: "平均レイテンシ",
        avg_score: "平均スコア",
        evaluation_rate: "評価率",
        total_models: "総モデル数",
        total_models_desc: "追跡中のモデル数",
        best_avg_score: "最高平均スコア",
        best_avg_score_desc: "最高品質評価",
        best_avg_latency: "最短平均レイテンシ",
        best_avg_latency_desc: "最速応答時間",
        no_models: "モデルデータが見つかりません",
    },
    common: CommonText {
        loading: "読み込み中...",
        error: "エラー:",
        na: "N/A",
    },
};
