//! Korean strings.

use super::catalog::{
    CommonText, EvaluationsText, LogsText, ModelsText, NavText, OverviewText, TranslationTable,
};

pub static KO: TranslationTable = TranslationTable {
    nav: NavText {
        overview: "개요",
        logs: "로그",
        evaluations: "평가",
        models: "모델",
    },
    overview: OverviewText {
        title: "개요",
        subtitle: "LLM 품질 지표 실시간 모니터링",
        welcome: "LLM Quality Observer에 오신 것을 환영합니다",
        welcome_desc: "LLM 애플리케이션의 품질 지표를 실시간으로 모니터링하세요. 로그, 평가, 모델 페이지에서 자세한 분석을 확인할 수 있습니다.",
        total_logs: "총 로그 수",
        total_logs_desc: "LLM 요청/응답 로그",
        evaluated: "평가 완료",
        evaluated_desc: "품질 평가 완료",
        avg_latency: "평균 지연시간",
        avg_latency_desc: "응답 시간",
        avg_score: "평균 점수",
        avg_score_desc: "품질 평가 (1-5)",
        quality_trend: "품질 점수 추이 (최근 30일)",
        latency_trend: "지연시간 추이 (최근 30일)",
        volume_trend: "요청 수 추이 (최근 30일)",
        recent_activity: "최근 활동",
    },
    logs: LogsText {
        title: "로그",
        subtitle: "모든 LLM 요청 및 응답 로그 조회",
        table_title: "LLM 요청 로그",
        id: "ID",
        created_at: "생성 시각",
        user_id: "사용자 ID",
        prompt: "프롬프트",
        response: "응답",
        model: "모델",
        latency: "지연시간",
        status: "상태",
        showing: "표시 중",
        of: "/",
        logs_text: "로그",
        page: "페이지",
        previous: "이전",
        next: "다음",
        no_logs: "로그가 없습니다",
    },
    evaluations: EvaluationsText {
        title: "평가",
        subtitle: "LLM 평가 결과 및 품질 점수 조회",
        table_title: "품질 평가",
        total: "총:",
        evaluations_text: "평가",
        id: "ID",
        created_at: "생성 시각",
        log_id: "로그 ID",
        prompt: "프롬프트",
        response: "응답",
        score: "점수",
        score_instruction: "지시 준수",
        score_truthfulness: "정확성",
        label: "레이블",
        judge: "평가자",
        judge_type: "평가 방식",
        comment: "코멘트",
        showing: "표시 중",
        of: "/",
        page: "페이지",
        previous: "이전",
        next: "다음",
        no_evaluations: "평가가 없습니다",
        rule_based: "룰 기반",
        llm_based: "LLM 평가",
    },
    models: ModelsText {
        title: "모델",
        subtitle: "다양한 LLM 모델의 성능 지표 비교",
        table_title: "모델 성능 비교",
        model_version: "모델 버전",
        total_requests: "총 요청 수",
        evaluated_count: "평가 수",
        avg_latency: "평균 지연시간",
        avg_score: "평균 점수",
        evaluation_rate: "평가율",
        total_models: "총 모델 수",
        total_models_desc: "추적 중인 모델 수",
        best_avg_score: "최고 평균 점수",
        best_avg_score_desc: "가장 높은 품질 평가",
        best_avg_latency: "최단 평균 지연시간",
        best_avg_latency_desc: "가장 빠른 응답 시간",
        no_models: "모델 데이터가 없습니다",
    },
    common: CommonText {
        loading: "로딩 중...",
        error: "오류:",
        na: "N/A",
    },
};
