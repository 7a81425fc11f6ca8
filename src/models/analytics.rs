use serde::Serialize;

/// 퍼널의 한 항목 — 질문 하나에 대한 답변 커버리지
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunnelEntry {
    pub question_id: String,
    pub question_text: String,
    pub order_index: i64,
    /// 이 질문에 답변 행이 존재하는 응답 수
    pub answered_count: i64,
    /// answered_count / 전체 응답 수 (0..=1).
    /// 응답이 하나도 없으면 NaN이 아니라 0입니다.
    pub response_rate: f64,
}

/// 대시보드 상단의 집계 수치
#[derive(Debug, Clone, Serialize)]
pub struct OverviewStats {
    pub total_responses: i64,
    pub completed_responses: i64,
    pub in_progress_responses: i64,
    /// 완료 / 전체 (0..=1, 전체가 0이면 0)
    pub completion_rate: f64,
    pub total_page_views: i64,
}

/// 표 형태의 내보내기 결과.
/// 헤더는 고정 컬럼 + 질문 텍스트(순서대로), 행은 응답 생성 순서입니다.
/// 워크북(xlsx) 직렬화는 이 구조를 소비하는 쪽의 몫입니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
