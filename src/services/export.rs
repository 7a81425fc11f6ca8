//! # 응답 내보내기 표 조립
//!
//! 응답 전체를 스프레드시트 친화적인 표로 펼칩니다:
//! 응답 하나가 한 행, 질문 하나가 한 열.
//! 워크북 파일로의 직렬화는 이 표를 소비하는 클라이언트의 몫입니다.

use crate::models::{Answer, ExportTable, Question, SurveyResponse};
use crate::services::values::display_text;

/// 내보내기 표를 만듭니다.
///
/// - 헤더: 고정 컬럼 + 질문 텍스트 그대로 (order_index 순).
///   같은 문구의 질문이 둘이면 헤더도 중복됩니다 — 해소하지 않습니다.
/// - 행: 응답 생성 순서. 답하지 않은 질문의 셀은 빈 문자열.
/// - 복수 선택 값은 `", "`로 풀어 씁니다.
pub fn build_export(
    questions: &[Question],
    responses: &[SurveyResponse],
    answers: &[Answer],
) -> ExportTable {
    let mut headers = vec![
        "Response ID".to_string(),
        "Session".to_string(),
        "Date".to_string(),
        "Status".to_string(),
    ];
    headers.extend(questions.iter().map(|q| q.question_text.clone()));

    let rows = responses
        .iter()
        .map(|response| {
            let status = if response.completed_at.is_some() {
                "Completed"
            } else {
                "In progress"
            };

            let mut row = vec![
                response.id.clone(),
                response.session_id.clone(),
                response.created_at.clone(),
                status.to_string(),
            ];

            for question in questions {
                let cell = answers
                    .iter()
                    .find(|a| a.response_id == response.id && a.question_id == question.id)
                    .map(|a| display_text(&a.answer_text))
                    .unwrap_or_default();
                row.push(cell);
            }

            row
        })
        .collect();

    ExportTable { headers, rows }
}
