//! # 퍼널 계산
//!
//! 질문별 답변 커버리지를 계산합니다: 각 질문에 대해
//! "답변 행이 존재하는 응답 수 / 전체 응답 수".
//! 사용자가 어느 질문에서 이탈했는지를 시각화하는 데 쓰입니다.
//!
//! 응답이 0개일 때의 비율은 0입니다 — NaN이나 0으로 나누기 에러가 아니라.

use crate::models::{FunnelEntry, OverviewStats, Question};

/// 질문 목록(순서대로)과 질문별 답변 수, 전체 응답 수로 퍼널을 조립합니다.
///
/// `answer_counts`에 없는 질문은 답변이 0개인 것입니다.
/// 결과는 입력 질문 순서(order_index 오름차순)를 그대로 따릅니다.
pub fn build_funnel(
    questions: &[Question],
    answer_counts: &[(String, i64)],
    total_responses: i64,
) -> Vec<FunnelEntry> {
    questions
        .iter()
        .map(|q| {
            let answered_count = answer_counts
                .iter()
                .find(|(question_id, _)| question_id == &q.id)
                .map(|(_, count)| *count)
                .unwrap_or(0);

            // 0으로 나누기를 명시적으로 회피합니다.
            let response_rate = if total_responses > 0 {
                answered_count as f64 / total_responses as f64
            } else {
                0.0
            };

            FunnelEntry {
                question_id: q.id.clone(),
                question_text: q.question_text.clone(),
                order_index: q.order_index,
                answered_count,
                response_rate,
            }
        })
        .collect()
}

/// 대시보드 개요 수치를 조립합니다.
pub fn build_overview(
    total_responses: i64,
    completed_responses: i64,
    total_page_views: i64,
) -> OverviewStats {
    let completion_rate = if total_responses > 0 {
        completed_responses as f64 / total_responses as f64
    } else {
        0.0
    };

    OverviewStats {
        total_responses,
        completed_responses,
        in_progress_responses: total_responses - completed_responses,
        completion_rate,
        total_page_views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn question(id: &str, text: &str, order_index: i64) -> Question {
        Question {
            id: id.to_string(),
            form_id: "f1".to_string(),
            question_text: text.to_string(),
            question_type: QuestionType::ShortText,
            options: None,
            is_required: true,
            order_index,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn zero_responses_yield_zero_rates() {
        let questions = vec![question("q1", "Q1", 0), question("q2", "Q2", 1)];
        let funnel = build_funnel(&questions, &[], 0);

        assert_eq!(funnel.len(), 2);
        for entry in funnel {
            assert_eq!(entry.answered_count, 0);
            assert_eq!(entry.response_rate, 0.0);
        }
    }

    #[test]
    fn counts_only_actual_answer_rows() {
        let questions = vec![question("q1", "Q1", 0), question("q2", "Q2", 1)];
        // 4명이 시작했고, q1에는 4명, q2에는 1명만 답했다
        let counts = vec![("q1".to_string(), 4), ("q2".to_string(), 1)];
        let funnel = build_funnel(&questions, &counts, 4);

        assert_eq!(funnel[0].response_rate, 1.0);
        assert_eq!(funnel[1].answered_count, 1);
        assert_eq!(funnel[1].response_rate, 0.25);
    }

    #[test]
    fn funnel_follows_question_order() {
        let questions = vec![question("b", "B", 0), question("a", "A", 1)];
        let funnel = build_funnel(&questions, &[], 3);
        assert_eq!(funnel[0].question_id, "b");
        assert_eq!(funnel[1].question_id, "a");
    }

    #[test]
    fn overview_handles_zero_totals() {
        let stats = build_overview(0, 0, 7);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.in_progress_responses, 0);
        assert_eq!(stats.total_page_views, 7);

        let stats = build_overview(4, 3, 0);
        assert_eq!(stats.completion_rate, 0.75);
        assert_eq!(stats.in_progress_responses, 1);
    }
}
