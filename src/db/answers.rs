//! # 답변 쿼리 모듈 (answer upsert)
//!
//! (응답, 질문) 쌍당 답변 행이 정확히 하나라는 불변식을 지키는 모듈입니다.
//! 저장은 항상 upsert이며, 같은 쌍에 빠르게 연속 저장해도
//! (체크박스를 빠르게 토글하는 사용자) 마지막 쓰기가 이깁니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 답변을 저장합니다: 쌍이 이미 있으면 제자리 갱신, 없으면 삽입.
///
/// `UNIQUE(response_id, question_id)` 제약 + `ON CONFLICT DO UPDATE`로
/// "조회 후 분기"의 경쟁 구간 없이 쌍-유일성을 보장합니다.
/// 클라이언트가 실패한 저장을 다시 시도해도 중복 행이 생기지 않습니다.
pub async fn upsert_answer(
    pool: &SqlitePool,
    id: &str,
    response_id: &str,
    question_id: &str,
    answer_text: &str,
) -> Result<Answer, AppError> {
    sqlx::query(
        r#"
        INSERT INTO answers (id, response_id, question_id, answer_text)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (response_id, question_id) DO UPDATE SET
            answer_text = excluded.answer_text,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        "#,
    )
    .bind(id)
    .bind(response_id)
    .bind(question_id)
    .bind(answer_text)
    .execute(pool)
    .await?;

    let answer = sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, response_id, question_id, answer_text, created_at, updated_at
        FROM answers
        WHERE response_id = ? AND question_id = ?
        "#,
    )
    .bind(response_id)
    .bind(question_id)
    .fetch_one(pool)
    .await?;

    Ok(answer)
}

/// 한 응답의 모든 답변을 조회합니다.
pub async fn list_answers_by_response(
    pool: &SqlitePool,
    response_id: &str,
) -> Result<Vec<Answer>, AppError> {
    let answers = sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, response_id, question_id, answer_text, created_at, updated_at
        FROM answers
        WHERE response_id = ?
        "#,
    )
    .bind(response_id)
    .fetch_all(pool)
    .await?;

    Ok(answers)
}

/// 한 폼에 수집된 모든 답변을 조회합니다 (내보내기용).
pub async fn list_answers_by_form(
    pool: &SqlitePool,
    form_id: &str,
) -> Result<Vec<Answer>, AppError> {
    let answers = sqlx::query_as::<_, Answer>(
        r#"
        SELECT a.id, a.response_id, a.question_id, a.answer_text, a.created_at, a.updated_at
        FROM answers a
        JOIN responses r ON r.id = a.response_id
        WHERE r.form_id = ?
        "#,
    )
    .bind(form_id)
    .fetch_all(pool)
    .await?;

    Ok(answers)
}

/// 질문별 답변 행 수를 집계합니다 (퍼널용).
///
/// 답변이 하나도 없는 질문은 결과에 나타나지 않으므로,
/// 퍼널을 조립하는 쪽에서 0으로 채웁니다 (services::funnel).
pub async fn count_answers_per_question(
    pool: &SqlitePool,
    form_id: &str,
) -> Result<Vec<(String, i64)>, AppError> {
    let counts: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT a.question_id, COUNT(*)
        FROM answers a
        JOIN responses r ON r.id = a.response_id
        WHERE r.form_id = ?
        GROUP BY a.question_id
        "#,
    )
    .bind(form_id)
    .fetch_all(pool)
    .await?;

    Ok(counts)
}
