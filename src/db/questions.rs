//! # 질문 데이터베이스 쿼리 모듈 (시퀀싱 엔진)
//!
//! `questions` 테이블의 CRUD와 순서 관리를 담당합니다.
//!
//! ## 순서(order_index) 규칙
//! - 추가: 현재 최대 order_index + 1을 부여 (맨 뒤에 붙음). 삭제로 틈이
//!   생긴 뒤에도 기존 인덱스와 충돌하지 않습니다.
//! - 재배치: 전체 ID 순열을 받아 0부터 다시 부여, 트랜잭션으로 원자적 적용
//! - 삭제: 남은 인덱스를 재배치하지 **않습니다** — order_index는 희소한
//!   단조 정렬 키이며, 불변식은 "한 폼 안에서 중복 없음"입니다.
//!
//! 질문 목록을 반환하는 모든 읽기는 order_index 오름차순입니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 폼의 모든 질문을 표시 순서대로 조회합니다.
pub async fn list_questions(pool: &SqlitePool, form_id: &str) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, form_id, question_text, question_type, options,
               is_required, order_index, created_at, updated_at
        FROM questions
        WHERE form_id = ?
        ORDER BY order_index
        "#,
    )
    .bind(form_id)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// ID로 질문 하나를 조회합니다.
pub async fn get_question(pool: &SqlitePool, id: &str) -> Result<Option<Question>, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, form_id, question_text, question_type, options,
               is_required, order_index, created_at, updated_at
        FROM questions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

/// 새 질문을 폼의 맨 뒤에 추가합니다.
///
/// order_index = 현재 최대 인덱스 + 1 (빈 폼이면 0). COUNT를 쓰면 삭제로
/// 생긴 틈 때문에 기존 인덱스와 충돌할 수 있으므로 MAX 기반으로 부여합니다.
/// 최대값 조회와 삽입을 한 트랜잭션으로 묶어, 동시에 두 질문을 추가해도
/// 같은 인덱스가 부여되지 않게 합니다.
///
/// `options_json`은 이미 검증·정규화된 JSON 배열 문자열입니다
/// (services::options::validate_options에서 생성). 여기서는 재해석하지 않습니다.
pub async fn append_question(
    pool: &SqlitePool,
    id: &str,
    form_id: &str,
    req: &CreateQuestionRequest,
    options_json: Option<String>,
) -> Result<Question, AppError> {
    let mut tx = pool.begin().await?;

    // 집계는 항상 단일 행을 반환하므로 fetch_one을 사용합니다.
    let (next_index,): (i64,) = sqlx::query_as(
        "SELECT COALESCE(MAX(order_index) + 1, 0) FROM questions WHERE form_id = ?",
    )
    .bind(form_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO questions (id, form_id, question_text, question_type, options, is_required, order_index)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(form_id)
    .bind(&req.question_text)
    .bind(req.question_type)
    .bind(&options_json)
    .bind(req.is_required.unwrap_or(true))
    .bind(next_index)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_question(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created question".to_string()))
}

/// 질문을 수정합니다 (부분 업데이트 - PATCH 방식).
///
/// `options_json`: None = options 변경 없음, Some(None) = options 제거
/// (비선택형으로 전환), Some(Some(json)) = 새 선택지로 교체.
/// 라우트 핸들러가 유형/선택지 조합을 검증한 뒤 호출합니다.
pub async fn update_question(
    pool: &SqlitePool,
    id: &str,
    req: &UpdateQuestionRequest,
    options_json: Option<Option<String>>,
) -> Result<Option<Question>, AppError> {
    if get_question(pool, id).await?.is_none() {
        return Ok(None);
    }

    // 바인딩 값의 타입이 섞여 있어(&str, bool, NULL) 동적 쿼리를
    // 문자열 바인딩 벡터로 만들지 않고 QueryBuilder식으로 분기합니다.
    let mut query =
        String::from("UPDATE questions SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')");

    if req.question_text.is_some() {
        query.push_str(", question_text = ?");
    }
    if req.question_type.is_some() {
        query.push_str(", question_type = ?");
    }
    if options_json.is_some() {
        query.push_str(", options = ?");
    }
    if req.is_required.is_some() {
        query.push_str(", is_required = ?");
    }
    query.push_str(" WHERE id = ?");

    let mut q = sqlx::query(&query);
    if let Some(text) = &req.question_text {
        q = q.bind(text);
    }
    if let Some(question_type) = req.question_type {
        q = q.bind(question_type);
    }
    if let Some(options) = &options_json {
        q = q.bind(options); // Option<String>: None이면 NULL로 바인딩됨
    }
    if let Some(is_required) = req.is_required {
        q = q.bind(is_required);
    }
    q = q.bind(id);

    q.execute(pool).await?;

    get_question(pool, id).await
}

/// 질문과 그 질문에 달린 답변을 삭제합니다.
///
/// 남은 질문들의 order_index는 재배치하지 않습니다 (모듈 문서 참고).
pub async fn delete_question(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    if get_question(pool, id).await?.is_none() {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM answers WHERE question_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(true)
}

/// 폼의 질문 순서를 재배치합니다.
///
/// `ordered_ids`는 폼에 존재하는 **모든** 질문 ID의 순열이어야 합니다.
/// 집합이 일치하지 않으면 호출자 오류(BadRequest)로 거부합니다.
/// 전체 재부여를 하나의 트랜잭션으로 적용하므로, 동시 읽기는
/// 이전 순열 아니면 새 순열만 관측합니다.
pub async fn reorder_questions(
    pool: &SqlitePool,
    form_id: &str,
    ordered_ids: &[String],
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let existing: Vec<(String, i64)> =
        sqlx::query_as("SELECT id, order_index FROM questions WHERE form_id = ?")
            .bind(form_id)
            .fetch_all(&mut *tx)
            .await?;

    // 순열 검증: 길이가 같고 모든 기존 ID가 요청에 존재해야 합니다.
    // (길이가 같으므로 중복 ID도 자동으로 걸러집니다)
    if ordered_ids.len() != existing.len()
        || !existing.iter().all(|(id, _)| ordered_ids.contains(id))
    {
        return Err(AppError::BadRequest(
            "question_ids must be a permutation of the form's question ids".to_string(),
        ));
    }

    for (position, id) in ordered_ids.iter().enumerate() {
        // 인덱스가 이미 맞는 행은 건드리지 않습니다.
        let unchanged = existing
            .iter()
            .any(|(eid, idx)| eid == id && *idx == position as i64);
        if unchanged {
            continue;
        }

        sqlx::query(
            "UPDATE questions SET order_index = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') WHERE id = ?",
        )
        .bind(position as i64)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}
