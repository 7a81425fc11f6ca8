//! # 응답 세션 쿼리 모듈 (세션 매니저)
//!
//! 불투명한 클라이언트 세션 ID를 정확히 하나의 응답 행에 매핑합니다.
//!
//! ## 핵심 계약
//! - `get_or_create_response`: 같은 (폼, 세션)으로 몇 번을 불러도
//!   행은 하나, ID도 하나. 경쟁 상태에서도 UNIQUE 제약이 보장합니다.
//! - `complete_response`: InProgress → Completed 단방향 전이.
//!   두 번 불러도 에러가 아니며, 최초 완료 시각이 보존됩니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// ID로 응답 하나를 조회합니다.
pub async fn get_response(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<SurveyResponse>, AppError> {
    let response = sqlx::query_as::<_, SurveyResponse>(
        r#"
        SELECT id, form_id, session_id, completed_at, created_at, updated_at
        FROM responses
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(response)
}

/// 폼의 모든 응답을 생성 순서대로 조회합니다.
pub async fn list_responses_by_form(
    pool: &SqlitePool,
    form_id: &str,
) -> Result<Vec<SurveyResponse>, AppError> {
    let responses = sqlx::query_as::<_, SurveyResponse>(
        r#"
        SELECT id, form_id, session_id, completed_at, created_at, updated_at
        FROM responses
        WHERE form_id = ?
        ORDER BY created_at
        "#,
    )
    .bind(form_id)
    .fetch_all(pool)
    .await?;

    Ok(responses)
}

/// 세션의 응답을 조회하고, 없으면 만듭니다 (find-or-create).
///
/// "조회 후 삽입"이 아니라 `INSERT .. ON CONFLICT DO NOTHING` 후 조회입니다.
/// 같은 세션으로 두 요청이 동시에 들어와도 UNIQUE(form_id, session_id)
/// 제약 덕분에 한 행만 만들어지고, 둘 다 그 행을 돌려받습니다.
pub async fn get_or_create_response(
    pool: &SqlitePool,
    form_id: &str,
    session_id: &str,
) -> Result<SurveyResponse, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query(
        r#"
        INSERT INTO responses (id, form_id, session_id)
        VALUES (?, ?, ?)
        ON CONFLICT (form_id, session_id) DO NOTHING
        "#,
    )
    .bind(&id)
    .bind(form_id)
    .bind(session_id)
    .execute(pool)
    .await?;

    // 방금 삽입했든 이미 있었든, 세션의 행은 정확히 하나입니다.
    let response = sqlx::query_as::<_, SurveyResponse>(
        r#"
        SELECT id, form_id, session_id, completed_at, created_at, updated_at
        FROM responses
        WHERE form_id = ? AND session_id = ?
        "#,
    )
    .bind(form_id)
    .bind(session_id)
    .fetch_one(pool)
    .await?;

    Ok(response)
}

/// 응답을 완료 상태로 전이시킵니다 (멱등).
///
/// COALESCE 덕분에 이미 완료된 응답에 다시 호출해도
/// completed_at이 덮어써지지 않습니다. 전이는 되돌릴 수 없습니다.
pub async fn complete_response(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<SurveyResponse>, AppError> {
    if get_response(pool, id).await?.is_none() {
        return Ok(None);
    }

    sqlx::query(
        r#"
        UPDATE responses
        SET completed_at = COALESCE(completed_at, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    get_response(pool, id).await
}

/// 폼의 (전체, 완료) 응답 수를 반환합니다.
pub async fn count_responses(pool: &SqlitePool, form_id: &str) -> Result<(i64, i64), AppError> {
    let (total, completed): (i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*), COUNT(completed_at)
        FROM responses
        WHERE form_id = ?
        "#,
    )
    .bind(form_id)
    .fetch_one(pool)
    .await?;

    Ok((total, completed))
}

/// 모든 폼을 합한 (전체, 완료) 응답 수 — 대시보드 개요용.
pub async fn count_all_responses(pool: &SqlitePool) -> Result<(i64, i64), AppError> {
    let counts: (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COUNT(completed_at) FROM responses")
            .fetch_one(pool)
            .await?;

    Ok(counts)
}
