//! # 폼 데이터베이스 쿼리 모듈
//!
//! `forms` 테이블의 CRUD 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! 폼 삭제는 단순 DELETE가 아니라 소유 관계를 따라가는 연쇄 삭제입니다.
//! 스토리지 스키마에 맡기지 않고 트랜잭션 안에서 명시적으로 수행합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 소유자의 모든 폼을 생성 순서대로 조회합니다.
pub async fn list_forms_by_owner(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Form>, AppError> {
    let forms = sqlx::query_as::<_, Form>(
        r#"
        SELECT id, title, description, user_id, is_active, created_at, updated_at
        FROM forms
        WHERE user_id = ?
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(forms)
}

/// ID로 폼 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Form)을 반환합니다.
pub async fn get_form(pool: &SqlitePool, id: &str) -> Result<Option<Form>, AppError> {
    let form = sqlx::query_as::<_, Form>(
        r#"
        SELECT id, title, description, user_id, is_active, created_at, updated_at
        FROM forms
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(form)
}

/// 새 폼을 생성하고 생성된 폼을 반환합니다.
///
/// `.bind()`는 SQL의 `?` 플레이스홀더에 값을 바인딩합니다.
/// 직접 문자열을 SQL에 넣지 않고 바인딩을 쓰는 이유: SQL 인젝션 방지
pub async fn create_form(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    req: &CreateFormRequest,
) -> Result<Form, AppError> {
    sqlx::query(
        r#"
        INSERT INTO forms (id, title, description, user_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(user_id)
    .execute(pool)
    .await?;

    get_form(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created form".to_string()))
}

/// 폼을 수정합니다 (부분 업데이트 - PATCH 방식).
///
/// 요청에 포함된 필드만 업데이트하고, 나머지는 그대로 유지합니다.
/// 동적으로 SQL UPDATE 쿼리를 구성합니다.
pub async fn update_form(
    pool: &SqlitePool,
    id: &str,
    req: &UpdateFormRequest,
) -> Result<Option<Form>, AppError> {
    // 먼저 폼이 존재하는지 확인
    if get_form(pool, id).await?.is_none() {
        return Ok(None); // 라우트 핸들러에서 404로 변환
    }

    // ── 동적 쿼리 구성 ──
    // PATCH 요청이므로, 클라이언트가 보낸 필드만 SQL에 포함합니다.
    let mut query =
        String::from("UPDATE forms SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')");
    let mut bindings = Vec::new();

    if let Some(title) = &req.title {
        query.push_str(", title = ?");
        bindings.push(title.as_str());
    }

    if let Some(description) = &req.description {
        query.push_str(", description = ?");
        bindings.push(description.as_str());
    }

    if let Some(is_active) = req.is_active {
        query.push_str(", is_active = ?");
        // SQLite에는 BOOLEAN 타입이 없어 INTEGER 0/1로 처리합니다.
        bindings.push(if is_active { "1" } else { "0" });
    }

    query.push_str(" WHERE id = ?");
    bindings.push(id);

    let mut query_builder = sqlx::query(&query);
    for binding in bindings {
        query_builder = query_builder.bind(binding);
    }

    query_builder.execute(pool).await?;

    get_form(pool, id).await
}

/// 폼과 폼이 소유한 모든 것(질문, 응답, 답변)을 삭제합니다.
///
/// 참조 무결성은 스키마가 아니라 여기서 보장합니다:
/// 하나의 트랜잭션 안에서 자식 → 부모 순서로 지우므로,
/// 중간 상태(질문 없는 답변 등)가 외부에 관측되지 않습니다.
pub async fn delete_form_cascade(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    if get_form(pool, id).await?.is_none() {
        return Ok(false);
    }

    // pool.begin(): 트랜잭션 시작. 함수를 빠져나가기 전에 commit하지 않으면
    // 자동으로 롤백됩니다 (Drop 시점에).
    let mut tx = pool.begin().await?;

    // 이 폼의 응답들에 달린 답변부터 삭제
    sqlx::query(
        r#"
        DELETE FROM answers
        WHERE response_id IN (SELECT id FROM responses WHERE form_id = ?)
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM responses WHERE form_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM questions WHERE form_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM forms WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(true)
}
