//! # 폼(Form) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/v1/forms`     → 내가 소유한 폼 목록 (관리자)
//! - `POST   /api/v1/forms`     → 새 폼 생성 (관리자)
//! - `GET    /api/v1/forms/:id` → 단일 폼 조회 (공개 — 응답자가 제목/설명을 봄)
//! - `PATCH  /api/v1/forms/:id` → 폼 수정 (부분 업데이트, 관리자)
//! - `DELETE /api/v1/forms/:id` → 폼과 소유물 전체 삭제 (관리자)
//!
//! ## Axum 핸들러 패턴
//! 핸들러는 Extractor를 매개변수로 받습니다:
//! - `State(state)`: 앱 전역 상태 (DB 풀, 설정)
//! - `Path(id)`: URL 경로 파라미터
//! - `Json(body)`: 요청 본문을 구조체로 파싱
//! - `AdminUser`: 유효한 admin 토큰이 없으면 핸들러에 진입하지 못합니다
//!
//! 반환 타입이 `Result<T, AppError>`이면 Axum이 자동으로
//! Ok → HTTP 응답, Err → 에러 JSON 응답으로 변환합니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AdminUser,
    models::*,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
/// 풀은 main에서 한 번 만들어 여기로 주입됩니다 — 지연 초기화되는
/// 전역 핸들 같은 것은 없습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// JWT 토큰 서명용 비밀키
    pub jwt_secret: String,
}

/// `GET /forms` — 인증된 관리자가 소유한 폼 목록을 조회합니다.
pub async fn list_forms(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Value>, AppError> {
    let forms = db::list_forms_by_owner(&state.pool, &admin.user_id).await?;
    Ok(Json(json!({ "forms": forms })))
}

/// `GET /forms/:id` — 단일 폼을 조회합니다 (공개).
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Form>, AppError> {
    let form = db::get_form(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(form))
}

/// `POST /forms` — 새 폼을 생성합니다.
pub async fn create_form(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<CreateFormRequest>,
) -> Result<Json<Form>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Form title is required".to_string()));
    }

    let id = uuid::Uuid::now_v7().to_string();
    let form = db::create_form(&state.pool, &id, &admin.user_id, &req).await?;
    Ok(Json(form))
}

/// `PATCH /forms/:id` — 폼을 부분 수정합니다.
pub async fn update_form(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateFormRequest>,
) -> Result<Json<Form>, AppError> {
    if req.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::BadRequest("Form title cannot be empty".to_string()));
    }

    let form = db::update_form(&state.pool, &id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(form))
}

/// `DELETE /forms/:id` — 폼과 질문/응답/답변을 함께 삭제합니다.
pub async fn delete_form(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::delete_form_cascade(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
