//! # 응답(Response) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/v1/forms/:id/responses`    → 세션의 응답 조회-또는-생성 (공개)
//! - `GET  /api/v1/forms/:id/responses`    → 폼의 응답 목록 (관리자)
//! - `POST /api/v1/responses/:id/complete` → 완료 전이, 멱등 (공개)
//!
//! 응답자는 인증하지 않습니다 — 클라이언트가 만든 불투명 세션 ID가
//! 응답의 신원입니다. 같은 세션으로 재방문하면 같은 응답을 돌려받습니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AdminUser,
    models::*,
    routes::forms::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// `POST /forms/:id/responses` — 세션의 응답을 조회하고 없으면 만듭니다.
///
/// 몇 번을 호출해도 같은 응답 ID가 돌아옵니다 (멱등).
pub async fn get_or_create_response(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Json(req): Json<GetOrCreateResponseRequest>,
) -> Result<Json<ResponseOut>, AppError> {
    if req.session_id.trim().is_empty() {
        return Err(AppError::BadRequest("session_id is required".to_string()));
    }

    let form = db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // 비활성화된 폼은 새 응답을 받지 않습니다.
    if !form.is_active {
        return Err(AppError::BadRequest(
            "This form is no longer accepting responses".to_string(),
        ));
    }

    let response = db::get_or_create_response(&state.pool, &form_id, &req.session_id).await?;
    Ok(Json(response.into()))
}

/// `GET /forms/:id/responses` — 폼의 응답 목록을 조회합니다.
pub async fn list_responses(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let responses: Vec<ResponseOut> = db::list_responses_by_form(&state.pool, &form_id)
        .await?
        .into_iter()
        .map(ResponseOut::from)
        .collect();

    Ok(Json(json!({ "responses": responses })))
}

/// `POST /responses/:id/complete` — 응답을 완료 상태로 전이시킵니다.
///
/// 이미 완료된 응답에 다시 호출해도 에러가 아니며,
/// 최초 완료 시각이 유지됩니다.
pub async fn complete_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseOut>, AppError> {
    let response = db::complete_response(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(response.into()))
}
