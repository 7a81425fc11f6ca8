//! # 통계/내보내기 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET  /api/v1/forms/:id/funnel`    → 질문별 답변 커버리지 (관리자)
//! - `GET  /api/v1/forms/:id/export`    → 응답 표 내보내기 (관리자)
//! - `GET  /api/v1/analytics/overview`  → 전체 집계 수치 (관리자)
//! - `POST /api/v1/page-views`          → 익명 방문 기록 (공개)
//!
//! 계산 자체는 services::funnel / services::export의 순수 함수가 하고,
//! 여기서는 DB에서 재료를 모아 넘기기만 합니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AdminUser,
    models::*,
    routes::forms::AppState,
    services::{export::build_export, funnel::{build_funnel, build_overview}},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// `GET /forms/:id/funnel` — 질문별 답변 커버리지를 계산합니다.
///
/// 응답이 하나도 없으면 모든 질문의 비율이 0입니다 (NaN 아님).
pub async fn get_funnel(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = db::list_questions(&state.pool, &form_id).await?;
    let counts = db::count_answers_per_question(&state.pool, &form_id).await?;
    let (total_responses, _) = db::count_responses(&state.pool, &form_id).await?;

    let funnel = build_funnel(&questions, &counts, total_responses);

    Ok(Json(json!({
        "total_responses": total_responses,
        "funnel": funnel,
    })))
}

/// `GET /forms/:id/export` — 응답 전체를 표로 내보냅니다.
///
/// 한 응답이 한 행, 한 질문이 한 열. 워크북 직렬화는 클라이언트의 몫입니다.
pub async fn export_responses(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(form_id): Path<String>,
) -> Result<Json<ExportTable>, AppError> {
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = db::list_questions(&state.pool, &form_id).await?;
    let responses = db::list_responses_by_form(&state.pool, &form_id).await?;
    let answers = db::list_answers_by_form(&state.pool, &form_id).await?;

    Ok(Json(build_export(&questions, &responses, &answers)))
}

/// `GET /analytics/overview` — 대시보드 상단 집계 수치.
pub async fn get_overview(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<OverviewStats>, AppError> {
    let (total, completed) = db::count_all_responses(&state.pool).await?;
    let page_views = db::count_page_views(&state.pool).await?;

    Ok(Json(build_overview(total, completed, page_views)))
}

/// `POST /page-views` — 익명 방문 1회를 기록합니다.
pub async fn record_page_view(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    db::record_page_view(&state.pool).await?;
    Ok(Json(json!({ "success": true })))
}
