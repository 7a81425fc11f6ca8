//! # 답변(Answer) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/v1/answers`                → 답변 저장, upsert (공개)
//! - `GET  /api/v1/responses/:id/answers`  → 한 응답의 답변 목록 (관리자)
//!
//! 필수 질문 검증은 클라이언트의 몫입니다 — 저장소는 빈 텍스트를 포함해
//! 어떤 답변이든 받아들입니다. 이는 의도된 클라이언트/서버 분담이며,
//! API를 직접 호출하면 필수 입력을 우회할 수 있다는 뜻이기도 합니다.

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

/// `POST /answers` — (응답, 질문) 쌍의 답변을 저장합니다.
///
/// 쌍에 이미 답변이 있으면 제자리 갱신 — 마지막 쓰기가 이깁니다.
/// 실패한 저장을 클라이언트가 재시도해도 중복 행은 생기지 않습니다.
pub async fn save_answer(
    State(state): State<AppState>,
    Json(req): Json<SaveAnswerRequest>,
) -> Result<Json<Answer>, AppError> {
    let response = db::get_response(&state.pool, &req.response_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let question = db::get_question(&state.pool, &req.question_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // 다른 폼의 질문에 대한 답변은 받지 않습니다.
    if question.form_id != response.form_id {
        return Err(AppError::BadRequest(
            "question does not belong to the response's form".to_string(),
        ));
    }

    let id = uuid::Uuid::now_v7().to_string();
    let answer = db::upsert_answer(
        &state.pool,
        &id,
        &req.response_id,
        &req.question_id,
        &req.answer_text,
    )
    .await?;

    Ok(Json(answer))
}

/// `GET /responses/:id/answers` — 한 응답의 답변을 모두 조회합니다.
pub async fn list_answers(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(response_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    db::get_response(&state.pool, &response_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let answers = db::list_answers_by_response(&state.pool, &response_id).await?;
    Ok(Json(json!({ "answers": answers })))
}
