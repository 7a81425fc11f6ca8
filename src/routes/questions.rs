//! # 질문(Question) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/v1/forms/:id/questions`         → 질문 목록, 순서대로 (공개)
//! - `POST   /api/v1/forms/:id/questions`         → 질문 추가, 맨 뒤에 (관리자)
//! - `PATCH  /api/v1/questions/:id`               → 질문 부분 수정 (관리자)
//! - `DELETE /api/v1/questions/:id`               → 질문 삭제 (관리자)
//! - `PUT    /api/v1/forms/:id/questions/reorder` → 전체 순서 재배치 (관리자)
//!
//! 선택지(options)는 여기 쓰기 경계에서 services::options로 검증·정규화되어
//! 저장됩니다. 읽기 응답은 파싱된 목록(QuestionOut)으로 내보냅니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AdminUser,
    models::*,
    routes::forms::AppState,
    services::options::{decode_options, validate_options},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

fn to_out(question: Question) -> Result<QuestionOut, AppError> {
    let options = decode_options(question.options.as_deref())?;
    Ok(QuestionOut {
        id: question.id,
        form_id: question.form_id,
        question_text: question.question_text,
        question_type: question.question_type,
        options,
        is_required: question.is_required,
        order_index: question.order_index,
        created_at: question.created_at,
        updated_at: question.updated_at,
    })
}

/// `GET /forms/:id/questions` — 폼의 질문을 표시 순서대로 조회합니다 (공개).
pub async fn list_questions(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    // 폼이 없으면 404 (빈 목록과 구분)
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = db::list_questions(&state.pool, &form_id)
        .await?
        .into_iter()
        .map(to_out)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(json!({ "questions": questions })))
}

/// `POST /forms/:id/questions` — 질문을 폼의 맨 뒤에 추가합니다.
///
/// order_index는 클라이언트가 아니라 서버(현재 최대 인덱스 + 1)가 부여합니다.
pub async fn create_question(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(form_id): Path<String>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Json<QuestionOut>, AppError> {
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if req.question_text.trim().is_empty() {
        return Err(AppError::BadRequest("Question text is required".to_string()));
    }

    // 저장 전에 선택지를 한 번만 검증·정규화
    let options_json = validate_options(req.question_type, req.options.as_ref())?;

    let id = uuid::Uuid::now_v7().to_string();
    let question = db::append_question(&state.pool, &id, &form_id, &req, options_json).await?;

    Ok(Json(to_out(question)?))
}

/// `PATCH /questions/:id` — 질문을 부분 수정합니다.
///
/// 유형이 바뀌면 선택지 요건도 함께 바뀌므로, "수정 후의" 유형과
/// 선택지 조합으로 다시 검증합니다. 선택형 → 텍스트형 전환은
/// 저장된 선택지를 제거합니다.
pub async fn update_question(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionOut>, AppError> {
    let existing = db::get_question(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    if req.question_text.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::BadRequest("Question text cannot be empty".to_string()));
    }

    let effective_type = req.question_type.unwrap_or(existing.question_type);

    // options 컬럼을 건드려야 하는 경우를 판별합니다:
    // - 요청에 새 선택지가 옴 → 검증 후 교체
    // - 유형이 비선택형으로 바뀜 → 제거 (Some(None))
    // - 유형이 선택형으로 바뀌는데 선택지가 없음 → 기존 선택지가 있어야 허용
    let options_json: Option<Option<String>> = if req.options.is_some() {
        Some(validate_options(effective_type, req.options.as_ref())?)
    } else if !effective_type.is_choice() && existing.options.is_some() {
        Some(None)
    } else {
        if effective_type.is_choice() && existing.options.is_none() {
            return Err(AppError::BadRequest(
                "choice-type questions require options".to_string(),
            ));
        }
        None // options 변경 없음
    };

    let question = db::update_question(&state.pool, &id, &req, options_json)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(to_out(question)?))
}

/// `DELETE /questions/:id` — 질문과 그에 달린 답변을 삭제합니다.
pub async fn delete_question(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::delete_question(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}

/// `PUT /forms/:id/questions/reorder` — 폼의 질문 순서를 재배치합니다.
///
/// 요청 본문은 폼의 모든 질문 ID를 원하는 순서대로 담아야 합니다.
pub async fn reorder_questions(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(form_id): Path<String>,
    Json(req): Json<ReorderQuestionsRequest>,
) -> Result<Json<Value>, AppError> {
    db::get_form(&state.pool, &form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    db::reorder_questions(&state.pool, &form_id, &req.question_ids).await?;

    Ok(Json(json!({ "success": true })))
}
