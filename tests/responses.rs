//! 응답 세션의 생성 멱등성과 완료 전이의 통합 테스트.

mod common;

use axum::extract::{Path, State};
use axum::Json;
use civiq::db;
use civiq::error::AppError;
use civiq::models::*;
use civiq::routes;

#[tokio::test]
async fn same_session_always_returns_same_response() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let first = db::get_or_create_response(&pool, &form.id, "session-1")
        .await
        .unwrap();

    // 같은 세션으로 몇 번을 호출해도 같은 행 하나뿐이다.
    for _ in 0..5 {
        let again = db::get_or_create_response(&pool, &form.id, "session-1")
            .await
            .unwrap();
        assert_eq!(again.id, first.id);
    }

    let (total, _) = db::count_responses(&pool, &form.id).await.unwrap();
    assert_eq!(total, 1);

    // 다른 세션은 새 응답을 만든다.
    let other = db::get_or_create_response(&pool, &form.id, "session-2")
        .await
        .unwrap();
    assert_ne!(other.id, first.id);
}

#[tokio::test]
async fn completion_is_idempotent_and_keeps_first_timestamp() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let response = db::get_or_create_response(&pool, &form.id, "s")
        .await
        .unwrap();
    assert!(response.completed_at.is_none());

    let completed = db::complete_response(&pool, &response.id)
        .await
        .unwrap()
        .unwrap();
    let first_timestamp = completed.completed_at.clone().unwrap();

    // 두 번째 완료 호출은 최초의 완료 시각을 보존한다.
    let again = db::complete_response(&pool, &response.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.completed_at.as_deref(), Some(first_timestamp.as_str()));

    let missing = db::complete_response(&pool, "no-such-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn count_responses_splits_completed_and_in_progress() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let done = db::get_or_create_response(&pool, &form.id, "done").await.unwrap();
    db::get_or_create_response(&pool, &form.id, "abandoned").await.unwrap();
    db::complete_response(&pool, &done.id).await.unwrap();

    let (total, completed) = db::count_responses(&pool, &form.id).await.unwrap();
    assert_eq!((total, completed), (2, 1));
}

#[tokio::test]
async fn handler_rejects_inactive_form_and_blank_session() {
    let state = common::test_state().await;
    let form = common::seed_form(&state.pool).await;

    let blank = routes::responses::get_or_create_response(
        State(state.clone()),
        Path(form.id.clone()),
        Json(GetOrCreateResponseRequest { session_id: "  ".to_string() }),
    )
    .await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    // 폼을 비활성화하면 새 세션을 받지 않는다.
    let update = UpdateFormRequest {
        title: None,
        description: None,
        is_active: Some(false),
    };
    db::update_form(&state.pool, &form.id, &update).await.unwrap();

    let closed = routes::responses::get_or_create_response(
        State(state.clone()),
        Path(form.id.clone()),
        Json(GetOrCreateResponseRequest { session_id: "s".to_string() }),
    )
    .await;
    assert!(matches!(closed, Err(AppError::BadRequest(_))));

    let missing = routes::responses::get_or_create_response(
        State(state),
        Path("no-such-form".to_string()),
        Json(GetOrCreateResponseRequest { session_id: "s".to_string() }),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
}

#[tokio::test]
async fn handler_exposes_derived_completion_flag() {
    let state = common::test_state().await;
    let form = common::seed_form(&state.pool).await;

    let Json(out) = routes::responses::get_or_create_response(
        State(state.clone()),
        Path(form.id.clone()),
        Json(GetOrCreateResponseRequest { session_id: "s".to_string() }),
    )
    .await
    .unwrap();
    assert!(!out.is_completed);
    assert!(out.completed_at.is_none());

    let Json(done) =
        routes::responses::complete_response(State(state), Path(out.id.clone()))
            .await
            .unwrap();
    assert!(done.is_completed);
    assert!(done.completed_at.is_some());
}
