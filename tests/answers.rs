//! 답변 저장(업서트)의 통합 테스트.

mod common;

use axum::extract::State;
use axum::Json;
use civiq::db;
use civiq::error::AppError;
use civiq::models::*;
use civiq::routes;
use civiq::services::values::{decode_values, encode_values};

#[tokio::test]
async fn second_save_replaces_answer_in_place() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;
    let question = common::seed_question(&pool, &form.id, "Q").await;
    let response = db::get_or_create_response(&pool, &form.id, "s").await.unwrap();

    let id_a = uuid::Uuid::now_v7().to_string();
    let first = db::upsert_answer(&pool, &id_a, &response.id, &question.id, "A")
        .await
        .unwrap();
    assert_eq!(first.answer_text, "A");

    // 같은 (응답, 질문) 쌍으로 다시 저장하면 행이 늘지 않고 값만 바뀐다.
    let id_b = uuid::Uuid::now_v7().to_string();
    let second = db::upsert_answer(&pool, &id_b, &response.id, &question.id, "B")
        .await
        .unwrap();
    assert_eq!(second.answer_text, "B");
    assert_eq!(second.id, first.id);

    let answers = db::list_answers_by_response(&pool, &response.id).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer_text, "B");
}

#[tokio::test]
async fn multi_choice_values_round_trip_through_storage() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;
    let question = common::seed_question(&pool, &form.id, "Colors").await;
    let response = db::get_or_create_response(&pool, &form.id, "s").await.unwrap();

    // 쉼표가 든 선택지도 구분자가 |||라서 안전하게 왕복한다.
    let values = vec!["Blue, light".to_string(), "Red".to_string()];
    let encoded = encode_values(&values);
    let id = uuid::Uuid::now_v7().to_string();
    let saved = db::upsert_answer(&pool, &id, &response.id, &question.id, &encoded)
        .await
        .unwrap();

    assert_eq!(decode_values(&saved.answer_text), values);
}

#[tokio::test]
async fn handler_rejects_cross_form_answers() {
    let state = common::test_state().await;
    let form_a = common::seed_form(&state.pool).await;
    let form_b = common::seed_form(&state.pool).await;

    let question_b = common::seed_question(&state.pool, &form_b.id, "Q").await;
    let response_a = db::get_or_create_response(&state.pool, &form_a.id, "s")
        .await
        .unwrap();

    // 응답 A에 폼 B의 질문으로 답하려는 시도
    let mismatch = routes::answers::save_answer(
        State(state.clone()),
        Json(SaveAnswerRequest {
            response_id: response_a.id.clone(),
            question_id: question_b.id.clone(),
            answer_text: "x".to_string(),
        }),
    )
    .await;
    assert!(matches!(mismatch, Err(AppError::BadRequest(_))));

    let no_response = routes::answers::save_answer(
        State(state.clone()),
        Json(SaveAnswerRequest {
            response_id: "missing".to_string(),
            question_id: question_b.id.clone(),
            answer_text: "x".to_string(),
        }),
    )
    .await;
    assert!(matches!(no_response, Err(AppError::NotFound)));

    let no_question = routes::answers::save_answer(
        State(state),
        Json(SaveAnswerRequest {
            response_id: response_a.id,
            question_id: "missing".to_string(),
            answer_text: "x".to_string(),
        }),
    )
    .await;
    assert!(matches!(no_question, Err(AppError::NotFound)));
}

#[tokio::test]
async fn answers_are_scoped_to_their_form() {
    let pool = common::test_pool().await;
    let form_a = common::seed_form(&pool).await;
    let form_b = common::seed_form(&pool).await;

    let question_a = common::seed_question(&pool, &form_a.id, "QA").await;
    let question_b = common::seed_question(&pool, &form_b.id, "QB").await;
    let response_a = db::get_or_create_response(&pool, &form_a.id, "sa").await.unwrap();
    let response_b = db::get_or_create_response(&pool, &form_b.id, "sb").await.unwrap();

    let id_a = uuid::Uuid::now_v7().to_string();
    db::upsert_answer(&pool, &id_a, &response_a.id, &question_a.id, "a")
        .await
        .unwrap();
    let id_b = uuid::Uuid::now_v7().to_string();
    db::upsert_answer(&pool, &id_b, &response_b.id, &question_b.id, "b")
        .await
        .unwrap();

    let only_a = db::list_answers_by_form(&pool, &form_a.id).await.unwrap();
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a[0].answer_text, "a");
}
