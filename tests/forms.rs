//! 폼 CRUD와 연쇄 삭제의 통합 테스트.

mod common;

use civiq::db;
use civiq::models::*;

#[tokio::test]
async fn create_then_get_round_trips() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let fetched = db::get_form(&pool, &form.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Consultation");
    assert!(fetched.is_active);
    assert!(fetched.description.is_none());

    let missing = db::get_form(&pool, "no-such-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn update_touches_only_requested_fields() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let req = UpdateFormRequest {
        title: None,
        description: Some("Budget 2026".to_string()),
        is_active: None,
    };
    let updated = db::update_form(&pool, &form.id, &req).await.unwrap().unwrap();

    assert_eq!(updated.title, form.title);
    assert_eq!(updated.description.as_deref(), Some("Budget 2026"));
    assert!(updated.is_active);

    let closed = UpdateFormRequest {
        title: None,
        description: None,
        is_active: Some(false),
    };
    let updated = db::update_form(&pool, &form.id, &closed).await.unwrap().unwrap();
    assert!(!updated.is_active);

    let missing = db::update_form(&pool, "no-such-id", &req).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn list_is_scoped_to_owner() {
    let pool = common::test_pool().await;
    let mine = common::seed_form(&pool).await;
    let theirs = common::seed_form(&pool).await;

    let listed = db::list_forms_by_owner(&pool, &mine.user_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, mine.id);
    assert_ne!(listed[0].id, theirs.id);
}

#[tokio::test]
async fn delete_cascades_to_questions_responses_and_answers() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;
    let question = common::seed_question(&pool, &form.id, "Q").await;
    let response = db::get_or_create_response(&pool, &form.id, "s").await.unwrap();

    let answer_id = uuid::Uuid::now_v7().to_string();
    db::upsert_answer(&pool, &answer_id, &response.id, &question.id, "a")
        .await
        .unwrap();

    let deleted = db::delete_form_cascade(&pool, &form.id).await.unwrap();
    assert!(deleted);

    assert!(db::get_form(&pool, &form.id).await.unwrap().is_none());
    assert!(db::get_question(&pool, &question.id).await.unwrap().is_none());
    assert!(db::get_response(&pool, &response.id).await.unwrap().is_none());
    assert!(db::list_answers_by_response(&pool, &response.id)
        .await
        .unwrap()
        .is_empty());

    let missing = db::delete_form_cascade(&pool, &form.id).await.unwrap();
    assert!(!missing);
}
