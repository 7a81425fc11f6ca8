//! 질문 CRUD와 순서 관리(추가/재배치/삭제)의 통합 테스트.

mod common;

use civiq::db;
use civiq::error::AppError;
use civiq::models::*;

#[tokio::test]
async fn append_assigns_sequential_order_indices() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let a = common::seed_question(&pool, &form.id, "A").await;
    let b = common::seed_question(&pool, &form.id, "B").await;
    let c = common::seed_question(&pool, &form.id, "C").await;

    assert_eq!(a.order_index, 0);
    assert_eq!(b.order_index, 1);
    assert_eq!(c.order_index, 2);

    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn list_never_has_duplicate_order_indices() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    for text in ["Q1", "Q2", "Q3", "Q4"] {
        common::seed_question(&pool, &form.id, text).await;
    }

    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    let mut indices: Vec<i64> = listed.iter().map(|q| q.order_index).collect();
    let before = indices.len();
    indices.dedup();
    assert_eq!(indices.len(), before);
}

#[tokio::test]
async fn reorder_applies_full_permutation() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let a = common::seed_question(&pool, &form.id, "A").await;
    let b = common::seed_question(&pool, &form.id, "B").await;
    let c = common::seed_question(&pool, &form.id, "C").await;

    db::reorder_questions(&pool, &form.id, &[c.id.clone(), a.id.clone(), b.id.clone()])
        .await
        .unwrap();

    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["C", "A", "B"]);

    let indices: Vec<i64> = listed.iter().map(|q| q.order_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[tokio::test]
async fn reorder_rejects_incomplete_or_foreign_sets() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let a = common::seed_question(&pool, &form.id, "A").await;
    let b = common::seed_question(&pool, &form.id, "B").await;

    // 일부만 담은 요청
    let partial = db::reorder_questions(&pool, &form.id, &[a.id.clone()]).await;
    assert!(matches!(partial, Err(AppError::BadRequest(_))));

    // 다른 폼의 질문 ID가 섞인 요청
    let foreign = db::reorder_questions(
        &pool,
        &form.id,
        &[a.id.clone(), "not-a-question".to_string()],
    )
    .await;
    assert!(matches!(foreign, Err(AppError::BadRequest(_))));

    // 같은 ID를 두 번 담은 요청
    let duplicated =
        db::reorder_questions(&pool, &form.id, &[a.id.clone(), a.id.clone()]).await;
    assert!(matches!(duplicated, Err(AppError::BadRequest(_))));

    // 실패한 요청들이 순서를 건드리지 않았는지 확인
    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[1].id, b.id);
}

#[tokio::test]
async fn delete_keeps_remaining_order_without_repacking() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let a = common::seed_question(&pool, &form.id, "A").await;
    let b = common::seed_question(&pool, &form.id, "B").await;
    let c = common::seed_question(&pool, &form.id, "C").await;

    let deleted = db::delete_question(&pool, &b.id).await.unwrap();
    assert!(deleted);

    // 남은 질문의 상대 순서는 유지되고, 인덱스는 재배치되지 않는다.
    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[0].order_index, 0);
    assert_eq!(listed[1].id, c.id);
    assert_eq!(listed[1].order_index, 2);

    let missing = db::delete_question(&pool, &b.id).await.unwrap();
    assert!(!missing);
}

#[tokio::test]
async fn append_after_delete_never_reuses_an_index() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    common::seed_question(&pool, &form.id, "A").await;
    let b = common::seed_question(&pool, &form.id, "B").await;
    let c = common::seed_question(&pool, &form.id, "C").await;

    // 가운데를 지우면 [0, 2]가 남는다. 이때 추가된 질문이
    // 살아남은 C의 인덱스(2)를 다시 받으면 안 된다.
    db::delete_question(&pool, &b.id).await.unwrap();
    let d = common::seed_question(&pool, &form.id, "D").await;
    assert_eq!(d.order_index, 3);

    let listed = db::list_questions(&pool, &form.id).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["A", "C", "D"]);

    let mut indices: Vec<i64> = listed.iter().map(|q| q.order_index).collect();
    assert_eq!(indices, vec![0, 2, 3]);
    indices.dedup();
    assert_eq!(indices.len(), listed.len());

    // 틈이 있는 상태에서 C를 지워도 맨 뒤 추가는 계속 단조 증가한다.
    db::delete_question(&pool, &c.id).await.unwrap();
    let e = common::seed_question(&pool, &form.id, "E").await;
    assert_eq!(e.order_index, 4);
}

#[tokio::test]
async fn choice_question_round_trips_options() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;

    let options = vec!["Oui".to_string(), "Non".to_string()];
    let options_json = civiq::services::options::validate_options(
        QuestionType::SingleChoice,
        Some(&options),
    )
    .unwrap();

    let req = CreateQuestionRequest {
        question_text: "Continuer ?".to_string(),
        question_type: QuestionType::SingleChoice,
        options: Some(options.clone()),
        is_required: Some(true),
    };
    let id = uuid::Uuid::now_v7().to_string();
    let question = db::append_question(&pool, &id, &form.id, &req, options_json)
        .await
        .unwrap();

    assert_eq!(question.question_type, QuestionType::SingleChoice);
    let decoded =
        civiq::services::options::decode_options(question.options.as_deref()).unwrap();
    assert_eq!(decoded, options);
}

#[tokio::test]
async fn update_can_switch_question_to_long_text() {
    let pool = common::test_pool().await;
    let form = common::seed_form(&pool).await;
    let question = common::seed_question(&pool, &form.id, "Old text").await;

    let req = UpdateQuestionRequest {
        question_text: Some("New text".to_string()),
        question_type: Some(QuestionType::LongText),
        options: None,
        is_required: Some(false),
    };
    let updated = db::update_question(&pool, &question.id, &req, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.question_text, "New text");
    assert_eq!(updated.question_type, QuestionType::LongText);
    assert!(!updated.is_required);
    // 건드리지 않은 필드는 그대로
    assert_eq!(updated.order_index, question.order_index);
}
