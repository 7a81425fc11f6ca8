//! Shared setup for integration tests: an in-memory SQLite pool with the
//! real migrations applied, plus small fixture helpers.
#![allow(dead_code)]

use civiq::db;
use civiq::models::*;
use civiq::routes::forms::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// A fresh in-memory database per test.
///
/// max_connections(1) matters: every connection to `sqlite::memory:` gets
/// its own database, so the pool must hand out the same one.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

pub async fn test_state() -> AppState {
    AppState {
        pool: test_pool().await,
        jwt_secret: "test-secret".to_string(),
    }
}

/// Creates an owner row and a form for it, returning the form.
pub async fn seed_form(pool: &SqlitePool) -> Form {
    let user_id = uuid::Uuid::now_v7().to_string();
    let username = format!("owner-{user_id}");
    db::users::create_user(pool, &user_id, &username, None, "x", "admin")
        .await
        .expect("failed to create owner");

    let form_id = uuid::Uuid::now_v7().to_string();
    let req = CreateFormRequest {
        title: "Consultation".to_string(),
        description: None,
    };
    db::create_form(pool, &form_id, &user_id, &req)
        .await
        .expect("failed to create form")
}

/// Appends a short-text question to the form.
pub async fn seed_question(pool: &SqlitePool, form_id: &str, text: &str) -> Question {
    let id = uuid::Uuid::now_v7().to_string();
    let req = CreateQuestionRequest {
        question_text: text.to_string(),
        question_type: QuestionType::ShortText,
        options: None,
        is_required: Some(true),
    };
    db::append_question(pool, &id, form_id, &req, None)
        .await
        .expect("failed to append question")
}
