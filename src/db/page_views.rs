//! # 페이지 조회수 쿼리 모듈
//!
//! 방문 수를 세는 append-only 카운터 테이블입니다.
//! 세션이나 응답과 연결되지 않는 익명 기록이며,
//! 대시보드 개요(analytics)에서 총합으로만 소비됩니다.

use crate::error::AppError;
use sqlx::SqlitePool;

/// 익명 방문 1회를 기록합니다. 세션과 연결되지 않는 단순 카운터입니다.
pub async fn record_page_view(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("INSERT INTO page_views (id) VALUES (?)")
        .bind(uuid::Uuid::now_v7().to_string())
        .execute(pool)
        .await?;

    Ok(())
}

/// 지금까지 기록된 총 방문 수를 반환합니다.
pub async fn count_page_views(pool: &SqlitePool) -> Result<i64, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM page_views")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
