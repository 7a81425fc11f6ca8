use serde::{Deserialize, Serialize};

/// 설문 폼 엔티티 — DB의 `forms` 테이블 한 행에 대응합니다.
///
/// 폼은 질문들의 순서 있는 집합을 소유하며, 질문을 통해
/// 수집된 응답/답변까지 배타적으로 소유합니다.
/// 폼 삭제 시 질문/응답/답변이 함께 삭제됩니다 (db::forms 참고).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// 폼 소유자의 사용자 ID
    pub user_id: String,
    /// 응답 수집 활성화 여부 (SQLite에는 BOOLEAN이 없어 INTEGER 0/1로 저장)
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFormRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
