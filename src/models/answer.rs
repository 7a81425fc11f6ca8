use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Answer {
    pub id: String,
    pub response_id: String,
    pub question_id: String,
    /// 복수 선택 답변은 services::values의 구분자로 합쳐진 텍스트
    pub answer_text: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveAnswerRequest {
    pub response_id: String,
    pub question_id: String,
    pub answer_text: String,
}
