//! # 질문 모델 정의
//!
//! 설문 폼을 구성하는 질문(Question)의 데이터 구조체들을 정의합니다.
//!
//! ## 질문 흐름
//! 1. 관리자가 `CreateQuestionRequest`로 질문을 추가 (폼의 맨 뒤에 붙음)
//! 2. `UpdateQuestionRequest`로 부분 수정, `ReorderQuestionsRequest`로 순서 변경
//! 3. 최종 사용자는 한 화면에 한 질문씩 order_index 순서로 답변

use serde::{Deserialize, Serialize};

/// 질문 유형
///
/// DB에는 kebab-case 문자열(TEXT)로 저장됩니다.
/// 쓰기 경계에서 serde가 검증하므로 저장된 값이 이 다섯 가지를
/// 벗어나는 경우는 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum QuestionType {
    /// 한 줄 텍스트 입력
    ShortText,
    /// 여러 줄 텍스트 입력
    LongText,
    /// 선택지 중 하나 선택 (라디오 버튼)
    SingleChoice,
    /// 선택지 중 여러 개 선택 (체크박스)
    MultiChoice,
    /// 드롭다운에서 하나 선택
    Dropdown,
}

impl QuestionType {
    /// 선택지(options)가 필요한 유형인지 여부
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionType::SingleChoice | QuestionType::MultiChoice | QuestionType::Dropdown
        )
    }
}

/// 질문 엔티티 — DB의 `questions` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// 질문 고유 식별자 (UUIDv7)
    pub id: String,
    /// 이 질문이 속한 폼의 ID
    pub form_id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    /// 선택형 질문의 선택지. 항상 JSON 문자열 배열로 저장됩니다.
    /// (예: `["Oui","Non"]`) — 쓰기 시점에 한 번 검증하므로
    /// 읽기 경로에서 재해석할 일이 없습니다. services::options 참고.
    pub options: Option<String>,
    pub is_required: bool,
    /// 폼 내 표시 순서. 희소 정렬 키이므로 삭제 후 빈 틈이 남을 수 있지만
    /// 한 폼 안에서 중복되지는 않습니다.
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// API 경계에서 노출하는 질문 표현 — options를 파싱된 목록으로 내보냅니다.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOut {
    pub id: String,
    pub form_id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub is_required: bool,
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub question_type: QuestionType,
    /// 선택형 유형에서만 의미가 있으며, 그 경우 필수입니다.
    pub options: Option<Vec<String>>,
    /// 기본값: true (필수 질문)
    pub is_required: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub is_required: Option<bool>,
}

/// 순서 변경 요청 — 폼의 **모든** 질문 ID를 원하는 순서대로 담아야 합니다.
/// 기존 집합과 일치하지 않으면 400으로 거부됩니다.
#[derive(Debug, Deserialize)]
pub struct ReorderQuestionsRequest {
    pub question_ids: Vec<String>,
}
