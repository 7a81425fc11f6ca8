//! # 응답 세션 모델 정의
//!
//! 한 명의 최종 사용자가 폼을 한 번 통과하는 단위인 응답(Response)을
//! 정의합니다. 클라이언트가 생성한 불투명 세션 ID로 식별되며,
//! 같은 세션으로 몇 번을 조회해도 같은 응답 행 하나만 존재합니다.
//!
//! ## 상태 기계
//! `InProgress → Completed` (종료 상태, 되돌아가는 전이는 없음)
//! 세션을 중도에 포기한 사용자는 영원히 InProgress로 남습니다 — 에러가 아닙니다.

use serde::{Deserialize, Serialize};

/// 응답 엔티티 — DB의 `responses` 테이블 한 행에 대응합니다.
///
/// 완료 여부는 별도 플래그가 아니라 `completed_at`의 존재로 표현합니다.
/// nullable 타임스탬프가 "언제"까지 함께 담기 때문입니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SurveyResponse {
    pub id: String,
    pub form_id: String,
    /// 클라이언트가 생성한 불투명 세션 식별자 (폼 내에서 유일)
    pub session_id: String,
    /// None이면 진행 중, Some이면 완료 시각
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// API 경계에서 노출하는 응답 표현 — 파생된 `is_completed`를 함께 내보냅니다.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseOut {
    pub id: String,
    pub form_id: String,
    pub session_id: String,
    pub is_completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SurveyResponse> for ResponseOut {
    fn from(r: SurveyResponse) -> Self {
        Self {
            is_completed: r.completed_at.is_some(),
            id: r.id,
            form_id: r.form_id,
            session_id: r.session_id,
            completed_at: r.completed_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetOrCreateResponseRequest {
    pub session_id: String,
}
