//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `analytics`: 퍼널/통계/내보내기 관련 구조체
//! - `answer`: 답변(Answer) 관련 구조체
//! - `form`: 설문 폼(Form) 관련 구조체
//! - `question`: 질문(Question) 관련 구조체
//! - `response`: 응답 세션(Response) 관련 구조체
//! - `user`: 사용자(User) 관련 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.

pub mod analytics;
pub mod answer;
pub mod form;
pub mod question;
pub mod response;
pub mod user;

pub use analytics::*;
pub use answer::*;
pub use form::*;
pub use question::*;
pub use response::*;
pub use user::*;
