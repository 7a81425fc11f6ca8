//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `analytics`: 퍼널/개요/내보내기, 방문 카운터
//! - `answers`: 답변 저장(upsert)과 조회
//! - `auth`: 인증 관련 (회원가입, 로그인, 토큰 갱신, 로그아웃)
//! - `forms`: 폼 CRUD 핸들러 (공유 AppState 포함)
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `questions`: 질문 CRUD와 순서 변경 핸들러
//! - `responses`: 응답 세션 get-or-create와 완료 전이

pub mod analytics;
pub mod answers;
pub mod auth;
pub mod forms;
pub mod health;
pub mod questions;
pub mod responses;

// 각 모듈의 핸들러 함수들을 재공개하여
// main.rs에서 `routes::list_forms`처럼 바로 접근 가능하게 합니다.
pub use analytics::*;
pub use answers::*;
pub use forms::*;
pub use health::*;
pub use questions::*;
pub use responses::*;
