//! # civiq — 다중 페이지 설문/시민 의견수렴 백엔드
//!
//! 관리자가 순서 있는 질문들을 정의하면, 최종 사용자가 한 화면에 한 질문씩
//! 답하고(답변은 저장 즉시 영속화), 관리자는 퍼널 통계와 응답 내보내기를
//! 조회하는 HTTP API 서버입니다.
//!
//! 모듈 구성은 바이너리(main.rs)와 통합 테스트(tests/)가 같은 코드를
//! 공유하도록 라이브러리 크레이트로 노출합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
