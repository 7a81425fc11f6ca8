//! # 비즈니스 로직 서비스 모듈
//!
//! DB나 HTTP에 의존하지 않는 순수 도메인 로직을 모아둔 모듈입니다.
//! - `export`: 응답 × 질문 표(내보내기) 조립
//! - `funnel`: 질문별 답변 커버리지(퍼널) 계산
//! - `options`: 선택지 목록 검증과 JSON 정규화
//! - `values`: 복수 선택 답변의 구분자 인코딩/디코딩

pub mod export;
pub mod funnel;
pub mod options;
pub mod values;
