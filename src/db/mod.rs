//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `answers`: 답변 upsert와 조회, 질문별 답변 수 집계
//! - `forms`: 폼 CRUD와 명시적 연쇄 삭제
//! - `page_views`: 익명 방문 카운터
//! - `questions`: 질문 CRUD, 순서 부여/재배치 (시퀀싱)
//! - `responses`: 세션 → 응답 매핑 (get-or-create), 완료 전이
//! - `users`: 사용자 인증 관련 쿼리
//!
//! 연결 풀은 main에서 한 번 만들어 AppState로 주입됩니다.
//! 이 계층에 전역 상태나 지연 초기화는 없습니다.

pub mod answers;
pub mod forms;
pub mod page_views;
pub mod questions;
pub mod responses;
pub mod users;

// 도메인 모듈의 공개 함수를 재공개(re-export)하여
// `crate::db::list_questions`처럼 바로 접근할 수 있게 합니다.
// users는 예외 — 인증 라우트가 `db::users as db_users`로 한정해 쓰므로
// 재공개하지 않습니다 (create_user 같은 이름이 도메인 함수와 섞이지 않게).
pub use answers::*;
pub use forms::*;
pub use page_views::*;
pub use questions::*;
pub use responses::*;
