//! # civiq 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작
//!
//! 연결 풀은 여기서 한 번 만들어 AppState로 모든 핸들러에 주입됩니다.
//! 지연 초기화되는 전역 DB 핸들은 없습니다 — 저장소가 설정되지 않았으면
//! 서버는 이 함수에서 에러로 종료합니다.

use anyhow::Result;
use axum::{
    routing::{get, patch, post, put},
    Router,
};
use civiq::config::Config;
use civiq::routes::{self, forms::AppState, *};
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// #[tokio::main]: 비동기 런타임을 시작하는 어트리뷰트 매크로.
// 내부적으로 tokio 런타임을 생성하고 main을 그 안에서 실행합니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    tracing_subscriber::registry()
        .with(
            // EnvFilter: RUST_LOG 환경변수로 로그 레벨을 제어합니다.
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civiq=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // DATABASE_URL / JWT_SECRET이 없으면 여기서 에러로 종료합니다 (fail fast).
    let config = Config::from_env()?;
    tracing::info!("Starting civiq server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    // sqlx::migrate!는 컴파일 타임에 ./migrations 폴더의 SQL 파일들을 포함시킵니다.
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 애플리케이션 상태(State) 생성 ──
    // SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
    let state = AppState {
        pool: pool.clone(),
        jwt_secret: config.jwt_secret.clone(),
    };

    // ── 7단계: API 라우터 설정 ──

    // 인증 관련 라우트 (회원가입, 로그인, 토큰 갱신, 로그아웃, 내 정보)
    let auth_routes = Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/me", get(routes::auth::me));

    let api_routes = Router::new()
        .merge(auth_routes)
        // 폼(Form) CRUD — 조회는 공개, 변경은 관리자
        .route("/forms", get(list_forms).post(create_form))
        .route("/forms/{id}", get(forms::get_form).patch(update_form).delete(delete_form))
        // 질문(Question) — 목록은 공개(응답자가 보는 순서), 변경은 관리자
        .route("/forms/{id}/questions", get(questions::list_questions).post(create_question))
        .route("/forms/{id}/questions/reorder", put(reorder_questions))
        .route("/questions/{id}", patch(update_question).delete(delete_question))
        // 응답(Response) 세션 — get-or-create와 완료 전이는 공개
        .route("/forms/{id}/responses", post(get_or_create_response).get(list_responses))
        .route("/responses/{id}/complete", post(complete_response))
        // 답변(Answer) — 저장은 공개(설문 응답자), 조회는 관리자
        .route("/answers", post(save_answer))
        .route("/responses/{id}/answers", get(list_answers))
        // 통계/내보내기
        .route("/forms/{id}/funnel", get(get_funnel))
        .route("/forms/{id}/export", get(export_responses))
        .route("/analytics/overview", get(get_overview))
        .route("/page-views", post(record_page_view))
        // 헬스체크
        .route("/health", get(health_check))
        .with_state(state);

    // ── 8단계: CORS 미들웨어 설정 ──
    // 개발 환경에서는 Any(모두 허용)로 설정합니다.
    // 프로덕션에서는 특정 도메인만 허용해야 합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── 9단계: 프론트엔드 정적 파일 서빙 설정 ──
    // 빌드된 프론트엔드 파일이 있으면 같은 서버에서 서빙합니다.
    // SPA이므로, 찾을 수 없는 경로는 index.html로 돌려보냅니다.
    let frontend_dist = Path::new("../frontend/dist");
    let app = if frontend_dist.exists() {
        tracing::info!("Serving frontend static files from ../frontend/dist");

        let serve_dir = ServeDir::new("../frontend/dist")
            .not_found_service(ServeFile::new("../frontend/dist/index.html"));

        Router::new()
            .nest("/api/v1", api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Frontend dist directory not found, serving API only");

        Router::new()
            .nest("/api/v1", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    // ── 10단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
