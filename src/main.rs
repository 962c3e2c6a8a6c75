//! # 일기 API 서버 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 업로드 디렉토리(`images/`, `audio/`) 생성
//! 6. API 라우터에 CORS/로깅 레이어 설정
//! 7. HTTP 서버 시작

// ── 모듈 선언 ──
mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;

use anyhow::Result; // main에서만 쓰는 범용 Result 타입
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use routes::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 diary_api, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diary_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET is not set, using the development secret");
    }
    tracing::info!("Starting diary API on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    // "sqlite:data/diary.db"의 data/ 폴더가 없으면 파일을 만들 수 없으므로 먼저 만듭니다.
    if let Some(dir) = sqlite_parent_dir(&config.database_url) {
        tokio::fs::create_dir_all(&dir).await?;
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 업로드 디렉토리 생성 ──
    services::media::ensure_media_dirs(&config.upload_dir).await?;
    tracing::info!("Upload directory ready: {}", config.upload_dir);

    // ── 7단계: 라우터 + 미들웨어 ──
    let state = AppState::new(pool, &config);
    let app = routes::api_router(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http()); // HTTP 요청/응답 자동 로깅

    // ── 8단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS 설정: 허용 목록에 있는 출처만 받습니다.
///
/// 헤더 값으로 쓸 수 없는 출처는 경고를 남기고 건너뜁니다.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(300))
}

/// SQLite URL에서 데이터베이스 파일의 상위 디렉토리를 꺼냅니다.
///
/// 예: `"sqlite:data/diary.db?mode=rwc"` → `Some("data")`
/// 메모리 DB나 상위 디렉토리가 없는 경로는 `None`.
fn sqlite_parent_dir(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
