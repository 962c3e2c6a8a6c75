//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러와 이들이 공유하는 상태/응답 형식을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `auth`: 회원가입, 로그인, 내 정보
//! - `diaries`: 일기 CRUD, 공개 목록, 공개 설정
//! - `uploads`: 이미지/음성 업로드와 파일 삭제
//! - `health`: 헬스체크
//!
//! ## 응답 형식
//! - 성공: `{ "data": ... }` (`Data<T>`)
//! - 실패: `{ "error": "<message>" }` (`AppError`, `AuthError`)

pub mod auth;
pub mod diaries;
pub mod health;
pub mod uploads;

#[cfg(test)]
mod tests;

use axum::{
    extract::{DefaultBodyLimit, FromRequest},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tower_http::services::ServeDir;

use crate::{config::Config, error::AppError, services::media, services::upload::MediaKind};

/// multipart 경계/헤더가 차지하는 여유분
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// 애플리케이션 공유 상태
///
/// 시작 시 한 번 만들어지고 이후에는 읽기만 합니다.
/// `SqlitePool`은 내부적으로 Arc라서 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// 세션 토큰 서명용 비밀키
    pub jwt_secret: String,
    pub token_hours: i64,
    /// 업로드 파일 저장 루트
    pub upload_dir: String,
    pub max_image_bytes: usize,
    pub max_audio_bytes: usize,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            token_hours: config.token_hours,
            upload_dir: config.upload_dir.clone(),
            max_image_bytes: config.max_image_bytes,
            max_audio_bytes: config.max_audio_bytes,
        }
    }

    pub fn upload_limit(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Image => self.max_image_bytes,
            MediaKind::Audio => self.max_audio_bytes,
        }
    }
}

/// 성공 응답 봉투: `{ "data": ... }`
#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// 핸들러 공통 반환 타입
pub type ApiResult<T> = Result<(StatusCode, Json<Data<T>>), AppError>;

pub fn ok<T>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::OK, Json(Data { data }))
}

pub fn created<T>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::CREATED, Json(Data { data }))
}

/// `axum::Json`과 같지만, 파싱 실패를 `AppError`(`{ "error": ... }`)로 돌려줍니다.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `/api` 아래의 모든 라우트를 조립합니다.
///
/// CORS와 요청 로깅 레이어는 `main`에서 바깥에 씌웁니다.
pub fn api_router(state: AppState) -> Router {
    let upload_limit = state.max_image_bytes.max(state.max_audio_bytes) + MULTIPART_OVERHEAD;

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me));

    let diary_routes = Router::new()
        .route("/diaries/public", get(diaries::list_public_diaries))
        .route(
            "/diaries",
            get(diaries::list_my_diaries).post(diaries::create_diary),
        )
        .route(
            "/diaries/{id}",
            put(diaries::update_diary).delete(diaries::delete_diary),
        )
        .route("/diaries/{id}/visibility", patch(diaries::update_visibility));

    // 업로드 라우트만 기본 본문 크기 제한(2MB)을 늘립니다.
    let upload_routes = Router::new()
        .route("/upload/image", post(uploads::upload_image))
        .route("/upload/audio", post(uploads::upload_audio))
        .layer(DefaultBodyLimit::max(upload_limit));

    let file_routes = Router::new()
        .route("/files/{filename}", delete(uploads::delete_file))
        .nest_service(
            "/files/images",
            ServeDir::new(media::media_dir(&state.upload_dir, MediaKind::Image)),
        )
        .nest_service(
            "/files/audio",
            ServeDir::new(media::media_dir(&state.upload_dir, MediaKind::Audio)),
        );

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(diary_routes)
        .merge(upload_routes)
        .merge(file_routes)
        .with_state(state);

    Router::new().nest("/api", api_routes)
}
