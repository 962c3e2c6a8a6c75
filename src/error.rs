//! # 에러 처리 모듈
//!
//! 핸들러가 반환하는 모든 실패를 `AppError` 하나로 모읍니다.
//! 도메인 에러(`ValidationError`, `UploadError`)는 `#[from]`으로 자동 변환되어
//! 핸들러에서 `?` 하나로 전파할 수 있습니다.
//!
//! 응답 본문은 항상 `{ "error": "<message>" }` 형태입니다.
//! 500 계열(DB, 파일, 내부 오류)은 상세 내용을 로그에만 남기고
//! 클라이언트에는 일반 메시지만 돌려줍니다.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{upload::UploadError, validation::ValidationError};

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// 형식이 잘못된 요청 (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// 입력값 검증 실패 (HTTP 400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 업로드 파일 거부 (HTTP 400)
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// 인증 실패 (HTTP 401)
    #[error("{0}")]
    Unauthorized(String),

    /// 인증은 되었지만 소유자가 아님 (HTTP 403)
    #[error("{0}")]
    Forbidden(String),

    /// 리소스 충돌, 예: 이미 등록된 이메일 (HTTP 409)
    #[error("{0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// `#[from]` 덕분에 sqlx 호출 뒤의 `?`가 자동으로 이 variant로 바뀝니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 파일 입출력 오류 (HTTP 500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 일기를 찾을 수 없을 때의 공통 에러
    pub fn entry_not_found() -> Self {
        AppError::NotFound("Diary entry not found".to_string())
    }

    /// 남의 일기를 변경하려 할 때의 공통 에러
    pub fn entry_forbidden() -> Self {
        AppError::Forbidden("You do not have permission to modify this diary entry".to_string())
    }
}

/// 본문 JSON 파싱 실패 (`routes::ApiJson`의 rejection)
///
/// 문법 오류, 타입 불일치, Content-Type 누락 모두 같은 400 메시지로 처리합니다.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest("Invalid request body".to_string())
    }
}

impl IntoResponse for AppError {
    /// `AppError`를 HTTP 응답으로 변환합니다.
    ///
    /// 클라이언트가 고칠 수 있는 에러(4xx)는 메시지를 그대로 보내고,
    /// 서버 쪽 에러(5xx)는 로그에 기록한 뒤 일반 메시지로 대체합니다.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // ref 없이 값으로 꺼내도 됩니다. self는 이 match에서 소비됩니다.
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Upload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An IO error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
