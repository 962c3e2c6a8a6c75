//! # 헬스체크(Health Check) 핸들러
//!
//! 서버와 데이터베이스가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "data": { "status": "ok" } }`
//! - DB에 닿지 않으면 → 503 `{ "error": "Database is unavailable" }`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::{ok, AppState};

/// `GET /health` — `SELECT 1` 한 번으로 연결 풀이 살아 있는지 확인합니다.
///
/// 실패를 `AppError`(500)로 돌리지 않고 503으로 직접 응답합니다.
/// 로드밸런서가 "잠시 쓸 수 없음"으로 구분할 수 있게 하기 위해서입니다.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => ok(json!({ "status": "ok" })).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Database is unavailable" })),
            )
                .into_response()
        }
    }
}
