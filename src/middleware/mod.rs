//! # 미들웨어 모듈
//!
//! - `auth`: 세션 토큰 발급/검증과 `AuthUser` extractor

pub mod auth;
