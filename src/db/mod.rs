//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! SQL 한 문장당 함수 하나를 두고, 라우트 핸들러와 서비스가 이 함수들을 호출합니다.
//!
//! 각 하위 모듈:
//! - `diaries`: 일기 CRUD, 공개 목록, 소유자 조회
//! - `users`: 사용자 생성/조회

pub mod diaries;
pub mod users;
