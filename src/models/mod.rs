//! # 데이터 모델 모듈
//!
//! 요청/응답과 DB 행에 대응하는 구조체들입니다.
//! - `diary`: 일기 엔티티, 공개 투영, 작성/수정 요청
//! - `user`: 사용자와 인증 요청/응답
//! - `upload`: 업로드 응답과 단순 메시지 응답
//!
//! `pub use X::*;`로 재공개하여 `crate::models::DiaryEntry`처럼 짧게 씁니다.

pub mod diary;
pub mod upload;
pub mod user;

pub use diary::*;
pub use upload::*;
pub use user::*;
