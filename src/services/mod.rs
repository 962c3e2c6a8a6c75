//! # 서비스(비즈니스 로직) 모듈
//!
//! HTTP와 DB에 묶이지 않은 규칙들을 모아둔 곳입니다.
//! - `validation`: 일기 입력 검증과 정규화
//! - `credentials`: 이메일/비밀번호/표시 이름 형식 검사
//! - `password`: Argon2id 해싱
//! - `access`: 소유권 기반 접근 제어
//! - `upload`: 업로드 파일 검사와 저장 이름 생성
//! - `media`: 업로드 파일의 디스크 입출력

pub mod access;
pub mod credentials;
pub mod media;
pub mod password;
pub mod upload;
pub mod validation;
