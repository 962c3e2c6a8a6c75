//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(`.env` 포함)에서 서버 설정값을 한 번 읽어옵니다.
//! 서버가 시작된 뒤에는 읽기 전용 스냅샷으로만 사용됩니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 URL
//! - `JWT_SECRET`: 세션 토큰 서명 비밀키
//! - `UPLOAD_DIR`: 업로드 파일 저장 루트 (`images/`, `audio/` 하위 폴더)
//! - `HOST`, `API_PORT`: 서버 바인딩 주소
//! - `ALLOWED_ORIGINS`: CORS 허용 출처 (쉼표 구분)
//! - `TOKEN_HOURS`: 세션 토큰 유효 시간
//! - `MAX_IMAGE_BYTES`, `MAX_AUDIO_BYTES`: 업로드 크기 상한
//!
//! 값이 비어 있거나 공백뿐이면 기본값을 사용합니다.

use std::env;
use thiserror::Error;

/// 서명 비밀키가 설정되지 않았을 때 쓰는 개발용 기본값
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// 토큰 유효 시간 허용 범위: 1시간 ~ 1년
const TOKEN_HOURS_RANGE: (i64, i64) = (1, 24 * 365);

/// 설정 로딩 실패
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 숫자여야 하는 환경변수를 파싱하지 못함
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    /// 숫자지만 허용 범위를 벗어남
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 연결 URL (예: "sqlite:data/diary.db?mode=rwc")
    pub database_url: String,
    /// HS256 토큰 서명/검증 비밀키
    pub jwt_secret: String,
    /// 업로드 파일 저장 루트 디렉토리
    pub upload_dir: String,
    pub host: String,
    pub port: u16,
    /// CORS 허용 출처 목록. 항상 최소 1개를 가집니다.
    pub allowed_origins: Vec<String>,
    /// 세션 토큰 유효 시간(시간 단위)
    pub token_hours: i64,
    pub max_image_bytes: usize,
    pub max_audio_bytes: usize,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 `Config`를 만듭니다.
    ///
    /// # 에러
    /// 숫자 항목(`API_PORT`, `TOKEN_HOURS`, `MAX_*_BYTES`)에
    /// 숫자가 아닌 값이 들어 있으면 `ConfigError::InvalidNumber`를 반환합니다.
    /// `TOKEN_HOURS`가 1시간 ~ 1년 범위를 벗어나면 `ConfigError::OutOfRange`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut allowed_origins = split_csv(&env_or("ALLOWED_ORIGINS", DEFAULT_ORIGIN));
        // "ALLOWED_ORIGINS= , ," 처럼 유효한 항목이 하나도 없으면 기본 출처로 되돌립니다.
        if allowed_origins.is_empty() {
            allowed_origins.push(DEFAULT_ORIGIN.to_string());
        }

        Ok(Self {
            database_url: env_or("DATABASE_URL", "sqlite:data/diary.db?mode=rwc"),
            jwt_secret: env_or("JWT_SECRET", DEV_JWT_SECRET),
            upload_dir: env_or("UPLOAD_DIR", "./uploads"),
            host: env_or("HOST", "0.0.0.0"),
            port: parse_number("API_PORT", 8000)?,
            allowed_origins,
            token_hours: parse_in_range("TOKEN_HOURS", 24, TOKEN_HOURS_RANGE)?,
            max_image_bytes: parse_number("MAX_IMAGE_BYTES", 5 * 1024 * 1024)?,
            max_audio_bytes: parse_number("MAX_AUDIO_BYTES", 10 * 1024 * 1024)?,
        })
    }

    /// 개발용 기본 비밀키를 그대로 쓰고 있는지 여부
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

/// 환경변수를 읽되, 없거나 공백뿐이면 `fallback`을 반환합니다.
fn env_or(key: &str, fallback: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// 숫자 환경변수를 파싱합니다. 비어 있으면 `fallback`.
fn parse_number<T: std::str::FromStr>(key: &'static str, fallback: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        _ => Ok(fallback),
    }
}

/// `parse_number` + 범위 검사 (양 끝 포함)
fn parse_in_range(key: &'static str, fallback: i64, (min, max): (i64, i64)) -> Result<i64, ConfigError> {
    let value = parse_number(key, fallback)?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// "a, b,,c" → ["a", "b", "c"]
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
