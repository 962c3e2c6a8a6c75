//! # 일기 입력 검증(Entry Validator)
//!
//! 일기 작성/수정 요청이 저장 가능한 형태인지 확인하고,
//! 저장 직전에 선택 항목을 정규화합니다.
//!
//! 검증 순서:
//! 1. 날짜: 필수, `YYYY-MM-DD` 형식의 실제 달력 날짜
//! 2. 날씨: 비어 있으면 통과, 값이 있으면 허용 목록 중 하나
//! 3. 본문 11개 항목 중 최소 1개는 공백이 아닌 내용
//!
//! 정규화 규칙: 앞뒤 공백 제거 후 빈 문자열이면 "없음(None)"으로 저장합니다.
//! 빈 문자열과 None을 같은 값으로 다루지 않는 것이 "최소 1개 입력" 규칙의 전제입니다.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DiaryPayload;

/// 허용되는 날씨 값
pub const WEATHER_VALUES: [&str; 8] = [
    "sunny",
    "cloudy",
    "rainy",
    "snowy",
    "stormy",
    "foggy",
    "partly-cloudy",
    "windy",
];

/// 클라이언트가 고칠 수 있는 입력 오류 (HTTP 400)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address format is invalid")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Display name is required")]
    DisplayNameRequired,
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
    #[error("Weather value is invalid")]
    InvalidWeather,
    #[error("Fill in at least one diary field")]
    AllFieldsEmpty,
    #[error("Diary id is invalid")]
    InvalidEntryId,
}

/// 일기 요청 전체를 검증합니다.
pub fn validate(payload: &DiaryPayload) -> Result<(), ValidationError> {
    validate_date(&payload.date)?;
    validate_weather(payload.weather.as_deref())?;
    validate_filled(&payload.text_sections())
}

/// 날짜는 정확히 `YYYY-MM-DD` 이어야 합니다. 시간대나 다른 구분자는 허용하지 않습니다.
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    if date.trim().is_empty() {
        return Err(ValidationError::MissingDate);
    }

    // chrono의 %m, %d는 한 자리 숫자도 받아들이므로 모양을 먼저 고정합니다.
    let shape_ok = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate);
    }
    Ok(())
}

/// `None`과 공백뿐인 값은 "설정 안 함"으로 보고 항상 통과시킵니다.
pub fn validate_weather(weather: Option<&str>) -> Result<(), ValidationError> {
    match weather {
        None => Ok(()),
        Some(value) if value.trim().is_empty() => Ok(()),
        Some(value) if WEATHER_VALUES.contains(&value) => Ok(()),
        Some(_) => Err(ValidationError::InvalidWeather),
    }
}

/// 본문 항목 중 하나라도 공백이 아닌 값이 있으면 통과합니다.
pub fn validate_filled(sections: &[Option<&str>]) -> Result<(), ValidationError> {
    let any_filled = sections
        .iter()
        .any(|value| value.is_some_and(|v| !v.trim().is_empty()));
    if any_filled {
        Ok(())
    } else {
        Err(ValidationError::AllFieldsEmpty)
    }
}

/// 선택 항목 정규화: trim 후 빈 문자열이면 `None`.
///
/// 두 번 적용해도 결과가 같습니다.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
