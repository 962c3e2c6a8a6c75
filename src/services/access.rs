//! # 일기 접근 제어(Entry Access Controller)
//!
//! 권한 규칙은 하나뿐입니다: **요청자 ID == 일기 소유자 ID**.
//! 수정, 삭제, 공개 설정 변경 모두 같은 규칙을 씁니다. 역할(role) 계층은 없습니다.
//!
//! 판정 자체(`check_ownership`)는 순수 함수라 DB 없이 테스트할 수 있고,
//! `authorize_*` 함수들은 DB에서 현재 소유자를 읽어와 같은 판정을 적용합니다.
//!
//! 실제 변경 쿼리는 `WHERE id = ? AND user_id = ?` 조건부 단일 문장으로 실행합니다.
//! 조건에 맞는 행이 없으면 `explain_miss`로 404/403을 다시 구분합니다.
//! 확인과 변경 사이에 다른 요청이 일기를 지웠다면 404가 됩니다.

use sqlx::SqlitePool;

use crate::{db, error::AppError};

/// 소유권 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authorized,
    NotFound,
    Forbidden,
}

impl Access {
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Access::Authorized => Ok(()),
            Access::NotFound => Err(AppError::entry_not_found()),
            Access::Forbidden => Err(AppError::entry_forbidden()),
        }
    }
}

/// `stored_owner`가 `None`이면 일기가 없는 것입니다.
pub fn check_ownership(requester_id: &str, stored_owner: Option<&str>) -> Access {
    match stored_owner {
        None => Access::NotFound,
        Some(owner) if owner == requester_id => Access::Authorized,
        Some(_) => Access::Forbidden,
    }
}

pub async fn authorize_mutation(
    pool: &SqlitePool,
    entry_id: &str,
    requester_id: &str,
) -> Result<Access, AppError> {
    let owner = db::diaries::find_owner(pool, entry_id).await?;
    Ok(check_ownership(requester_id, owner.as_deref()))
}

pub async fn authorize_delete(
    pool: &SqlitePool,
    entry_id: &str,
    requester_id: &str,
) -> Result<Access, AppError> {
    authorize_mutation(pool, entry_id, requester_id).await
}

pub async fn authorize_visibility_change(
    pool: &SqlitePool,
    entry_id: &str,
    requester_id: &str,
) -> Result<Access, AppError> {
    authorize_mutation(pool, entry_id, requester_id).await
}

/// 조건부 변경이 0행에 적용되었을 때 그 이유를 에러로 돌려줍니다.
pub async fn explain_miss(pool: &SqlitePool, entry_id: &str, requester_id: &str) -> AppError {
    match authorize_mutation(pool, entry_id, requester_id).await {
        Ok(Access::Forbidden) => AppError::entry_forbidden(),
        // Authorized 는 판정 직후 같은 ID로 다시 생긴 경우뿐이라 없는 것으로 봅니다.
        Ok(Access::NotFound) | Ok(Access::Authorized) => AppError::entry_not_found(),
        Err(e) => e,
    }
}
