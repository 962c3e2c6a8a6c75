//! Argon2id 비밀번호 해싱
//!
//! 해시는 PHC 문자열(`$argon2id$v=19$...`)로 저장되어
//! 솔트와 파라미터를 함께 담습니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// 비밀번호가 일치하면 `Ok(true)`. 저장된 해시 자체가 깨져 있으면 내부 오류입니다.
pub fn verify_password(stored_hash: &str, plaintext: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Password hash parse error: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}
