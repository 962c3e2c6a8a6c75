//! 회원가입/로그인 입력값의 모양만 확인합니다.
//! 실제 비밀번호 해싱과 비교는 `services::password`가 담당합니다.

use super::validation::ValidationError;

/// 이메일은 비어 있지 않고 `@`를 포함해야 합니다. RFC 수준 검사는 하지 않습니다.
pub fn require_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// 비밀번호는 8바이트 이상
pub fn require_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn require_display_name(display_name: &str) -> Result<(), ValidationError> {
    if display_name.trim().is_empty() {
        return Err(ValidationError::DisplayNameRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert_eq!(require_email("test@example.com"), Ok(()));
        assert_eq!(require_email("  a@b  "), Ok(()));
        assert_eq!(require_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(require_email("   "), Err(ValidationError::EmailRequired));
        assert_eq!(require_email("bad-email"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn password_length() {
        assert_eq!(require_password("12345678"), Ok(()));
        assert_eq!(require_password("short"), Err(ValidationError::PasswordTooShort));
        assert_eq!(require_password(""), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn display_name_must_not_be_blank() {
        assert_eq!(require_display_name("Yamada"), Ok(()));
        assert_eq!(require_display_name("   "), Err(ValidationError::DisplayNameRequired));
    }
}
