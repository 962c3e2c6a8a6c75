use crate::error::AppError;
use crate::models::user::User;
use sqlx::SqlitePool;

/// 새 사용자를 만듭니다. 이메일이 이미 있으면 `AppError::Conflict`.
pub async fn create_user(
    pool: &SqlitePool,
    id: &str,
    email: &str,
    display_name: &str,
    password_hash: &str,
) -> Result<User, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, password_hash, display_name)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(display_name)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        // 중복 확인을 따로 하지 않고 UNIQUE 제약 위반으로 판단합니다 (동시 가입에도 안전).
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(AppError::Conflict(
                "This email address is already registered".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    find_by_id(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created user".to_string()))
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, display_name, profile_image_url, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, display_name, profile_image_url, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
