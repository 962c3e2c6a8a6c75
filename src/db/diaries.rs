//! # 일기 데이터베이스 쿼리 모듈
//!
//! `diary_entries` 테이블에 대한 쿼리 함수들입니다.
//!
//! 변경 쿼리(수정/삭제/공개 설정)는 모두 `WHERE id = ? AND user_id = ?` 조건과
//! `RETURNING`을 쓰는 단일 문장입니다. 조건에 맞는 행이 없으면 `Ok(None)`을 돌려주고,
//! 404/403 구분은 호출하는 쪽(`services::access`)이 합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 공개 목록 최대 개수
pub const PUBLIC_LIST_LIMIT: i64 = 50;

// query_as::<_, DiaryEntry>가 기대하는 컬럼 목록
const ENTRY_COLUMNS: &str = r#"
    id, user_id, content, date, weather, is_public,
    image_url, image_name, audio_url, audio_name,
    events, emotions, good_things, reflections, gratitude,
    tomorrow_goals, tomorrow_looking_forward, learnings,
    health_habits, today_in_one_word,
    created_at, updated_at
"#;

// 요청 본문을 SQL의 `?` 순서대로 바인딩합니다.
// INSERT/UPDATE 문의 컬럼 순서와 반드시 같아야 합니다:
// content, date, weather, is_public, image_url, image_name, audio_url, audio_name,
// events, emotions, good_things, reflections, gratitude, tomorrow_goals,
// tomorrow_looking_forward, learnings, health_habits, today_in_one_word
macro_rules! bind_payload {
    ($query:expr, $p:expr) => {
        $query
            .bind(&$p.content)
            .bind(&$p.date)
            .bind(&$p.weather)
            .bind($p.is_public)
            .bind(&$p.image_url)
            .bind(&$p.image_name)
            .bind(&$p.audio_url)
            .bind(&$p.audio_name)
            .bind(&$p.events)
            .bind(&$p.emotions)
            .bind(&$p.good_things)
            .bind(&$p.reflections)
            .bind(&$p.gratitude)
            .bind(&$p.tomorrow_goals)
            .bind(&$p.tomorrow_looking_forward)
            .bind(&$p.learnings)
            .bind(&$p.health_habits)
            .bind(&$p.today_in_one_word)
    };
}

/// 내 일기 목록. 날짜 최신순, 같은 날짜는 작성 최신순.
pub async fn list_by_owner(pool: &SqlitePool, user_id: &str) -> Result<Vec<DiaryEntry>, AppError> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM diary_entries WHERE user_id = ? \
         ORDER BY date DESC, created_at DESC, id DESC"
    );
    let entries = sqlx::query_as::<_, DiaryEntry>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(entries)
}

/// 공개 일기 목록 (작성자 정보 포함). 작성 최신순, 최대 `limit`개.
pub async fn list_public(pool: &SqlitePool, limit: i64) -> Result<Vec<PublicDiaryEntry>, AppError> {
    let entries = sqlx::query_as::<_, PublicDiaryEntry>(
        r#"
        SELECT
            de.id, de.content, de.date, de.weather,
            de.image_url, de.audio_url,
            de.events, de.emotions, de.good_things,
            de.reflections, de.gratitude, de.tomorrow_goals,
            de.tomorrow_looking_forward, de.learnings,
            de.health_habits, de.today_in_one_word,
            de.created_at,
            u.display_name AS author_name,
            u.profile_image_url AS author_photo
        FROM diary_entries de
        JOIN users u ON u.id = de.user_id
        WHERE de.is_public = 1
        ORDER BY de.created_at DESC, de.id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// 정규화된 요청 본문으로 일기를 만듭니다.
pub async fn create_entry(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    payload: &DiaryPayload,
) -> Result<DiaryEntry, AppError> {
    let sql = format!(
        r#"
        INSERT INTO diary_entries (
            id, user_id,
            content, date, weather, is_public,
            image_url, image_name, audio_url, audio_name,
            events, emotions, good_things, reflections,
            gratitude, tomorrow_goals, tomorrow_looking_forward,
            learnings, health_habits, today_in_one_word
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {ENTRY_COLUMNS}
        "#
    );
    let query = sqlx::query_as::<_, DiaryEntry>(&sql).bind(id).bind(user_id);
    let entry = bind_payload!(query, payload).fetch_one(pool).await?;

    Ok(entry)
}

/// 일기 소유자 ID. 일기가 없으면 `None`.
pub async fn find_owner(pool: &SqlitePool, id: &str) -> Result<Option<String>, AppError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT user_id FROM diary_entries WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(owner,)| owner))
}

/// 소유자의 일기를 통째로 교체합니다. 조건에 맞는 행이 없으면 `None`.
pub async fn update_owned(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    payload: &DiaryPayload,
) -> Result<Option<DiaryEntry>, AppError> {
    let sql = format!(
        r#"
        UPDATE diary_entries
        SET
            content = ?,
            date = ?,
            weather = ?,
            is_public = ?,
            image_url = ?,
            image_name = ?,
            audio_url = ?,
            audio_name = ?,
            events = ?,
            emotions = ?,
            good_things = ?,
            reflections = ?,
            gratitude = ?,
            tomorrow_goals = ?,
            tomorrow_looking_forward = ?,
            learnings = ?,
            health_habits = ?,
            today_in_one_word = ?,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ? AND user_id = ?
        RETURNING {ENTRY_COLUMNS}
        "#
    );
    let query = sqlx::query_as::<_, DiaryEntry>(&sql);
    let entry = bind_payload!(query, payload)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(entry)
}

/// 삭제된 일기가 참조하던 파일 이름들
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct DeletedMedia {
    pub image_name: Option<String>,
    pub audio_name: Option<String>,
}

/// 소유자의 일기를 지우고, 참조하던 파일 이름을 돌려줍니다. 조건에 맞는 행이 없으면 `None`.
pub async fn delete_owned(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
) -> Result<Option<DeletedMedia>, AppError> {
    let deleted = sqlx::query_as::<_, DeletedMedia>(
        r#"
        DELETE FROM diary_entries
        WHERE id = ? AND user_id = ?
        RETURNING image_name, audio_name
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted)
}

/// 공개 여부만 바꿉니다. 이전 값과 관계없이 항상 덮어씁니다.
pub async fn set_visibility_owned(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    is_public: bool,
) -> Result<Option<VisibilityResponse>, AppError> {
    let updated = sqlx::query_as::<_, VisibilityResponse>(
        r#"
        UPDATE diary_entries
        SET is_public = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ? AND user_id = ?
        RETURNING id, is_public, updated_at
        "#,
    )
    .bind(is_public)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

/// 남아 있는 일기 중 하나라도 이 파일 이름을 참조하는지 여부 (소유자 무관)
pub async fn media_still_referenced(pool: &SqlitePool, stored_name: &str) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT 1
        FROM diary_entries
        WHERE image_name = ? OR audio_name = ?
        LIMIT 1
        "#,
    )
    .bind(stored_name)
    .bind(stored_name)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}

/// 다른 사용자의 일기가 이 파일 이름을 참조하고 있는지 여부
pub async fn media_referenced_by_other_user(
    pool: &SqlitePool,
    stored_name: &str,
    user_id: &str,
) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT 1
        FROM diary_entries
        WHERE (image_name = ? OR audio_name = ?) AND user_id != ?
        LIMIT 1
        "#,
    )
    .bind(stored_name)
    .bind(stored_name)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}
