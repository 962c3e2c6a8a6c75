use crate::{
    db::diaries as db_diaries,
    middleware::auth::AuthUser,
    models::*,
    routes::{created, ok, ApiJson, ApiResult, AppState},
    services::{
        access, media,
        upload::MediaKind,
        validation::{self, ValidationError},
    },
};
use axum::extract::{Path, State};
use uuid::Uuid;

/// Entry ids are UUIDs; reject anything else before touching the store.
fn parse_entry_id(raw: &str) -> Result<String, ValidationError> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| ValidationError::InvalidEntryId)
}

pub async fn list_my_diaries(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Vec<DiaryEntry>> {
    let entries = db_diaries::list_by_owner(&state.pool, &auth_user.user_id).await?;
    Ok(ok(entries))
}

pub async fn list_public_diaries(State(state): State<AppState>) -> ApiResult<Vec<PublicDiaryEntry>> {
    let entries = db_diaries::list_public(&state.pool, db_diaries::PUBLIC_LIST_LIMIT).await?;
    Ok(ok(entries))
}

pub async fn create_diary(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiJson(payload): ApiJson<DiaryPayload>,
) -> ApiResult<DiaryEntry> {
    validation::validate(&payload)?;
    let payload = payload.normalized();

    let id = Uuid::now_v7().to_string();
    let entry = db_diaries::create_entry(&state.pool, &id, &auth_user.user_id, &payload).await?;
    tracing::info!(entry_id = %entry.id, user_id = %auth_user.user_id, "Created diary entry");

    Ok(created(entry))
}

pub async fn update_diary(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<DiaryPayload>,
) -> ApiResult<DiaryEntry> {
    let entry_id = parse_entry_id(&id)?;
    validation::validate(&payload)?;

    access::authorize_mutation(&state.pool, &entry_id, &auth_user.user_id)
        .await?
        .into_result()?;

    let payload = payload.normalized();
    match db_diaries::update_owned(&state.pool, &entry_id, &auth_user.user_id, &payload).await? {
        Some(entry) => {
            tracing::info!(entry_id = %entry.id, "Updated diary entry");
            Ok(ok(entry))
        }
        // Deleted between the ownership check and the update
        None => Err(access::explain_miss(&state.pool, &entry_id, &auth_user.user_id).await),
    }
}

pub async fn delete_diary(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let entry_id = parse_entry_id(&id)?;

    access::authorize_delete(&state.pool, &entry_id, &auth_user.user_id)
        .await?
        .into_result()?;

    let deleted = match db_diaries::delete_owned(&state.pool, &entry_id, &auth_user.user_id).await? {
        Some(deleted) => deleted,
        None => return Err(access::explain_miss(&state.pool, &entry_id, &auth_user.user_id).await),
    };

    // Attached files go too; failures are only logged
    if let Some(name) = deleted.image_name.as_deref() {
        release_media(&state, MediaKind::Image, name).await;
    }
    if let Some(name) = deleted.audio_name.as_deref() {
        release_media(&state, MediaKind::Audio, name).await;
    }

    tracing::info!(entry_id = %entry_id, "Deleted diary entry");
    Ok(ok(MessageResponse::new("Diary entry deleted")))
}

/// Removes a file the deleted entry pointed at, unless another entry still uses it.
///
/// Media names come from the client, so an entry may name a file that
/// belongs to someone else's entry.
async fn release_media(state: &AppState, kind: MediaKind, name: &str) {
    match db_diaries::media_still_referenced(&state.pool, name).await {
        Ok(false) => media::remove_media_best_effort(&state.upload_dir, kind, name).await,
        Ok(true) => tracing::debug!(name = %name, "Keeping media still referenced by another entry"),
        Err(e) => tracing::warn!(name = %name, "Skipping media removal, reference lookup failed: {}", e),
    }
}

pub async fn update_visibility(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<VisibilityRequest>,
) -> ApiResult<VisibilityResponse> {
    let entry_id = parse_entry_id(&id)?;

    access::authorize_visibility_change(&state.pool, &entry_id, &auth_user.user_id)
        .await?
        .into_result()?;

    match db_diaries::set_visibility_owned(&state.pool, &entry_id, &auth_user.user_id, req.is_public)
        .await?
    {
        Some(updated) => Ok(ok(updated)),
        None => Err(access::explain_miss(&state.pool, &entry_id, &auth_user.user_id).await),
    }
}
