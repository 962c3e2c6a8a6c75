use crate::{
    db::diaries as db_diaries,
    error::AppError,
    middleware::auth::AuthUser,
    models::*,
    routes::{created, ok, ApiResult, AppState},
    services::{
        media,
        upload::{self, MediaKind, UploadError},
    },
};
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::StatusCode,
};

pub async fn upload_image(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadResponse> {
    receive(&state, &auth_user, multipart, MediaKind::Image).await
}

pub async fn upload_audio(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadResponse> {
    receive(&state, &auth_user, multipart, MediaKind::Audio).await
}

/// Reads the kind's form field, checks it and stores it under a fresh name.
async fn receive(
    state: &AppState,
    auth_user: &AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
    kind: MediaKind,
) -> ApiResult<UploadResponse> {
    let limit = state.upload_limit(kind);
    let mut multipart = multipart
        .map_err(|_| AppError::BadRequest("Expected a multipart/form-data body".to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        // Other fields are ignored
        if field.name() != Some(kind.form_field()) {
            continue;
        }

        let declared_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;

        upload::check_size(bytes.len(), limit)?;
        let accepted = upload::accept(&bytes, &declared_name, kind)?;
        media::write_media(&state.upload_dir, kind, &accepted.stored_name, &bytes).await?;

        tracing::info!(
            user_id = %auth_user.user_id,
            name = %accepted.stored_name,
            extension = %accepted.extension,
            size = bytes.len(),
            "Stored uploaded {}",
            kind.dir_name()
        );

        return Ok(created(UploadResponse {
            url: kind.public_url(&accepted.stored_name),
            path: format!("{}/{}", kind.dir_name(), accepted.stored_name),
            name: accepted.stored_name,
            content_type: accepted.content_type.to_string(),
        }));
    }

    Err(UploadError::MissingFile(kind.form_field()).into())
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return UploadError::TooLarge { limit }.into();
    }
    tracing::debug!("Failed to read multipart body: {}", err);
    AppError::BadRequest("Invalid multipart body".to_string())
}

pub async fn delete_file(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(filename): Path<String>,
) -> ApiResult<MessageResponse> {
    let name = media::sanitize_file_name(&filename)
        .ok_or_else(|| AppError::BadRequest("Invalid file name".to_string()))?;

    // Files attached to someone else's entry stay put
    if db_diaries::media_referenced_by_other_user(&state.pool, &name, &auth_user.user_id).await? {
        return Err(AppError::Forbidden(
            "You do not have permission to delete this file".to_string(),
        ));
    }

    match media::remove_by_name(&state.upload_dir, &name).await {
        Some(kind) => {
            tracing::info!(user_id = %auth_user.user_id, name = %name, "Deleted {} file", kind.dir_name());
            Ok(ok(MessageResponse::new("File deleted")))
        }
        None => Err(AppError::NotFound("File not found".to_string())),
    }
}
