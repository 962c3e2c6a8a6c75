//! # 미디어 파일 저장소
//!
//! 업로드된 이미지/음성 파일을 로컬 디스크에 쓰고 지웁니다.
//!
//! 디렉토리 구조:
//! ```text
//! <upload_dir>/images/diary-image-<millis>-<uuid>.png
//! <upload_dir>/audio/diary-audio-<millis>-<uuid>.mp3
//! ```
//!
//! 일기 삭제에 따른 파일 삭제는 "최선 노력(best-effort)"입니다.
//! 파일 삭제가 실패해도 일기 삭제 자체는 성공으로 처리하고 로그만 남깁니다.

use std::path::{Path, PathBuf};
use tokio::fs;

use super::upload::MediaKind;
use crate::error::AppError;

/// `<upload_dir>/<images|audio>`
pub fn media_dir(upload_dir: &str, kind: MediaKind) -> PathBuf {
    PathBuf::from(upload_dir).join(kind.dir_name())
}

/// 두 하위 디렉토리를 모두 만듭니다 (이미 있으면 그대로 둡니다).
pub async fn ensure_media_dirs(upload_dir: &str) -> Result<(), AppError> {
    for kind in MediaKind::ALL {
        fs::create_dir_all(media_dir(upload_dir, kind)).await?;
    }
    Ok(())
}

/// 파일을 저장하고 전체 경로를 돌려줍니다.
pub async fn write_media(
    upload_dir: &str,
    kind: MediaKind,
    stored_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, AppError> {
    let dir = media_dir(upload_dir, kind);
    fs::create_dir_all(&dir).await?;

    let full_path = dir.join(stored_name);
    fs::write(&full_path, bytes).await?;
    Ok(full_path)
}

/// 일기에 딸린 파일을 지웁니다. 실패는 경고 로그로만 남깁니다.
pub async fn remove_media_best_effort(upload_dir: &str, kind: MediaKind, stored_name: &str) {
    let Some(name) = sanitize_file_name(stored_name) else {
        tracing::warn!("Skipping removal of suspicious media name {:?}", stored_name);
        return;
    };

    let path = media_dir(upload_dir, kind).join(name);
    if let Err(e) = fs::remove_file(&path).await {
        tracing::warn!("Failed to remove media file {}: {}", path.display(), e);
    }
}

/// 이름만으로 파일을 지웁니다. 이미지 → 음성 순서로 찾아 처음 지운 종류를 돌려줍니다.
pub async fn remove_by_name(upload_dir: &str, stored_name: &str) -> Option<MediaKind> {
    for kind in MediaKind::ALL {
        if fs::remove_file(media_dir(upload_dir, kind).join(stored_name))
            .await
            .is_ok()
        {
            return Some(kind);
        }
    }
    None
}

/// 경로에서 마지막 파일 이름만 남깁니다. `..`이나 빈 이름은 거부합니다.
///
/// 예: `"../../etc/passwd"` → `Some("passwd")`, `".."` → `None`
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let normalized = raw.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .map(str::to_string)
}
