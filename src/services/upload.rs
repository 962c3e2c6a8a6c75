//! # 업로드 검사(Upload Gatekeeper)
//!
//! 업로드된 파일을 종류(이미지/음성)별로 검사하고 저장 이름을 정합니다.
//!
//! - 확장자 허용 목록: 이미지 `.jpg .jpeg .png .gif .webp`, 음성 `.mp3 .wav .ogg .m4a .aac .webm`
//! - 이미지는 앞부분 512바이트를 스니핑해 `image/*`인지 확인합니다.
//!   확장자와 실제 내용이 모두 이미지여야 통과합니다.
//! - 음성은 확장자만 신뢰하고, 확장자로 대표 MIME 타입을 정합니다.
//! - 크기 상한은 호출하는 쪽(`check_size`)에서 먼저 확인합니다.
//!
//! 저장 이름: `{prefix}-{unix_millis}-{uuid}{ext}`
//! 이미지와 음성이 같은 이름 규칙을 공유하므로 접두사로 구분합니다.

use thiserror::Error;
use uuid::Uuid;

/// 스니핑에 사용하는 최대 바이트 수
pub const SNIFF_LEN: usize = 512;

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];
const AUDIO_EXTENSIONS: [&str; 6] = [".mp3", ".wav", ".ogg", ".m4a", ".aac", ".webm"];

/// 업로드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Image, MediaKind::Audio];

    /// 저장 이름 접두사
    pub fn prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "diary-image",
            MediaKind::Audio => "diary-audio",
        }
    }

    /// 업로드 루트 아래의 하위 디렉토리 이름
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Audio => "audio",
        }
    }

    /// multipart 필드 이름
    pub fn form_field(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }

    /// 저장된 파일을 내려받는 공개 URL
    pub fn public_url(self, stored_name: &str) -> String {
        format!("/api/files/{}/{}", self.dir_name(), stored_name)
    }

    fn allows_extension(self, ext: &str) -> bool {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS.contains(&ext),
            MediaKind::Audio => AUDIO_EXTENSIONS.contains(&ext),
        }
    }
}

/// 업로드 거부 사유 (HTTP 400)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("A file is required in the \"{0}\" field")]
    MissingFile(&'static str),
    #[error("Upload a file with an extension")]
    NoExtension,
    #[error("This file format is not supported")]
    UnsupportedFormat,
    #[error("File content does not match its extension")]
    ContentMismatch,
    #[error("File must be {limit} bytes or smaller")]
    TooLarge { limit: usize },
}

/// 검사를 통과한 업로드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedUpload {
    pub stored_name: String,
    /// 소문자, 점 포함 (예: ".png")
    pub extension: String,
    pub content_type: &'static str,
}

pub fn check_size(len: usize, limit: usize) -> Result<(), UploadError> {
    if len > limit {
        return Err(UploadError::TooLarge { limit });
    }
    Ok(())
}

/// 파일을 검사하고 새 저장 이름을 만듭니다. 파일 쓰기는 하지 않습니다.
pub fn accept(
    bytes: &[u8],
    declared_filename: &str,
    kind: MediaKind,
) -> Result<AcceptedUpload, UploadError> {
    let extension = extension_of(declared_filename).ok_or(UploadError::NoExtension)?;
    if !kind.allows_extension(&extension) {
        return Err(UploadError::UnsupportedFormat);
    }

    let content_type = match kind {
        MediaKind::Image => {
            let sniffed = sniff_content_type(bytes);
            if !sniffed.starts_with("image/") {
                return Err(UploadError::ContentMismatch);
            }
            sniffed
        }
        MediaKind::Audio => audio_content_type(&extension).ok_or(UploadError::UnsupportedFormat)?,
    };

    let millis = chrono::Utc::now().timestamp_millis();
    let stored_name = stored_name(kind.prefix(), millis, Uuid::new_v4(), &extension);

    Ok(AcceptedUpload {
        stored_name,
        extension,
        content_type,
    })
}

pub fn stored_name(prefix: &str, unix_millis: i64, id: Uuid, extension: &str) -> String {
    format!("{}-{}-{}{}", prefix, unix_millis, id, extension)
}

/// 음성 확장자 → 대표 MIME 타입
pub fn audio_content_type(extension: &str) -> Option<&'static str> {
    match extension {
        ".mp3" => Some("audio/mpeg"),
        ".wav" => Some("audio/wav"),
        ".ogg" => Some("audio/ogg"),
        ".m4a" => Some("audio/mp4"),
        ".aac" => Some("audio/aac"),
        ".webm" => Some("audio/webm"),
        _ => None,
    }
}

/// 파일 이름의 마지막 경로 요소에서 `.ext`를 소문자로 꺼냅니다.
/// 점이 없거나 점으로 끝나면 `None`.
fn extension_of(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let dot = base.rfind('.')?;
    let ext = &base[dot..];
    if ext.len() == 1 {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// 매직 바이트로 내용 타입을 추정합니다.
///
/// 알려진 시그니처가 없으면 제어 문자 포함 여부로
/// `text/plain; charset=utf-8` 또는 `application/octet-stream`을 돌려줍니다.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];

    const SIGNATURES: [(&[u8], &str); 11] = [
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
        (b"\x00\x00\x01\x00", "image/x-icon"),
        (b"\x00\x00\x02\x00", "image/x-icon"),
        (b"%PDF-", "application/pdf"),
        (b"ID3", "audio/mpeg"),
        (b"OggS\x00", "application/ogg"),
        (b"PK\x03\x04", "application/zip"),
    ];
    if let Some((_, mime)) = SIGNATURES.iter().find(|(sig, _)| head.starts_with(sig)) {
        return *mime;
    }

    // RIFF 컨테이너: 8..12 바이트가 하위 형식
    if head.len() >= 12 && head.starts_with(b"RIFF") {
        match &head[8..12] {
            b"WEBP" => return "image/webp",
            b"WAVE" => return "audio/wave",
            b"AVI " => return "video/avi",
            _ => {}
        }
    }
    if head.starts_with(b"\x1a\x45\xdf\xa3") {
        return "video/webm";
    }

    if head.iter().any(|&b| is_binary_byte(b)) {
        return "application/octet-stream";
    }
    "text/plain; charset=utf-8"
}

fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}
