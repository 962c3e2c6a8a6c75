use serde::{Deserialize, Serialize};

/// 업로드 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// 파일을 내려받는 공개 경로 (예: "/api/files/images/diary-image-...png")
    pub url: String,
    /// 저장된 파일 이름. 일기의 `image_name` / `audio_name`에 넣습니다.
    pub name: String,
    /// 업로드 루트 기준 상대 경로 (예: "images/diary-image-...png")
    pub path: String,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
