//! # 일기(Diary Entry) 모델 정의
//!
//! - `DiaryEntry`: `diary_entries` 테이블 한 행. 소유자 본인에게만 보여줍니다.
//! - `PublicDiaryEntry`: 공개 일기 목록용 읽기 전용 투영(projection).
//!   작성자 이름/사진이 붙고, `user_id`와 파일 이름 같은 내부 정보는 빠집니다.
//! - `DiaryPayload`: 작성/수정 요청 본문. 수정은 전체 교체(full replace)입니다.

use serde::{Deserialize, Serialize};

use crate::services::validation::normalize_text;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiaryEntry {
    pub id: String,
    pub user_id: String,
    pub content: Option<String>,
    /// "YYYY-MM-DD"
    pub date: String,
    pub weather: Option<String>,
    pub is_public: bool,
    pub image_url: Option<String>,
    pub image_name: Option<String>,
    pub audio_url: Option<String>,
    pub audio_name: Option<String>,
    pub events: Option<String>,
    pub emotions: Option<String>,
    pub good_things: Option<String>,
    pub reflections: Option<String>,
    pub gratitude: Option<String>,
    pub tomorrow_goals: Option<String>,
    pub tomorrow_looking_forward: Option<String>,
    pub learnings: Option<String>,
    pub health_habits: Option<String>,
    pub today_in_one_word: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicDiaryEntry {
    pub id: String,
    pub content: Option<String>,
    pub date: String,
    pub weather: Option<String>,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub events: Option<String>,
    pub emotions: Option<String>,
    pub good_things: Option<String>,
    pub reflections: Option<String>,
    pub gratitude: Option<String>,
    pub tomorrow_goals: Option<String>,
    pub tomorrow_looking_forward: Option<String>,
    pub learnings: Option<String>,
    pub health_habits: Option<String>,
    pub today_in_one_word: Option<String>,
    pub created_at: String,
    pub author_name: String,
    pub author_photo: Option<String>,
}

/// 일기 작성/수정 요청 본문
///
/// `None`(필드 없음 또는 null)과 `Some("")`는 다른 값입니다.
/// 둘을 같게 만드는 것은 `normalized()`의 몫입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiaryPayload {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_public: bool,
    pub content: Option<String>,
    pub weather: Option<String>,
    pub image_url: Option<String>,
    pub image_name: Option<String>,
    pub audio_url: Option<String>,
    pub audio_name: Option<String>,
    pub events: Option<String>,
    pub emotions: Option<String>,
    pub good_things: Option<String>,
    pub reflections: Option<String>,
    pub gratitude: Option<String>,
    pub tomorrow_goals: Option<String>,
    pub tomorrow_looking_forward: Option<String>,
    pub learnings: Option<String>,
    pub health_habits: Option<String>,
    pub today_in_one_word: Option<String>,
}

impl DiaryPayload {
    /// "최소 1개 입력" 규칙의 대상이 되는 본문 11개 항목
    pub fn text_sections(&self) -> [Option<&str>; 11] {
        [
            self.content.as_deref(),
            self.events.as_deref(),
            self.emotions.as_deref(),
            self.good_things.as_deref(),
            self.reflections.as_deref(),
            self.gratitude.as_deref(),
            self.tomorrow_goals.as_deref(),
            self.tomorrow_looking_forward.as_deref(),
            self.learnings.as_deref(),
            self.health_habits.as_deref(),
            self.today_in_one_word.as_deref(),
        ]
    }

    /// 모든 선택 항목에 trim + 빈 값 → `None` 규칙을 적용합니다.
    pub fn normalized(self) -> Self {
        Self {
            date: self.date,
            is_public: self.is_public,
            content: normalize_text(self.content),
            weather: normalize_text(self.weather),
            image_url: normalize_text(self.image_url),
            image_name: normalize_text(self.image_name),
            audio_url: normalize_text(self.audio_url),
            audio_name: normalize_text(self.audio_name),
            events: normalize_text(self.events),
            emotions: normalize_text(self.emotions),
            good_things: normalize_text(self.good_things),
            reflections: normalize_text(self.reflections),
            gratitude: normalize_text(self.gratitude),
            tomorrow_goals: normalize_text(self.tomorrow_goals),
            tomorrow_looking_forward: normalize_text(self.tomorrow_looking_forward),
            learnings: normalize_text(self.learnings),
            health_habits: normalize_text(self.health_habits),
            today_in_one_word: normalize_text(self.today_in_one_word),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VisibilityRequest {
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VisibilityResponse {
    pub id: String,
    pub is_public: bool,
    pub updated_at: String,
}
