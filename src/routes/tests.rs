//! 조립된 라우터를 `oneshot`으로 호출하는 핸들러 테스트
//!
//! 매 테스트마다 마이그레이션을 적용한 인메모리 SQLite와 임시 업로드 폴더를 씁니다.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;
use tower::ServiceExt;

use super::{api_router, AppState};
use crate::services::upload::MediaKind;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01";
const BOUNDARY: &str = "diary-test-boundary";

struct TestApp {
    router: Router,
    state: AppState,
    // drop 시 임시 폴더가 지워지므로 테스트 동안 들고 있습니다.
    _uploads: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        // 인메모리 DB는 연결마다 따로라서 연결 하나를 계속 씁니다.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let uploads = tempfile::tempdir().unwrap();
        let state = AppState {
            pool,
            jwt_secret: "test-secret".to_string(),
            token_hours: 24,
            upload_dir: uploads.path().to_string_lossy().into_owned(),
            max_image_bytes: 1024,
            max_audio_bytes: 2048,
        };
        crate::services::media::ensure_media_dirs(&state.upload_dir)
            .await
            .unwrap();

        Self {
            router: api_router(state.clone()),
            state,
            _uploads: uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let (status, bytes) = self.send(request).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn upload(
        &self,
        uri: &str,
        token: &str,
        field: &str,
        filename: &str,
        bytes: &[u8],
    ) -> (StatusCode, Value) {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// 가입 후 (token, user_id)
    async fn register(&self, email: &str, name: &str) -> (String, String) {
        let (status, body) = self
            .json(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "email": email, "password": "password123", "display_name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        (
            body["data"]["token"].as_str().unwrap().to_string(),
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    async fn create_entry(&self, token: &str, body: Value) -> Value {
        let (status, body) = self
            .json(Method::POST, "/api/diaries", Some(token), Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"].clone()
    }

    fn media_path(&self, kind: MediaKind, name: &str) -> std::path::PathBuf {
        crate::services::media::media_dir(&self.state.upload_dir, kind).join(name)
    }
}

// ── 헬스체크 / 인증 ──

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;
    let (status, body) = app.json(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn register_login_and_me() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register(" a@example.com ", " Alice ").await;

    let (status, body) = app.json(Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user_id.as_str());
    assert_eq!(body["data"]["email"], "a@example.com");
    assert_eq!(body["data"]["display_name"], "Alice");
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "a@example.com", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].as_str().is_some());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register("dup@example.com", "First").await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "dup@example.com", "password": "password123", "display_name": "Second" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn registration_input_is_checked() {
    let app = TestApp::new().await;
    let cases = [
        json!({ "email": "", "password": "password123", "display_name": "A" }),
        json!({ "email": "no-at-sign", "password": "password123", "display_name": "A" }),
        json!({ "email": "a@example.com", "password": "short", "display_name": "A" }),
        json!({ "email": "a@example.com", "password": "password123", "display_name": "   " }),
    ];
    for case in cases {
        let (status, _) = app
            .json(Method::POST, "/api/auth/register", None, Some(case.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
    }
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::new().await;
    app.register("a@example.com", "Alice").await;

    let (status, wrong) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "a@example.com", "password": "not-the-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong["error"], unknown["error"]);
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() {
    let app = TestApp::new().await;

    let (status, body) = app.json(Method::GET, "/api/diaries", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = app
        .json(Method::GET, "/api/diaries", Some("garbage"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_json_body_is_bad_request() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, bytes) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
}

// ── 일기 ──

#[tokio::test]
async fn create_normalizes_and_lists_own_entries() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("a@example.com", "Alice").await;

    let entry = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-01", "content": "  hello  ", "emotions": "   ", "weather": "" }),
        )
        .await;
    assert_eq!(entry["user_id"], user_id.as_str());
    assert_eq!(entry["content"], "hello");
    assert!(entry["emotions"].is_null());
    assert!(entry["weather"].is_null());
    assert_eq!(entry["is_public"], false);

    app.create_entry(&token, json!({ "date": "2024-03-05", "gratitude": "tea" }))
        .await;

    let (status, body) = app.json(Method::GET, "/api/diaries", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-03-01"]);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    let cases = [
        json!({ "content": "no date" }),
        json!({ "date": "2024-02-30", "content": "x" }),
        json!({ "date": "2024-3-1", "content": "x" }),
        json!({ "date": "2024-03-01", "weather": "Sunny", "content": "x" }),
        json!({ "date": "2024-03-01", "content": "   ", "events": "" }),
    ];
    for case in cases {
        let (status, body) = app
            .json(Method::POST, "/api/diaries", Some(&token), Some(case.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn update_replaces_the_whole_entry() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;
    let entry = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-01", "content": "first", "events": "walk" }),
        )
        .await;
    let id = entry["id"].as_str().unwrap();

    let (status, body) = app
        .json(
            Method::PUT,
            &format!("/api/diaries/{id}"),
            Some(&token),
            Some(json!({ "date": "2024-03-02", "learnings": "rust", "weather": "sunny" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["date"], "2024-03-02");
    assert_eq!(body["data"]["weather"], "sunny");
    assert!(body["data"]["content"].is_null());
    assert!(body["data"]["events"].is_null());
    assert_eq!(body["data"]["created_at"], entry["created_at"]);
}

#[tokio::test]
async fn other_users_cannot_touch_an_entry() {
    let app = TestApp::new().await;
    let (owner, _) = app.register("owner@example.com", "Owner").await;
    let (intruder, _) = app.register("intruder@example.com", "Intruder").await;
    let entry = app
        .create_entry(&owner, json!({ "date": "2024-03-01", "content": "mine" }))
        .await;
    let id = entry["id"].as_str().unwrap();

    let (status, _) = app
        .json(
            Method::PUT,
            &format!("/api/diaries/{id}"),
            Some(&intruder),
            Some(json!({ "date": "2024-03-01", "content": "hijacked" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .json(
            Method::PATCH,
            &format!("/api/diaries/{id}/visibility"),
            Some(&intruder),
            Some(json!({ "is_public": true })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&intruder), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 주인 쪽에서는 그대로
    let (_, body) = app.json(Method::GET, "/api/diaries", Some(&owner), None).await;
    assert_eq!(body["data"][0]["content"], "mine");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;
    let payload = json!({ "date": "2024-03-01", "content": "x" });

    let missing = uuid::Uuid::now_v7();
    let (status, _) = app
        .json(
            Method::PUT,
            &format!("/api/diaries/{missing}"),
            Some(&token),
            Some(payload.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/diaries/{missing}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .json(Method::PUT, "/api/diaries/not-a-uuid", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Diary id is invalid");
}

#[tokio::test]
async fn public_listing_shows_only_public_entries() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;
    let public = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-01", "content": "shared", "is_public": true }),
        )
        .await;
    let private = app
        .create_entry(&token, json!({ "date": "2024-03-02", "content": "secret" }))
        .await;

    let (status, body) = app.json(Method::GET, "/api/diaries/public", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], public["id"]);
    assert_eq!(entries[0]["author_name"], "Alice");
    assert!(entries[0].get("user_id").is_none());
    assert!(entries[0].get("image_name").is_none());

    // 비공개 → 공개로 바꾸면 목록에 나타납니다.
    let id = private["id"].as_str().unwrap();
    let (status, body) = app
        .json(
            Method::PATCH,
            &format!("/api/diaries/{id}/visibility"),
            Some(&token),
            Some(json!({ "is_public": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["is_public"], true);

    let (_, body) = app.json(Method::GET, "/api/diaries/public", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // 같은 값으로 다시 설정해도 성공
    let (status, _) = app
        .json(
            Method::PATCH,
            &format!("/api/diaries/{id}/visibility"),
            Some(&token),
            Some(json!({ "is_public": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

// ── 업로드 ──

#[tokio::test]
async fn image_upload_is_stored_and_served() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    let (status, body) = app
        .upload("/api/upload/image", &token, "image", "Photo.PNG", PNG)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let name = body["data"]["name"].as_str().unwrap();
    assert!(name.starts_with("diary-image-") && name.ends_with(".png"));
    assert_eq!(body["data"]["content_type"], "image/png");
    assert_eq!(body["data"]["path"], format!("images/{name}"));
    assert_eq!(body["data"]["url"], format!("/api/files/images/{name}"));
    assert!(app.media_path(MediaKind::Image, name).exists());

    let request = Request::builder()
        .uri(format!("/api/files/images/{name}"))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, PNG);
}

#[tokio::test]
async fn uploads_are_checked_before_storing() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    // 확장자는 맞지만 내용이 이미지가 아님
    let (status, _) = app
        .upload("/api/upload/image", &token, "image", "fake.png", b"just some text")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .upload("/api/upload/audio", &token, "audio", "clip.flac", b"fLaC")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .upload("/api/upload/audio", &token, "audio", "noextension", b"ID3")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 필드 이름이 다르면 파일이 없는 것으로 봅니다.
    let (status, body) = app
        .upload("/api/upload/image", &token, "file", "photo.png", PNG)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("image"));

    // 설정된 상한(1024바이트) 초과
    let mut big = PNG.to_vec();
    big.resize(2000, 0);
    let (status, _) = app
        .upload("/api/upload/image", &token, "image", "big.png", &big)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let stored = std::fs::read_dir(app.media_path(MediaKind::Image, ""))
        .unwrap()
        .count();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn audio_upload_uses_extension_content_type() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    let (status, body) = app
        .upload("/api/upload/audio", &token, "audio", "memo.m4a", b"\x00\x00\x00\x18ftypM4A ")
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["content_type"], "audio/mp4");
    assert!(body["data"]["name"].as_str().unwrap().starts_with("diary-audio-"));
}

#[tokio::test]
async fn deleting_an_entry_removes_its_media() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    let (_, image) = app
        .upload("/api/upload/image", &token, "image", "photo.png", PNG)
        .await;
    let (_, audio) = app
        .upload("/api/upload/audio", &token, "audio", "memo.mp3", b"ID3\x03")
        .await;
    let image_name = image["data"]["name"].as_str().unwrap().to_string();
    let audio_name = audio["data"]["name"].as_str().unwrap().to_string();

    let entry = app
        .create_entry(
            &token,
            json!({
                "date": "2024-03-01",
                "content": "with media",
                "image_url": image["data"]["url"],
                "image_name": image_name,
                "audio_url": audio["data"]["url"],
                "audio_name": audio_name,
            }),
        )
        .await;
    let id = entry["id"].as_str().unwrap();

    let (status, body) = app
        .json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["message"].is_string());
    assert!(!app.media_path(MediaKind::Image, &image_name).exists());
    assert!(!app.media_path(MediaKind::Audio, &audio_name).exists());

    let (_, body) = app.json(Method::GET, "/api/diaries", Some(&token), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_an_entry_with_missing_media_still_succeeds() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;
    let entry = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-01", "content": "x", "image_name": "diary-image-1-gone.png" }),
        )
        .await;
    let id = entry["id"].as_str().unwrap();

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn file_delete_respects_other_users_entries() {
    let app = TestApp::new().await;
    let (owner, _) = app.register("owner@example.com", "Owner").await;
    let (other, _) = app.register("other@example.com", "Other").await;

    let (_, image) = app
        .upload("/api/upload/image", &owner, "image", "photo.png", PNG)
        .await;
    let name = image["data"]["name"].as_str().unwrap().to_string();
    app.create_entry(
        &owner,
        json!({ "date": "2024-03-01", "content": "x", "image_name": name }),
    )
    .await;

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/files/{name}"), Some(&other), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(app.media_path(MediaKind::Image, &name).exists());

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/files/{name}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!app.media_path(MediaKind::Image, &name).exists());

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/files/{name}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_entry_keeps_media_used_by_another_users_entry() {
    let app = TestApp::new().await;
    let (owner, _) = app.register("owner@example.com", "Owner").await;
    let (other, _) = app.register("other@example.com", "Other").await;

    let (_, image) = app
        .upload("/api/upload/image", &owner, "image", "photo.png", PNG)
        .await;
    let name = image["data"]["name"].as_str().unwrap().to_string();
    app.create_entry(
        &owner,
        json!({ "date": "2024-03-01", "content": "mine", "image_name": name }),
    )
    .await;

    // 다른 사용자가 같은 파일 이름을 자기 일기에 적고 그 일기를 지워도
    let borrowed = app
        .create_entry(
            &other,
            json!({ "date": "2024-03-01", "content": "borrowed", "image_name": name }),
        )
        .await;
    let id = borrowed["id"].as_str().unwrap();
    let (status, _) = app
        .json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&other), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    assert!(app.media_path(MediaKind::Image, &name).exists());
}

#[tokio::test]
async fn deleting_one_of_two_entries_sharing_media_keeps_the_file() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    let (_, audio) = app
        .upload("/api/upload/audio", &token, "audio", "memo.mp3", b"ID3\x03")
        .await;
    let name = audio["data"]["name"].as_str().unwrap().to_string();
    let first = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-01", "content": "one", "audio_name": name }),
        )
        .await;
    let second = app
        .create_entry(
            &token,
            json!({ "date": "2024-03-02", "content": "two", "audio_name": name }),
        )
        .await;

    let id = first["id"].as_str().unwrap();
    app.json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&token), None)
        .await;
    assert!(app.media_path(MediaKind::Audio, &name).exists());

    // 마지막 참조가 사라지면 파일도 지워집니다.
    let id = second["id"].as_str().unwrap();
    app.json(Method::DELETE, &format!("/api/diaries/{id}"), Some(&token), None)
        .await;
    assert!(!app.media_path(MediaKind::Audio, &name).exists());
}

#[tokio::test]
async fn body_over_the_upload_route_limit_is_too_large() {
    let app = TestApp::new().await;
    let (token, _) = app.register("a@example.com", "Alice").await;

    // 라우트 본문 상한(최대 업로드 크기 + multipart 여유분)보다 큰 본문
    let mut huge = PNG.to_vec();
    huge.resize(200 * 1024, 0);
    let (status, body) = app
        .upload("/api/upload/image", &token, "image", "huge.png", &huge)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File must be 1024 bytes or smaller");

    let stored = std::fs::read_dir(app.media_path(MediaKind::Image, ""))
        .unwrap()
        .count();
    assert_eq!(stored, 0);
}
