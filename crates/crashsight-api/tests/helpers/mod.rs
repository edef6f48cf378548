//! Test helpers: build AppState and router against a stubbed model API.
//!
//! Run with: `cargo test -p crashsight-api`.

pub mod fixtures;

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use crashsight_api::setup::routes;
use crashsight_api::state::AppState;
use crashsight_core::Config;
use crashsight_vision::VisionClient;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test application: server, stubbed upstream, and the spool directory.
pub struct TestApp {
    pub server: TestServer,
    pub upstream: MockServer,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently in the spool directory.
    pub fn spooled_files(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }

    /// Number of requests the stubbed model API received.
    pub async fn upstream_calls(&self) -> usize {
        self.upstream.received_requests().await.unwrap().len()
    }
}

pub async fn setup_test_app() -> TestApp {
    let upstream = MockServer::start().await;
    let upload_dir = TempDir::new().unwrap();

    let config = Config {
        server_port: 0,
        openai_api_key: "test-key".to_string(),
        openai_model: "gpt-4o".to_string(),
        openai_base_url: upstream.uri(),
        upload_dir: upload_dir.path().to_string_lossy().into_owned(),
        max_file_size_bytes: 10 * 1024 * 1024,
        allowed_content_types: vec![
            "image/jpeg".to_string(),
            "image/jpg".to_string(),
            "image/png".to_string(),
        ],
        vision_timeout_secs: 5,
    };

    let vision = VisionClient::new(&config).unwrap();
    let state = Arc::new(AppState { config, vision });
    let server = TestServer::new(routes::setup_routes(state)).unwrap();

    TestApp {
        server,
        upstream,
        upload_dir,
    }
}

/// Mount a 200 chat-completions reply whose assistant content is `content`.
pub async fn mount_model_reply(upstream: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })))
        .mount(upstream)
        .await;
}

/// Multipart form with one file part under the `image` field.
pub fn image_form(filename: &str, content_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(data).file_name(filename).mime_type(content_type),
    )
}
