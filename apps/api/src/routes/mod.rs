pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyses/modes", get(handlers::handle_list_modes))
        .route(
            "/api/v1/analyses/:mode",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::dispatcher::AnalysisDispatcher;
    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenerator};

    const BOUNDARY: &str = "recruittrack-test-boundary";

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("Similarity score: 78%".to_string())
        }
    }

    fn app(generator: Arc<CountingGenerator>) -> Router {
        let config = Config::for_tests();
        let dispatcher = AnalysisDispatcher::new(&config, generator).unwrap();
        build_router(AppState {
            dispatcher: Arc::new(dispatcher),
            config,
        })
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File {
            name: &'a str,
            file_name: &'a str,
            content_type: &'a str,
            bytes: &'a [u8],
        },
    }

    fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn text_resume(bytes: &[u8]) -> Part<'_> {
        Part::File {
            name: "resume",
            file_name: "resume.txt",
            content_type: "text/plain",
            bytes,
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "recruittrack");
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let response = app(Arc::default())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("name=\"job_description\""));
        assert!(html.contains("name=\"resume\""));
    }

    #[tokio::test]
    async fn test_list_modes() {
        let response = app(Arc::default())
            .oneshot(
                Request::get("/api/v1/analyses/modes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        let modes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["mode"].as_str().unwrap())
            .collect();
        assert_eq!(
            modes,
            [
                "candidate-review",
                "missing-keywords",
                "similarity-score",
                "interview-questions"
            ]
        );
    }

    #[tokio::test]
    async fn test_analyze_returns_generated_text() {
        let generator = Arc::new(CountingGenerator::default());
        let request = multipart_request(
            "/api/v1/analyses/similarity-score",
            &[
                Part::Text("job_description", "Rust backend engineer"),
                text_resume(b"Experience: 5 years\nSkills: Go, Rust"),
            ],
        );
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["mode"], "similarity-score");
        assert_eq!(body["title"], "Similarity Analysis");
        assert_eq!(body["result"], "Similarity score: 78%");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_without_resume_is_missing_input() {
        let generator = Arc::new(CountingGenerator::default());
        let request = multipart_request(
            "/api/v1/analyses/candidate-review",
            &[Part::Text("job_description", "Rust backend engineer")],
        );
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "MISSING_INPUT");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_file_input_counts_as_missing() {
        let generator = Arc::new(CountingGenerator::default());
        let request = multipart_request(
            "/api/v1/analyses/candidate-review",
            &[
                Part::Text("job_description", "Rust backend engineer"),
                Part::File {
                    name: "resume",
                    file_name: "",
                    content_type: "application/octet-stream",
                    bytes: b"",
                },
            ],
        );
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let generator = Arc::new(CountingGenerator::default());
        let request = multipart_request(
            "/api/v1/analyses/similarity-score",
            &[
                Part::Text("notes", "referred by Sam"),
                Part::Text("job_description", "Rust backend engineer"),
                text_resume(b"Skills: Go, Rust"),
            ],
        );
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_truncated_unknown_field_is_rejected() {
        let generator = Arc::new(CountingGenerator::default());
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"notes\"\r\n\r\nreferred by"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyses/similarity-score")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Could not read field 'notes'"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_upload_is_415() {
        let generator = Arc::new(CountingGenerator::default());
        let request = multipart_request(
            "/api/v1/analyses/missing-keywords",
            &[
                Part::Text("job_description", "Rust backend engineer"),
                Part::File {
                    name: "resume",
                    file_name: "resume.doc",
                    content_type: "application/msword",
                    bytes: b"legacy word",
                },
            ],
        );
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_utf8_upload_is_422() {
        let request = multipart_request(
            "/api/v1/analyses/interview-questions",
            &[
                Part::Text("job_description", "Rust backend engineer"),
                text_resume(&[0xff, 0xfe, 0xfd]),
            ],
        );
        let response = app(Arc::default()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "DECODE_FAILURE");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_404() {
        let request = multipart_request(
            "/api/v1/analyses/salary-estimate",
            &[Part::Text("job_description", "Rust backend engineer")],
        );
        let response = app(Arc::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
