use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use reword_engine::{
    ApiError, HttpTransformApi, PollOutcome, ServiceSettings, TransformApi, TransformJob,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reword_logging::initialize_for_tests);
}

fn api_for(server: &MockServer) -> HttpTransformApi {
    let settings = ServiceSettings {
        base_url: server.uri(),
        ..ServiceSettings::default()
    };
    HttpTransformApi::new(settings).expect("client builds")
}

fn job(instruction: Option<&str>) -> TransformJob {
    TransformJob {
        page_url: "https://www.example.com/page".to_string(),
        artifact_file_name: "example.com-2024-03-01T12:00:00.000Z.mhtml".to_string(),
        instruction: instruction.map(str::to_string),
    }
}

#[tokio::test]
async fn submit_sends_service_wire_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "pageURL": "https://www.example.com/page",
            "modifiedPageFileName": "example.com-2024-03-01T12:00:00.000Z.mhtml",
            "prompt": "make it formal",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.submit(&job(Some("make it formal"))).await.expect("submit ok");
}

#[tokio::test]
async fn submit_omits_prompt_when_no_instruction_given() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_json(json!({
            "pageURL": "https://www.example.com/page",
            "modifiedPageFileName": "example.com-2024-03-01T12:00:00.000Z.mhtml",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.submit(&job(None)).await.expect("submit ok");
}

#[tokio::test]
async fn submit_reports_rejecting_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.submit(&job(None)).await.unwrap_err();
    assert!(matches!(err, ApiError::SubmitStatus(500)));
}

#[tokio::test]
async fn poll_reports_pending_for_not_ready_statuses() {
    init_logging();
    let server = MockServer::start().await;
    let api = api_for(&server);
    for status in [202u16, 404, 500] {
        let _mock = Mock::given(method("POST"))
            .and(path("/download"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let outcome = api.poll_artifact("a.mhtml").await.expect("poll ok");
        assert_eq!(outcome, PollOutcome::Pending, "status {status}");
    }
}

#[tokio::test]
async fn poll_returns_artifact_bytes_when_ready() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/download"))
        .and(body_json(json!({ "fileName": "example.com-x.mhtml" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"binary artifact".to_vec(), "application/octet-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outcome = api.poll_artifact("example.com-x.mhtml").await.expect("poll ok");
    assert_eq!(
        outcome,
        PollOutcome::Ready(bytes::Bytes::from_static(b"binary artifact"))
    );
}

#[tokio::test]
async fn poll_surfaces_transport_errors_to_the_loop() {
    init_logging();
    // Nothing listens here; the connection is refused outright.
    let settings = ServiceSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
        ..ServiceSettings::default()
    };
    let api = HttpTransformApi::new(settings).expect("client builds");

    let err = api.poll_artifact("a.mhtml").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
