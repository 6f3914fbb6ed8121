//! End-to-end run through the OpenAI backend against a fake API server.

use std::sync::Arc;
use std::time::Duration;

use openai_service::{OpenAiConfig, OpenAiService};
use serde_json::json;
use ticket_store::{
    NoopProgress, OpenAiVectorStore, TicketUploader, UploadConfig, UploadOutcome,
};
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_file_create(server: &MockServer, ticket: &str, file_id: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/files"))
        .and(body_string_contains(format!("temp_cancellation_{ticket}.txt")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": file_id,
            "object": "file",
            "purpose": "assistants"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn uploads_attach_and_count_provider_errors() {
    let server = MockServer::start().await;

    mount_file_create(&server, "T-1", "file-1").await;
    mount_file_create(&server, "T-2", "file-2").await;
    mount_file_create(&server, "T-3", "file-3").await;

    for file_id in ["file-1", "file-3"] {
        Mock::given(method("POST"))
            .and(path("/v1/vector_stores/vs_e2e/files"))
            .and(body_json(json!({ "file_id": file_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": file_id,
                "vector_store_id": "vs_e2e",
                "status": "in_progress"
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/v1/vector_stores/vs_e2e/files"))
        .and(body_json(json!({ "file_id": "file-2" })))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tickets.jsonl");
    std::fs::write(
        &input,
        [
            r#"{"text":"a","metadata":{"ticketId":"T-1"}}"#,
            r#"{"text":"b","metadata":{"ticketId":"T-2"}}"#,
            "",
            r#"{"text":"c","metadata":{"ticketId":"T-3"}}"#,
        ]
        .join("\n"),
    )
    .unwrap();

    let svc = OpenAiService::new(OpenAiConfig {
        endpoint: server.uri(),
        api_key: Some("sk-test".into()),
        timeout_secs: Some(5),
    })
    .unwrap();

    let mut cfg = UploadConfig::new_default("vs_e2e");
    cfg.input_path = input;
    cfg.temp_dir = dir.path().to_path_buf();
    cfg.batch_size = 2;
    cfg.batch_delay = Duration::ZERO;

    let uploader = TicketUploader::new(cfg, OpenAiVectorStore::new(Arc::new(svc))).unwrap();
    let report = uploader.run(&NoopProgress).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(report.summary().contains("Success rate: 66.7%"));

    match &report.outcomes[1] {
        UploadOutcome::Failed { ticket, error } => {
            assert_eq!(ticket, "T-2");
            assert!(error.contains("500"), "{error}");
            assert!(error.contains("upstream exploded"), "{error}");
        }
        other => panic!("expected failure for T-2, got {other:?}"),
    }
    assert_eq!(
        report.outcomes[2],
        UploadOutcome::Uploaded {
            ticket: "T-3".into(),
            file_id: "file-3".into(),
        }
    );

    // Only the input dump is left behind.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, vec!["tickets.jsonl".to_string()]);
}
