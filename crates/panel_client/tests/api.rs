use std::time::Duration;

use panel_client::{ApiClient, ApiFailure, ClientSettings, ConfigPayload, ReqwestClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(ClientSettings::new(server.uri())).expect("client")
}

fn full_config_json() -> serde_json::Value {
    json!({
        "ftp": {
            "host": "ftp.example.com",
            "port": 2121,
            "user": "uploader",
            "password": "hunter2",
            "target_dir": "/incoming"
        },
        "email": {
            "smtp_server": "smtp.example.com",
            "smtp_port": 465,
            "sender_email": "job@example.com",
            "sender_password": "secret",
            "recipients": ["a@x.com", "b@y.com"]
        },
        "schedule": { "run_time": "17:30" }
    })
}

#[tokio::test]
async fn get_config_parses_full_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_config_json()))
        .mount(&server)
        .await;

    let config = client_for(&server).get_config().await.expect("config");

    assert_eq!(config.ftp.host, "ftp.example.com");
    assert_eq!(config.ftp.port, 2121);
    assert_eq!(config.email.smtp_port, 465);
    assert_eq!(
        config.email.recipients,
        vec!["a@x.com".to_string(), "b@y.com".to_string()]
    );
    assert_eq!(config.schedule.run_time, "17:30");
}

#[tokio::test]
async fn get_config_defaults_absent_sections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let config = client_for(&server).get_config().await.expect("config");

    assert_eq!(config, ConfigPayload::default());
    assert_eq!(config.ftp.port, 21);
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.schedule.run_time, "09:00");
}

#[tokio::test]
async fn get_config_defaults_missing_subfields_individually() {
    let server = MockServer::start().await;
    // Sections present but partially populated.
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ftp": { "host": "ftp.example.com" },
            "email": { "smtp_server": "smtp.example.com" }
        })))
        .mount(&server)
        .await;

    let config = client_for(&server).get_config().await.expect("config");

    assert_eq!(config.ftp.host, "ftp.example.com");
    assert_eq!(config.ftp.port, 21);
    assert_eq!(config.email.smtp_server, "smtp.example.com");
    assert_eq!(config.email.smtp_port, 587);
    assert!(config.email.recipients.is_empty());
    assert_eq!(config.schedule.run_time, "09:00");
}

#[tokio::test]
async fn save_config_posts_the_full_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .and(body_json(full_config_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Configuration saved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload: ConfigPayload = serde_json::from_value(full_config_json()).expect("payload");
    client_for(&server)
        .save_config(&payload)
        .await
        .expect("save ok");
}

#[tokio::test]
async fn save_config_fails_on_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_config(&ConfigPayload::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailure::HttpStatus(500));
}

#[tokio::test]
async fn run_now_returns_server_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/run_now"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Job triggered manually"
        })))
        .mount(&server)
        .await;

    let message = client_for(&server).run_now().await.expect("run now");
    assert_eq!(message, "Job triggered manually");
}

#[tokio::test]
async fn run_now_rejects_unparseable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/run_now"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).run_now().await.unwrap_err();
    assert_eq!(err.kind, ApiFailure::MalformedBody);
}

#[tokio::test]
async fn fetch_logs_returns_buffer_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": ["[09:00] started\n", "[09:01] done\n"]
        })))
        .mount(&server)
        .await;

    let logs = client_for(&server).fetch_logs().await.expect("logs");
    assert_eq!(
        logs,
        vec!["[09:00] started\n".to_string(), "[09:01] done\n".to_string()]
    );
}

#[tokio::test]
async fn fetch_logs_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "logs": [] })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::new(server.uri())
    };
    let client = ReqwestClient::new(settings).expect("client");

    let err = client.fetch_logs().await.unwrap_err();
    assert_eq!(err.kind, ApiFailure::Timeout);
}

#[tokio::test]
async fn unreachable_server_maps_to_network_failure() {
    // Nothing listens on port 1.
    let client = ReqwestClient::new(ClientSettings::new("http://127.0.0.1:1")).expect("client");

    let err = client.get_config().await.unwrap_err();
    assert_eq!(err.kind, ApiFailure::Network);
}
