use std::sync::{Arc, Mutex};
use std::time::Duration;

use panel_client::{
    ApiClient, ApiError, ApiFailure, ClientCommand, ClientEvent, ClientHandle, ClientSettings,
    ConfigPayload,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test(flavor = "multi_thread")]
async fn each_command_produces_exactly_one_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "logs": ["a"] })),
        )
        .mount(&server)
        .await;

    let (handle, events) =
        ClientHandle::new(ClientSettings::new(server.uri())).expect("client handle");

    handle.submit(ClientCommand::LoadConfig);
    let event = events.recv_timeout(RECV_TIMEOUT).expect("load event");
    assert_eq!(
        event,
        ClientEvent::ConfigLoaded(Ok(ConfigPayload::default()))
    );

    handle.submit(ClientCommand::FetchLogs { seq: 7 });
    let event = events.recv_timeout(RECV_TIMEOUT).expect("logs event");
    assert_eq!(
        event,
        ClientEvent::LogsFetched {
            seq: 7,
            result: Ok(vec!["a".to_string()]),
        }
    );

    // No stray second event for either command.
    assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
}

#[derive(Default)]
struct StubApi {
    saved: Mutex<Vec<ConfigPayload>>,
}

#[async_trait::async_trait]
impl ApiClient for StubApi {
    async fn get_config(&self) -> Result<ConfigPayload, ApiError> {
        Ok(ConfigPayload::default())
    }

    async fn save_config(&self, payload: &ConfigPayload) -> Result<(), ApiError> {
        self.saved.lock().unwrap().push(payload.clone());
        Ok(())
    }

    async fn run_now(&self) -> Result<String, ApiError> {
        Err(ApiError {
            kind: ApiFailure::HttpStatus(503),
            message: "service unavailable".to_string(),
        })
    }

    async fn fetch_logs(&self) -> Result<Vec<String>, ApiError> {
        Ok(Vec::new())
    }
}

#[test]
fn failures_flow_back_as_events_not_panics() {
    let stub = Arc::new(StubApi::default());
    let (handle, events) = ClientHandle::with_client(stub.clone());

    handle.submit(ClientCommand::RunNow);
    let event = events.recv_timeout(RECV_TIMEOUT).expect("run event");
    match event {
        ClientEvent::RunCompleted(Err(err)) => {
            assert_eq!(err.kind, ApiFailure::HttpStatus(503));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let mut payload = ConfigPayload::default();
    payload.ftp.host = "ftp.example.com".to_string();
    handle.submit(ClientCommand::SaveConfig(payload.clone()));
    let event = events.recv_timeout(RECV_TIMEOUT).expect("save event");
    assert_eq!(event, ClientEvent::ConfigSaved(Ok(())));
    assert_eq!(stub.saved.lock().unwrap().as_slice(), &[payload]);
}
