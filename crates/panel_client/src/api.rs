use std::time::Duration;

use crate::{ApiError, ApiFailure, ConfigPayload, LogsResponse, RunNowResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The four server operations the panel uses. Implemented over reqwest in
/// production; tests substitute their own implementation.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_config(&self) -> Result<ConfigPayload, ApiError>;
    async fn save_config(&self, payload: &ConfigPayload) -> Result<(), ApiError>;
    async fn run_now(&self) -> Result<String, ApiError>;
    async fn fetch_logs(&self) -> Result<Vec<String>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestClient {
    async fn get_config(&self) -> Result<ConfigPayload, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/config"))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response)?;
        response
            .json::<ConfigPayload>()
            .await
            .map_err(map_body_error)
    }

    async fn save_config(&self, payload: &ConfigPayload) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/config"))
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;
        // 2xx is the whole contract; no structured body is required.
        check_status(response).map(|_| ())
    }

    async fn run_now(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/run_now"))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response)?;
        let body = response
            .json::<RunNowResponse>()
            .await
            .map_err(map_body_error)?;
        Ok(body.message)
    }

    async fn fetch_logs(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/logs"))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response)?;
        let body = response
            .json::<LogsResponse>()
            .await
            .map_err(map_body_error)?;
        Ok(body.logs)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::new(
            ApiFailure::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}

fn map_body_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    ApiError::new(ApiFailure::MalformedBody, err.to_string())
}
