use serde::{Deserialize, Serialize};

fn default_ftp_port() -> u16 {
    21
}

fn default_smtp_port() -> u16 {
    587
}

fn default_run_time() -> String {
    "09:00".to_string()
}

/// Full configuration document as it travels over the wire. Any section or
/// sub-field may be absent in a GET response; the serde defaults fill in the
/// documented fallbacks so callers always see a complete document. POST
/// bodies are serialized fully populated, ports as integers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigPayload {
    #[serde(default)]
    pub ftp: FtpSection,
    #[serde(default)]
    pub email: EmailSection,
    #[serde(default)]
    pub schedule: ScheduleSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpSection {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_ftp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub target_dir: String,
}

impl Default for FtpSection {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_ftp_port(),
            user: String::new(),
            password: String::new(),
            target_dir: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSection {
    #[serde(default)]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub sender_email: String,
    #[serde(default)]
    pub sender_password: String,
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl Default for EmailSection {
    fn default() -> Self {
        Self {
            smtp_server: String::new(),
            smtp_port: default_smtp_port(),
            sender_email: String::new(),
            sender_password: String::new(),
            recipients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSection {
    #[serde(default = "default_run_time")]
    pub run_time: String,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            run_time: default_run_time(),
        }
    }
}

/// Body of a successful `POST /api/run_now`; `message` is surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunNowResponse {
    pub message: String,
}

/// Body of `GET /api/logs`: the full current buffer, never a delta.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<String>,
}
