/// Port used for the FTP section when the server or the form provides none.
pub const DEFAULT_FTP_PORT: u16 = 21;
/// Port used for the SMTP section when the server or the form provides none.
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Time-of-day used for the schedule section when the server provides none.
pub const DEFAULT_RUN_TIME: &str = "09:00";

/// Full job configuration, always transmitted as a complete replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    pub ftp: FtpConfig,
    pub email: EmailConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub target_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub sender_password: String,
    /// Trimmed, non-empty, order-preserving.
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub run_time: String,
}

impl Default for FtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_FTP_PORT,
            user: String::new(),
            password: String::new(),
            target_dir: String::new(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_server: String::new(),
            smtp_port: DEFAULT_SMTP_PORT,
            sender_email: String::new(),
            sender_password: String::new(),
            recipients: Vec::new(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            run_time: DEFAULT_RUN_TIME.to_string(),
        }
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            ftp: FtpConfig::default(),
            email: EmailConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}
