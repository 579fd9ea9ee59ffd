//! Panel core: pure state machine and view-model helpers.
mod config;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use config::{
    ConfigDocument, EmailConfig, FtpConfig, ScheduleConfig, DEFAULT_FTP_PORT, DEFAULT_RUN_TIME,
    DEFAULT_SMTP_PORT,
};
pub use effect::{Effect, Notice, Severity};
pub use msg::Msg;
pub use state::{AppState, FetchSeq, FormField, FormState, LOG_PLACEHOLDER};
pub use update::update;
pub use view_model::PanelViewModel;
