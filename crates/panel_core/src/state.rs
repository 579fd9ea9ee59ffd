use crate::view_model::PanelViewModel;
use crate::{
    ConfigDocument, EmailConfig, FtpConfig, ScheduleConfig, DEFAULT_FTP_PORT, DEFAULT_RUN_TIME,
    DEFAULT_SMTP_PORT,
};

/// Monotonically increasing tag for log fetches, assigned at issue time.
pub type FetchSeq = u64;

/// Shown in the log view when the server buffer is empty.
pub const LOG_PLACEHOLDER: &str = "No logs yet...";

/// Identifies a single editable form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FtpHost,
    FtpPort,
    FtpUser,
    FtpPassword,
    FtpTargetDir,
    SmtpServer,
    SmtpPort,
    SenderEmail,
    SenderPassword,
    Recipients,
    RunTime,
}

/// Editable text model of the configuration form. Ports are held as raw
/// text and coerced to integers only when a document is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub ftp_host: String,
    pub ftp_port: String,
    pub ftp_user: String,
    pub ftp_password: String,
    pub ftp_target_dir: String,
    pub smtp_server: String,
    pub smtp_port: String,
    pub sender_email: String,
    pub sender_password: String,
    /// Single comma-delimited input; split and trimmed at save time.
    pub recipients: String,
    pub run_time: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ftp_host: String::new(),
            ftp_port: DEFAULT_FTP_PORT.to_string(),
            ftp_user: String::new(),
            ftp_password: String::new(),
            ftp_target_dir: String::new(),
            smtp_server: String::new(),
            smtp_port: DEFAULT_SMTP_PORT.to_string(),
            sender_email: String::new(),
            sender_password: String::new(),
            recipients: String::new(),
            run_time: DEFAULT_RUN_TIME.to_string(),
        }
    }
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FtpHost => self.ftp_host = value,
            FormField::FtpPort => self.ftp_port = value,
            FormField::FtpUser => self.ftp_user = value,
            FormField::FtpPassword => self.ftp_password = value,
            FormField::FtpTargetDir => self.ftp_target_dir = value,
            FormField::SmtpServer => self.smtp_server = value,
            FormField::SmtpPort => self.smtp_port = value,
            FormField::SenderEmail => self.sender_email = value,
            FormField::SenderPassword => self.sender_password = value,
            FormField::Recipients => self.recipients = value,
            FormField::RunTime => self.run_time = value,
        }
    }

    /// Populates the form from a loaded document. Recipients are re-joined
    /// into the single delimited input the form edits.
    pub fn apply_document(&mut self, doc: &ConfigDocument) {
        self.ftp_host = doc.ftp.host.clone();
        self.ftp_port = doc.ftp.port.to_string();
        self.ftp_user = doc.ftp.user.clone();
        self.ftp_password = doc.ftp.password.clone();
        self.ftp_target_dir = doc.ftp.target_dir.clone();
        self.smtp_server = doc.email.smtp_server.clone();
        self.smtp_port = doc.email.smtp_port.to_string();
        self.sender_email = doc.email.sender_email.clone();
        self.sender_password = doc.email.sender_password.clone();
        self.recipients = doc.email.recipients.join(", ");
        self.run_time = doc.schedule.run_time.clone();
    }

    /// Builds the full replacement document from current field text.
    /// Ports that do not parse fall back to the documented default so the
    /// integer invariant holds regardless of what was typed.
    pub fn document(&self) -> ConfigDocument {
        ConfigDocument {
            ftp: FtpConfig {
                host: self.ftp_host.clone(),
                port: parse_port(&self.ftp_port, DEFAULT_FTP_PORT),
                user: self.ftp_user.clone(),
                password: self.ftp_password.clone(),
                target_dir: self.ftp_target_dir.clone(),
            },
            email: EmailConfig {
                smtp_server: self.smtp_server.clone(),
                smtp_port: parse_port(&self.smtp_port, DEFAULT_SMTP_PORT),
                sender_email: self.sender_email.clone(),
                sender_password: self.sender_password.clone(),
                recipients: parse_recipients(&self.recipients),
            },
            schedule: ScheduleConfig {
                run_time: self.run_time.clone(),
            },
        }
    }
}

fn parse_port(raw: &str, fallback: u16) -> u16 {
    raw.trim().parse().unwrap_or(fallback)
}

fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: FormState,
    save_in_flight: bool,
    run_in_flight: bool,
    log_text: String,
    log_stick_to_bottom: bool,
    issued_seq: FetchSeq,
    rendered_seq: FetchSeq,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            form: self.form.clone(),
            save_in_flight: self.save_in_flight,
            run_in_flight: self.run_in_flight,
            log_text: self.log_text.clone(),
            log_stick_to_bottom: self.log_stick_to_bottom,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form(&self) -> &FormState {
        &self.form
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub(crate) fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    pub(crate) fn begin_save(&mut self) {
        self.save_in_flight = true;
        self.dirty = true;
    }

    pub(crate) fn finish_save(&mut self) {
        self.save_in_flight = false;
        self.dirty = true;
    }

    pub(crate) fn run_in_flight(&self) -> bool {
        self.run_in_flight
    }

    pub(crate) fn begin_run(&mut self) {
        self.run_in_flight = true;
        self.dirty = true;
    }

    pub(crate) fn finish_run(&mut self) {
        self.run_in_flight = false;
        self.dirty = true;
    }

    /// Hands out the next fetch tag; strictly increasing for the session.
    pub(crate) fn next_fetch_seq(&mut self) -> FetchSeq {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Applies a successful log fetch. Completions older than the newest
    /// already rendered are dropped so a slow response cannot regress the
    /// view. An empty buffer renders the placeholder sentinel.
    pub(crate) fn render_logs(&mut self, seq: FetchSeq, lines: &[String]) {
        if seq <= self.rendered_seq {
            return;
        }
        self.rendered_seq = seq;
        self.log_text = if lines.is_empty() {
            LOG_PLACEHOLDER.to_string()
        } else {
            lines.concat()
        };
        self.log_stick_to_bottom = true;
        self.dirty = true;
    }
}
