#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the remote configuration document.
    LoadConfig,
    /// Write the full configuration document back to the server.
    SaveConfig(crate::ConfigDocument),
    /// Ask the user to confirm the run-now action before anything is sent.
    ConfirmRunNow,
    /// Fire the run-now endpoint.
    TriggerRun,
    /// Fetch the current log buffer. `seq` was assigned at issue time and
    /// gates out-of-order completions.
    FetchLogs { seq: crate::FetchSeq },
    /// Surface a user-visible notice.
    Notify(Notice),
}

/// A user-visible outcome report, rendered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}
