#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session began; kicks off the initial config load and first log fetch.
    SessionStarted,
    /// User edited a form field (raw text, stored as-is until save).
    FieldChanged {
        field: crate::FormField,
        value: String,
    },
    /// User submitted the configuration form.
    SaveClicked,
    /// Remote configuration arrived, or the load failed with a message.
    ConfigLoaded(Result<crate::ConfigDocument, String>),
    /// Save round-trip finished.
    ConfigSaved(Result<(), String>),
    /// User clicked Run Now.
    RunNowClicked,
    /// User answered yes to the run-now confirmation.
    RunNowConfirmed,
    /// User answered no to the run-now confirmation.
    RunNowDeclined,
    /// Run-now round-trip finished; Ok carries the server's message verbatim.
    RunCompleted(Result<String, String>),
    /// Poll timer fired.
    PollTick,
    /// User clicked the manual refresh action.
    RefreshClicked,
    /// A log fetch completed.
    LogsFetched {
        seq: crate::FetchSeq,
        result: Result<Vec<String>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
