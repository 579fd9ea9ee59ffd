use crate::FormState;

/// Snapshot of everything the presentation layer needs to render, projected
/// from [`crate::AppState`]. The shell reads this instead of reaching into
/// state, so the synchronization logic never touches a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub form: FormState,
    /// Submit control is disabled and shows its busy label while true.
    pub save_in_flight: bool,
    /// Run-now control is disabled while true.
    pub run_in_flight: bool,
    /// Current log view content, always a full replacement.
    pub log_text: String,
    /// Scroll the log view to its newest entry after rendering.
    pub log_stick_to_bottom: bool,
    pub dirty: bool,
}
