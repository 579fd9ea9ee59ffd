use std::sync::Once;

use panel_core::{update, AppState, Effect, Msg, Severity};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

#[test]
fn click_requests_confirmation_without_network_effects() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::RunNowClicked);

    assert_eq!(effects, vec![Effect::ConfirmRunNow]);
    assert!(!state.view().run_in_flight);
}

#[test]
fn declined_confirmation_is_terminal() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::RunNowClicked);

    let (state, effects) = update(state, Msg::RunNowDeclined);

    assert!(effects.is_empty());
    assert!(!state.view().run_in_flight);
}

#[test]
fn confirmed_triggers_exactly_one_run() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::RunNowClicked);

    let (state, effects) = update(state, Msg::RunNowConfirmed);
    assert_eq!(effects, vec![Effect::TriggerRun]);
    assert!(state.view().run_in_flight);

    // A second click while in flight does not even re-prompt.
    let (state, effects) = update(state, Msg::RunNowClicked);
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::RunNowConfirmed);
    assert!(effects.is_empty());
}

#[test]
fn success_surfaces_server_message_and_forces_log_refresh() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::RunNowClicked);
    let (state, _effects) = update(state, Msg::RunNowConfirmed);

    let (state, effects) = update(state, Msg::RunCompleted(Ok("Job started.".into())));

    assert_eq!(effects.len(), 2);
    match &effects[0] {
        Effect::Notify(notice) => {
            assert_eq!(notice.severity, Severity::Info);
            assert_eq!(notice.text, "Job started.");
        }
        other => panic!("unexpected effect: {other:?}"),
    }
    assert!(matches!(effects[1], Effect::FetchLogs { .. }));
    assert!(!state.view().run_in_flight);
}

#[test]
fn failure_notifies_without_log_refresh() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::RunNowClicked);
    let (state, _effects) = update(state, Msg::RunNowConfirmed);

    let (state, effects) = update(state, Msg::RunCompleted(Err("500".into())));

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Notify(notice) => {
            assert_eq!(notice.severity, Severity::Error);
            assert_eq!(notice.text, "Failed to trigger job.");
        }
        other => panic!("unexpected effect: {other:?}"),
    }
    // No retry; a fresh user click starts the flow over.
    assert!(!state.view().run_in_flight);
    let (_state, effects) = update(state, Msg::RunNowClicked);
    assert_eq!(effects, vec![Effect::ConfirmRunNow]);
}
