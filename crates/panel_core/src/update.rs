use crate::{AppState, Effect, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            // Leaves first: config load and the initial log fetch are issued
            // together and complete independently.
            let seq = state.next_fetch_seq();
            vec![Effect::LoadConfig, Effect::FetchLogs { seq }]
        }
        Msg::FieldChanged { field, value } => {
            state.form_mut().set(field, value);
            Vec::new()
        }
        Msg::SaveClicked => {
            if state.save_in_flight() {
                // Repeated click while a save is outstanding; the control is
                // disabled, but the guard holds even if a click slips through.
                Vec::new()
            } else {
                state.begin_save();
                let doc = state.form().document();
                vec![Effect::SaveConfig(doc)]
            }
        }
        Msg::ConfigLoaded(Ok(doc)) => {
            state.form_mut().apply_document(&doc);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ConfigLoaded(Err(_)) => {
            // Form stays as-is; the user can still fill it in and save.
            vec![Effect::Notify(Notice::error("Failed to load configuration."))]
        }
        Msg::ConfigSaved(result) => {
            state.finish_save();
            let notice = match result {
                Ok(()) => Notice::info("Configuration saved successfully!"),
                Err(_) => Notice::error("Failed to save configuration."),
            };
            vec![Effect::Notify(notice)]
        }
        Msg::RunNowClicked => {
            if state.run_in_flight() {
                Vec::new()
            } else {
                vec![Effect::ConfirmRunNow]
            }
        }
        Msg::RunNowDeclined => Vec::new(),
        Msg::RunNowConfirmed => {
            if state.run_in_flight() {
                Vec::new()
            } else {
                state.begin_run();
                vec![Effect::TriggerRun]
            }
        }
        Msg::RunCompleted(result) => {
            state.finish_run();
            match result {
                Ok(message) => {
                    // Out-of-cycle refresh so the operator sees the run's
                    // effect without waiting for the next tick.
                    let seq = state.next_fetch_seq();
                    vec![
                        Effect::Notify(Notice::info(message)),
                        Effect::FetchLogs { seq },
                    ]
                }
                Err(_) => vec![Effect::Notify(Notice::error("Failed to trigger job."))],
            }
        }
        Msg::PollTick | Msg::RefreshClicked => {
            let seq = state.next_fetch_seq();
            vec![Effect::FetchLogs { seq }]
        }
        Msg::LogsFetched { seq, result } => {
            if let Ok(lines) = result {
                state.render_logs(seq, &lines);
            }
            // Failures keep the previously rendered content; this runs
            // unattended on a timer, so nothing is surfaced to the user.
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
