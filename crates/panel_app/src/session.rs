use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use panel_core::{update, AppState, Effect, Msg, Notice, PanelViewModel};

use crate::effects::EffectRunner;

/// Renders view-model snapshots and notices. The console implements this;
/// tests can use a recording stand-in.
pub trait Presenter {
    fn render(&mut self, view: &PanelViewModel);
    fn notify(&mut self, notice: &Notice);
}

/// Owns the state machine for one session and drives it from the shared
/// message channel. Everything user-visible flows out through the
/// presenter; everything IO flows out through the effect runner.
pub struct Session<P: Presenter> {
    state: AppState,
    runner: EffectRunner,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    pub fn new(runner: EffectRunner, presenter: P) -> Self {
        Self {
            state: AppState::new(),
            runner,
            presenter,
        }
    }

    /// Applies one message and executes whatever it produced.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::Notify(notice) => self.presenter.notify(&notice),
                other => self.runner.run(other),
            }
        }

        if self.state.consume_dirty() {
            self.presenter.render(&self.state.view());
        }
    }

    /// Runs until the shutdown flag flips or every sender hangs up.
    pub fn run_loop(&mut self, msg_rx: &mpsc::Receiver<Msg>, shutdown: &AtomicBool) {
        self.dispatch(Msg::SessionStarted);
        while !shutdown.load(Ordering::SeqCst) {
            match msg_rx.recv_timeout(Duration::from_millis(200)) {
                Ok(msg) => self.dispatch(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}
