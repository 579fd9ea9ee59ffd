mod console;
mod effects;
mod logging;
mod session;

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use panel_client::{ClientHandle, ClientSettings, PollerHandle, DEFAULT_POLL_INTERVAL};
use panel_core::Msg;
use panel_logging::{panel_error, panel_info};

use console::{Console, ConsolePresenter};
use effects::EffectRunner;
use session::Session;

fn main() {
    logging::initialize(logging::LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| ClientSettings::default().base_url);
    panel_info!("panel starting against {base_url}");

    let (client, client_events) = match ClientHandle::new(ClientSettings::new(base_url)) {
        Ok(pair) => pair,
        Err(err) => {
            panel_error!("failed to build HTTP client: {err}");
            eprintln!("failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let shutdown = Arc::new(AtomicBool::new(false));

    let console = Console::new();
    let runner = EffectRunner::new(
        client,
        client_events,
        Arc::new(console.gate()),
        msg_tx.clone(),
    );
    console.spawn_reader(msg_tx.clone(), shutdown.clone());

    let tick_tx = msg_tx.clone();
    let mut poller = PollerHandle::start(DEFAULT_POLL_INTERVAL, move || {
        let _ = tick_tx.send(Msg::PollTick);
    });

    let mut session = Session::new(runner, ConsolePresenter::new());
    session.run_loop(&msg_rx, &shutdown);

    // Session over: tear the timer down so nothing leaks past it.
    poller.stop();
    panel_info!("panel session ended");
}
