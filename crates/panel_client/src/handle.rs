use std::sync::{mpsc, Arc};
use std::thread;

use panel_logging::panel_debug;

use crate::{ApiClient, ApiError, ClientSettings, ConfigPayload, ReqwestClient};

/// Requests the panel issues against the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    LoadConfig,
    SaveConfig(ConfigPayload),
    RunNow,
    FetchLogs { seq: u64 },
}

/// Completions flowing back to the session loop. Every submitted command
/// produces exactly one event, success or failure, which is what lets busy
/// controls always re-enable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ConfigLoaded(Result<ConfigPayload, ApiError>),
    ConfigSaved(Result<(), ApiError>),
    RunCompleted(Result<String, ApiError>),
    LogsFetched {
        seq: u64,
        result: Result<Vec<String>, ApiError>,
    },
}

/// Owns a background thread with a tokio runtime; commands go in over a
/// channel, completions come back over another. Requests run concurrently
/// and are never cancelled; completion order is not guaranteed.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<(Self, mpsc::Receiver<ClientEvent>), ApiError> {
        let client = ReqwestClient::new(settings)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Runs the dispatch loop over any `ApiClient`; the seam tests use.
    pub fn with_client(client: Arc<dyn ApiClient>) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, command: ClientCommand) {
        panel_debug!("submit {}", command_name(&command));
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(
    client: &dyn ApiClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::LoadConfig => ClientEvent::ConfigLoaded(client.get_config().await),
        ClientCommand::SaveConfig(payload) => {
            ClientEvent::ConfigSaved(client.save_config(&payload).await)
        }
        ClientCommand::RunNow => ClientEvent::RunCompleted(client.run_now().await),
        ClientCommand::FetchLogs { seq } => ClientEvent::LogsFetched {
            seq,
            result: client.fetch_logs().await,
        },
    };
    let _ = event_tx.send(event);
}

fn command_name(command: &ClientCommand) -> &'static str {
    match command {
        ClientCommand::LoadConfig => "LoadConfig",
        ClientCommand::SaveConfig(_) => "SaveConfig",
        ClientCommand::RunNow => "RunNow",
        ClientCommand::FetchLogs { .. } => "FetchLogs",
    }
}
