use std::sync::{mpsc, Arc};
use std::thread;

use panel_client::{
    ClientCommand, ClientEvent, ClientHandle, ConfigPayload, EmailSection, FtpSection,
    ScheduleSection,
};
use panel_core::{
    ConfigDocument, Effect, EmailConfig, FtpConfig, Msg, ScheduleConfig,
};
use panel_logging::panel_warn;

/// Presentation-side yes/no gate for the run-now action. `request` returns
/// immediately; the user's decision arrives later as `Msg::RunNowConfirmed`
/// or `Msg::RunNowDeclined`, keeping the session loop responsive while the
/// question is open.
pub trait ConfirmGate: Send + Sync {
    fn request(&self);
}

/// Executes IO effects against the HTTP client and pumps its completions
/// back into the session loop as messages.
pub struct EffectRunner {
    client: ClientHandle,
    gate: Arc<dyn ConfirmGate>,
}

impl EffectRunner {
    pub fn new(
        client: ClientHandle,
        events: mpsc::Receiver<ClientEvent>,
        gate: Arc<dyn ConfirmGate>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        spawn_event_pump(events, msg_tx);
        Self { client, gate }
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::LoadConfig => self.client.submit(ClientCommand::LoadConfig),
            Effect::SaveConfig(doc) => self
                .client
                .submit(ClientCommand::SaveConfig(to_wire(&doc))),
            Effect::ConfirmRunNow => self.gate.request(),
            Effect::TriggerRun => self.client.submit(ClientCommand::RunNow),
            Effect::FetchLogs { seq } => self.client.submit(ClientCommand::FetchLogs { seq }),
            Effect::Notify(_) => {
                // Rendered by the presenter; never reaches the IO runner.
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

/// Maps client completions onto core messages. Typed API errors stop here;
/// the core only sees plain messages. Log-fetch failures are noted in the
/// log and nowhere else, since the poller fires unattended.
fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::ConfigLoaded(result) => match result {
            Ok(payload) => Msg::ConfigLoaded(Ok(from_wire(payload))),
            Err(err) => {
                panel_warn!("config load failed: {err}");
                Msg::ConfigLoaded(Err(err.to_string()))
            }
        },
        ClientEvent::ConfigSaved(result) => {
            Msg::ConfigSaved(result.map_err(|err| err.to_string()))
        }
        ClientEvent::RunCompleted(result) => {
            Msg::RunCompleted(result.map_err(|err| err.to_string()))
        }
        ClientEvent::LogsFetched { seq, result } => Msg::LogsFetched {
            seq,
            result: result.map_err(|err| {
                panel_warn!("log fetch (seq {seq}) failed: {err}");
                err.to_string()
            }),
        },
    }
}

fn to_wire(doc: &ConfigDocument) -> ConfigPayload {
    ConfigPayload {
        ftp: FtpSection {
            host: doc.ftp.host.clone(),
            port: doc.ftp.port,
            user: doc.ftp.user.clone(),
            password: doc.ftp.password.clone(),
            target_dir: doc.ftp.target_dir.clone(),
        },
        email: EmailSection {
            smtp_server: doc.email.smtp_server.clone(),
            smtp_port: doc.email.smtp_port,
            sender_email: doc.email.sender_email.clone(),
            sender_password: doc.email.sender_password.clone(),
            recipients: doc.email.recipients.clone(),
        },
        schedule: ScheduleSection {
            run_time: doc.schedule.run_time.clone(),
        },
    }
}

fn from_wire(payload: ConfigPayload) -> ConfigDocument {
    ConfigDocument {
        ftp: FtpConfig {
            host: payload.ftp.host,
            port: payload.ftp.port,
            user: payload.ftp.user,
            password: payload.ftp.password,
            target_dir: payload.ftp.target_dir,
        },
        email: EmailConfig {
            smtp_server: payload.email.smtp_server,
            smtp_port: payload.email.smtp_port,
            sender_email: payload.email.sender_email,
            sender_password: payload.email.sender_password,
            recipients: payload.email.recipients,
        },
        schedule: ScheduleConfig {
            run_time: payload.schedule.run_time,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_client::{ApiError, ApiFailure};

    #[test]
    fn wire_mapping_round_trips() {
        let doc = ConfigDocument {
            ftp: FtpConfig {
                host: "ftp.example.com".to_string(),
                port: 2121,
                ..FtpConfig::default()
            },
            email: EmailConfig {
                recipients: vec!["a@x.com".to_string()],
                ..EmailConfig::default()
            },
            schedule: ScheduleConfig {
                run_time: "17:30".to_string(),
            },
        };

        assert_eq!(from_wire(to_wire(&doc)), doc);
    }

    #[test]
    fn log_fetch_failure_maps_to_silent_message() {
        let event = ClientEvent::LogsFetched {
            seq: 3,
            result: Err(ApiError {
                kind: ApiFailure::Timeout,
                message: "deadline elapsed".to_string(),
            }),
        };

        match map_event(event) {
            Msg::LogsFetched { seq, result } => {
                assert_eq!(seq, 3);
                assert!(result.unwrap_err().contains("timeout"));
            }
            other => panic!("unexpected msg: {other:?}"),
        }
    }

    #[test]
    fn run_completion_keeps_server_message() {
        let event = ClientEvent::RunCompleted(Ok("Job triggered manually".to_string()));
        assert_eq!(
            map_event(event),
            Msg::RunCompleted(Ok("Job triggered manually".to_string()))
        );
    }
}
