use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use chrono::Local;
use panel_core::{FormField, FormState, Msg, Notice, PanelViewModel, Severity};

use crate::effects::ConfirmGate;
use crate::session::Presenter;

/// Terminal front-end. Owns stdin for the session: ordinary lines are
/// commands, and while a run-now confirmation is pending the next line is
/// taken as the yes/no answer.
pub struct Console {
    confirm_pending: Arc<AtomicBool>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            confirm_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn gate(&self) -> ConsoleGate {
        ConsoleGate {
            pending: self.confirm_pending.clone(),
        }
    }

    /// Spawns the stdin reader. `quit` (or EOF) flips the shutdown flag.
    pub fn spawn_reader(&self, msg_tx: mpsc::Sender<Msg>, shutdown: Arc<AtomicBool>) {
        let pending = self.confirm_pending.clone();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let trimmed = line.trim();

                if pending.swap(false, Ordering::SeqCst) {
                    let confirmed = matches!(trimmed, "y" | "Y" | "yes");
                    let msg = if confirmed {
                        Msg::RunNowConfirmed
                    } else {
                        Msg::RunNowDeclined
                    };
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    continue;
                }

                match parse_command(trimmed) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => print_help(),
                    Some(Command::Save) => {
                        if msg_tx.send(Msg::SaveClicked).is_err() {
                            break;
                        }
                    }
                    Some(Command::Run) => {
                        if msg_tx.send(Msg::RunNowClicked).is_err() {
                            break;
                        }
                    }
                    Some(Command::Refresh) => {
                        if msg_tx.send(Msg::RefreshClicked).is_err() {
                            break;
                        }
                    }
                    Some(Command::Set(field, value)) => {
                        if msg_tx.send(Msg::FieldChanged { field, value }).is_err() {
                            break;
                        }
                    }
                    None => {
                        if !trimmed.is_empty() {
                            print_help();
                        }
                    }
                }
            }
            shutdown.store(true, Ordering::SeqCst);
        });
    }
}

pub struct ConsoleGate {
    pending: Arc<AtomicBool>,
}

impl ConfirmGate for ConsoleGate {
    fn request(&self) {
        println!("Are you sure you want to run the automation job now? [y/N]");
        let _ = io::stdout().flush();
        self.pending.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Save,
    Run,
    Refresh,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "save" => Some(Command::Save),
        "run" => Some(Command::Run),
        "refresh" => Some(Command::Refresh),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (rest, ""),
            };
            parse_field(name).map(|field| Command::Set(field, value.to_string()))
        }
        _ => None,
    }
}

fn parse_field(name: &str) -> Option<FormField> {
    match name {
        "ftp_host" => Some(FormField::FtpHost),
        "ftp_port" => Some(FormField::FtpPort),
        "ftp_user" => Some(FormField::FtpUser),
        "ftp_password" => Some(FormField::FtpPassword),
        "ftp_target_dir" => Some(FormField::FtpTargetDir),
        "smtp_server" => Some(FormField::SmtpServer),
        "smtp_port" => Some(FormField::SmtpPort),
        "sender_email" => Some(FormField::SenderEmail),
        "sender_password" => Some(FormField::SenderPassword),
        "recipients" => Some(FormField::Recipients),
        "run_time" => Some(FormField::RunTime),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value>   edit a configuration field");
    println!("  save                  save the configuration to the server");
    println!("  run                   trigger the automation job now");
    println!("  refresh               fetch the latest logs immediately");
    println!("  help                  show this message");
    println!("  quit                  end the session");
    println!(
        "Fields: ftp_host ftp_port ftp_user ftp_password ftp_target_dir \
         smtp_server smtp_port sender_email sender_password recipients run_time"
    );
}

/// Prints state changes rather than repainting: the form when it changes,
/// the log view when new content lands, the busy label on transition.
pub struct ConsolePresenter {
    last: PanelViewModel,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        print_help();
        Self {
            last: PanelViewModel::default(),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn render(&mut self, view: &PanelViewModel) {
        if view.form != self.last.form {
            print_form(&view.form);
        }
        if view.save_in_flight && !self.last.save_in_flight {
            println!("Saving...");
        }
        if view.log_text != self.last.log_text {
            println!("---- logs ----");
            print!("{}", view.log_text);
            if !view.log_text.ends_with('\n') {
                println!();
            }
            println!("--------------");
        }
        self.last = view.clone();
        let _ = io::stdout().flush();
    }

    fn notify(&mut self, notice: &Notice) {
        let tag = match notice.severity {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        };
        println!("[{}] {tag}: {}", Local::now().format("%H:%M:%S"), notice.text);
        let _ = io::stdout().flush();
    }
}

fn print_form(form: &FormState) {
    println!("Configuration:");
    println!("  ftp_host        = {}", form.ftp_host);
    println!("  ftp_port        = {}", form.ftp_port);
    println!("  ftp_user        = {}", form.ftp_user);
    println!("  ftp_password    = {}", mask(&form.ftp_password));
    println!("  ftp_target_dir  = {}", form.ftp_target_dir);
    println!("  smtp_server     = {}", form.smtp_server);
    println!("  smtp_port       = {}", form.smtp_port);
    println!("  sender_email    = {}", form.sender_email);
    println!("  sender_password = {}", mask(&form.sender_password));
    println!("  recipients      = {}", form.recipients);
    println!("  run_time        = {}", form.run_time);
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "********"
    }
}
