use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use chrono::Utc;
use reword_core::{update, AppState, Msg};
use reword_engine::ServiceSettings;

use crate::effects::EffectRunner;
use crate::render;

/// Messages the shell's dispatch loop handles: core state-machine messages
/// plus the two commands that only concern the terminal itself.
pub enum ShellMsg {
    Core(Msg),
    ShowStatus,
    Quit,
}

pub fn run() -> anyhow::Result<()> {
    let settings = ServiceSettings::from_env();
    log::info!("Using transform service at {}", settings.base_url);

    let download_dir = std::env::current_dir()?.join("downloads");
    let (msg_tx, msg_rx) = mpsc::channel::<ShellMsg>();
    let runner = EffectRunner::new(settings, download_dir, msg_tx.clone())?;

    spawn_stdin_reader(msg_tx);
    render::print_banner();

    let mut state = AppState::new();
    while let Ok(shell_msg) = msg_rx.recv() {
        match shell_msg {
            ShellMsg::Quit => break,
            ShellMsg::ShowStatus => render::render(&state.view()),
            ShellMsg::Core(msg) => {
                let (mut next, effects) = update(std::mem::take(&mut state), msg);
                runner.run(effects);
                if next.consume_dirty() {
                    render::render(&next.view());
                }
                state = next;
            }
        }
    }

    // Make teardown of the poll loop explicit instead of relying on drops.
    runner.shutdown();
    Ok(())
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(line.trim()) {
                Some(shell_msg) => {
                    let quitting = matches!(shell_msg, ShellMsg::Quit);
                    if msg_tx.send(shell_msg).is_err() || quitting {
                        return;
                    }
                }
                None => render::print_help(),
            }
        }
        // EOF behaves like quit.
        let _ = msg_tx.send(ShellMsg::Quit);
    });
}

fn parse_command(line: &str) -> Option<ShellMsg> {
    if line.is_empty() {
        return Some(ShellMsg::ShowStatus);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let msg = match command {
        "url" => ShellMsg::Core(Msg::UrlInputChanged {
            text: rest.to_string(),
            at: Utc::now(),
        }),
        "prompt" => ShellMsg::Core(Msg::InstructionChanged(rest.to_string())),
        "transform" => ShellMsg::Core(Msg::TransformClicked),
        "download" => ShellMsg::Core(Msg::DownloadClicked),
        "dismiss" => ShellMsg::Core(Msg::NotificationDismissed),
        "status" => ShellMsg::ShowStatus,
        "quit" | "exit" => ShellMsg::Quit,
        _ => return None,
    };
    Some(msg)
}
