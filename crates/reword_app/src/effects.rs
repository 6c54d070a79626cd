use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use reword_core::{Effect, Msg};
use reword_engine::{EngineEvent, EngineHandle, ServiceSettings, TransformJob};

use crate::app::ShellMsg;

/// Bridges the pure state machine and the engine: forwards effects as engine
/// commands and engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ServiceSettings,
        download_dir: PathBuf,
        msg_tx: mpsc::Sender<ShellMsg>,
    ) -> anyhow::Result<Self> {
        let (engine, event_rx) = EngineHandle::new(settings, download_dir)?;
        spawn_event_forwarder(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CancelPolling => {
                    log::info!("Cancelling poll loop for superseded job");
                    self.engine.cancel_polling();
                }
                Effect::SubmitJob { request } => {
                    log::info!(
                        "Submitting {} as {}",
                        request.page_url,
                        request.artifact_file_name
                    );
                    self.engine.submit(TransformJob {
                        page_url: request.page_url,
                        artifact_file_name: request.artifact_file_name,
                        instruction: request.instruction,
                    });
                }
                Effect::StartPolling { file_name } => {
                    self.engine.start_polling(file_name);
                }
                Effect::DeliverArtifact { file_name, bytes } => {
                    self.engine.deliver(file_name, bytes.into());
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.cancel_polling();
    }
}

fn spawn_event_forwarder(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::PollingStarted { file_name } => Msg::PollingStarted { file_name },
                EngineEvent::ArtifactReady { file_name, bytes } => Msg::ArtifactReady {
                    file_name,
                    bytes: bytes.to_vec(),
                },
                EngineEvent::ArtifactDelivered { path } => {
                    println!("Saved to {}", path.display());
                    continue;
                }
            };
            if msg_tx.send(ShellMsg::Core(msg)).is_err() {
                return;
            }
        }
    });
}
