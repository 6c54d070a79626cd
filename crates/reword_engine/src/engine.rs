use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::api::{HttpTransformApi, TransformApi, TransformJob};
use crate::config::ServiceSettings;
use crate::deliver::ArtifactWriter;
use crate::poll::run_poll_loop;
use crate::types::{ApiError, EngineEvent};

enum EngineCommand {
    Submit { job: TransformJob },
    StartPolling { file_name: String },
    CancelPolling,
    Deliver { file_name: String, bytes: Bytes },
}

/// Handle to the engine thread. Commands go in over a channel; events come
/// back on the receiver returned by [`EngineHandle::new`]. At most one poll
/// loop is live at a time: starting a new one cancels its predecessor, and
/// dropping the handle cancels whatever is still running.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ServiceSettings,
        download_dir: PathBuf,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api: Arc<dyn TransformApi> = Arc::new(HttpTransformApi::new(settings.clone())?);
        let poll_interval = settings.poll_interval;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let writer = ArtifactWriter::new(download_dir);
            let mut poll_token: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Submit { job } => {
                        let api = api.clone();
                        runtime.spawn(async move {
                            // Fire and forget: polling discovers completion,
                            // so a failed submit only gets logged.
                            if let Err(err) = api.submit(&job).await {
                                log::error!("Submission for {} failed: {err}", job.page_url);
                            }
                        });
                    }
                    EngineCommand::StartPolling { file_name } => {
                        if let Some(previous) = poll_token.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        poll_token = Some(token.clone());
                        runtime.spawn(run_poll_loop(
                            api.clone(),
                            file_name,
                            poll_interval,
                            token,
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::CancelPolling => {
                        if let Some(token) = poll_token.take() {
                            token.cancel();
                        }
                    }
                    EngineCommand::Deliver { file_name, bytes } => {
                        match writer.write(&file_name, &bytes) {
                            Ok(path) => {
                                log::info!("Artifact saved to {}", path.display());
                                let _ = event_tx.send(EngineEvent::ArtifactDelivered { path });
                            }
                            Err(err) => {
                                log::error!("Could not save artifact {file_name}: {err}");
                            }
                        }
                    }
                }
            }

            // Command sender gone: tear down without leaving an orphaned loop.
            if let Some(token) = poll_token.take() {
                token.cancel();
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn submit(&self, job: TransformJob) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { job });
    }

    pub fn start_polling(&self, file_name: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::StartPolling {
            file_name: file_name.into(),
        });
    }

    pub fn cancel_polling(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelPolling);
    }

    pub fn deliver(&self, file_name: impl Into<String>, bytes: Bytes) {
        let _ = self.cmd_tx.send(EngineCommand::Deliver {
            file_name: file_name.into(),
            bytes,
        });
    }
}
