use std::sync::{mpsc, Arc};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::api::TransformApi;
use crate::types::{EngineEvent, PollOutcome};

/// Fixed-interval completion poll for one artifact.
///
/// The first attempt fires after one full interval, and each attempt is
/// awaited before the next sleep starts, so at most one request is ever
/// outstanding. The loop ends on the first ready answer or on cancellation;
/// a cancelled loop emits nothing, even when a response is already in hand.
pub async fn run_poll_loop(
    api: Arc<dyn TransformApi>,
    file_name: String,
    interval: Duration,
    token: CancellationToken,
    events: mpsc::Sender<EngineEvent>,
) {
    let _ = events.send(EngineEvent::PollingStarted {
        file_name: file_name.clone(),
    });

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::info!("Poll loop for {file_name} cancelled");
                return;
            }
            _ = tokio::time::sleep(interval) => {}
        }

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::info!("Poll loop for {file_name} cancelled mid-request");
                return;
            }
            outcome = api.poll_artifact(&file_name) => outcome,
        };
        if token.is_cancelled() {
            return;
        }

        match outcome {
            Ok(PollOutcome::Ready(bytes)) => {
                log::info!("Artifact {file_name} is ready ({} bytes)", bytes.len());
                let _ = events.send(EngineEvent::ArtifactReady { file_name, bytes });
                return;
            }
            Ok(PollOutcome::Pending) => {
                log::debug!("Artifact {file_name} not ready yet");
            }
            // Transient transport trouble is indistinguishable from "still
            // processing" here; keep polling.
            Err(err) => {
                log::warn!("Poll attempt for {file_name} failed: {err}");
            }
        }
    }
}
