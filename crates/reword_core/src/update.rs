use crate::filename::derive_file_name;
use crate::state::{AppState, Artifact, JobPhase, JobRequest, Notification};
use crate::url_check::validate_url;
use crate::{Effect, Msg};

/// Display time for the "artifact ready" toast.
const SUCCESS_NOTIFICATION_MS: u64 = 10_000;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged { text, at } => {
            let derived = if text.is_empty() {
                String::new()
            } else {
                derive_file_name(&text, at)
            };
            state.set_url_input(text);
            state.set_derived_file_name(derived);
            state.mark_dirty();
            Vec::new()
        }
        Msg::InstructionChanged(text) => {
            state.set_instruction_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::TransformClicked => start_job(&mut state),
        Msg::PollingStarted { file_name } => {
            // Only the ack for the current job moves us into Polling; a late
            // ack from a cancelled loop is dropped.
            if state.phase() == JobPhase::Submitted
                && state.job_file_name() == Some(file_name.as_str())
            {
                state.set_phase(JobPhase::Polling);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ArtifactReady { file_name, bytes } => {
            let current_job = state.job_file_name() == Some(file_name.as_str());
            if state.phase().is_loading() && current_job {
                state.store_artifact(Artifact {
                    file_name,
                    bytes,
                });
                state.set_phase(JobPhase::Ready);
                state.set_notification(Notification::success(
                    "File available to download",
                    SUCCESS_NOTIFICATION_MS,
                ));
                state.mark_dirty();
            } else {
                log::warn!("Dropping artifact for stale job: {file_name}");
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.artifact() {
            Some(artifact) if state.phase().download_enabled() => {
                vec![Effect::DeliverArtifact {
                    file_name: artifact.file_name.clone(),
                    bytes: artifact.bytes.clone(),
                }]
            }
            _ => {
                // No toast for this one; the button should have been disabled.
                log::error!("Download requested but no artifact is available");
                Vec::new()
            }
        },
        Msg::NotificationDismissed => {
            state.clear_notification();
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Transform click: validate, then fire submit and the poll loop together.
/// The submit result is never awaited; completion only arrives via polling.
fn start_job(state: &mut AppState) -> Vec<Effect> {
    let had_live_loop = state.phase().is_loading();
    state.set_phase(JobPhase::Validating);

    let url = state.url_input().to_owned();
    if !validate_url(Some(url.as_str()).filter(|u| !u.is_empty())) {
        state.set_phase(JobPhase::Idle);
        state.set_inline_error(true);
        state.set_notification(Notification::error("Could not validate URL"));
        state.mark_dirty();
        // Leaving the loading phase stops any loop that was still running.
        return if had_live_loop {
            vec![Effect::CancelPolling]
        } else {
            Vec::new()
        };
    }

    // A new submission invalidates whatever the previous job produced or was
    // still waiting for.
    state.discard_artifact();
    state.set_inline_error(false);
    let file_name = state.freeze_job_file_name();
    state.set_phase(JobPhase::Submitted);
    state.mark_dirty();

    let instruction = Some(state.instruction_input().to_owned()).filter(|s| !s.is_empty());

    let mut effects = Vec::with_capacity(3);
    if had_live_loop {
        effects.push(Effect::CancelPolling);
    }
    effects.push(Effect::SubmitJob {
        request: JobRequest {
            page_url: url,
            artifact_file_name: file_name.clone(),
            instruction,
        },
    });
    effects.push(Effect::StartPolling { file_name });
    effects
}
