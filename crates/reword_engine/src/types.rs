use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;

/// Result of one completion-poll attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The service has not finished the artifact yet.
    Pending,
    /// The artifact is ready; the payload is the downloadable file.
    Ready(Bytes),
}

/// Events the engine reports back to the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The poll loop for the named artifact is live.
    PollingStarted { file_name: String },
    /// A poll attempt came back with the finished artifact.
    ArtifactReady { file_name: String, bytes: Bytes },
    /// The artifact was written to disk at the given path.
    ArtifactDelivered { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service rejected submission with status {0}")]
    SubmitStatus(u16),
}
