use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box. Carries the wall-clock time so the
    /// derived artifact filename can be recomputed without IO in `update`.
    UrlInputChanged { text: String, at: DateTime<Utc> },
    /// User edited the free-text instruction field.
    InstructionChanged(String),
    /// User clicked Transform.
    TransformClicked,
    /// Engine acknowledgement that the poll loop for the current job is live.
    PollingStarted { file_name: String },
    /// Poller retrieved the finished artifact.
    ArtifactReady { file_name: String, bytes: Vec<u8> },
    /// User clicked Download.
    DownloadClicked,
    /// User (or a timer) dismissed the visible notification.
    NotificationDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
