use crate::state::JobRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any live poll loop before a new job takes over.
    CancelPolling,
    /// Fire the transform request at the service; the result is not awaited
    /// by the state machine.
    SubmitJob { request: JobRequest },
    /// Start the fixed-interval completion poll for the named artifact.
    StartPolling { file_name: String },
    /// Write the completed artifact to disk under its frozen filename.
    DeliverArtifact { file_name: String, bytes: Vec<u8> },
}
