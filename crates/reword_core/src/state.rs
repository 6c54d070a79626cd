use crate::view_model::AppViewModel;

/// Lifecycle of the single in-flight job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    Validating,
    Submitted,
    Polling,
    Ready,
    Failed,
}

impl JobPhase {
    /// The download action is available only once an artifact has arrived.
    pub fn download_enabled(self) -> bool {
        matches!(self, JobPhase::Ready)
    }

    /// True while a poll loop is (or is about to be) live for this job.
    pub fn is_loading(self) -> bool {
        matches!(self, JobPhase::Submitted | JobPhase::Polling)
    }
}

/// Everything the service needs to start one transform job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub page_url: String,
    pub artifact_file_name: String,
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user-facing feedback. A superseding notification replaces the
/// previous one regardless of any remaining display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub kind: NotificationKind,
    pub duration_ms: Option<u64>,
}

impl Notification {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NotificationKind::Error,
            duration_ms: None,
        }
    }

    pub fn success(title: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            kind: NotificationKind::Success,
            duration_ms: Some(duration_ms),
        }
    }
}

/// The completed binary result, held until delivery or the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    instruction_input: String,
    /// Recomputed on every URL edit; always reflects the current URL field.
    derived_file_name: String,
    /// Frozen copy of `derived_file_name` taken at submission time. The
    /// submit request and every poll must use this exact value.
    job_file_name: Option<String>,
    phase: JobPhase,
    artifact: Option<Artifact>,
    notification: Option<Notification>,
    show_inline_error: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            instruction_input: self.instruction_input.clone(),
            derived_file_name: self.derived_file_name.clone(),
            phase: self.phase,
            loading: self.phase.is_loading(),
            download_enabled: self.phase.download_enabled(),
            notification: self.notification.clone(),
            show_inline_error: self.show_inline_error,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn job_file_name(&self) -> Option<&str> {
        self.job_file_name.as_deref()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn instruction_input(&self) -> &str {
        &self.instruction_input
    }

    pub(crate) fn derived_file_name(&self) -> &str {
        &self.derived_file_name
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        self.url_input = text;
    }

    pub(crate) fn set_instruction_input(&mut self, text: String) {
        self.instruction_input = text;
    }

    pub(crate) fn set_derived_file_name(&mut self, name: String) {
        self.derived_file_name = name;
    }

    pub(crate) fn set_phase(&mut self, phase: JobPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub(crate) fn set_inline_error(&mut self, visible: bool) {
        self.show_inline_error = visible;
    }

    pub(crate) fn freeze_job_file_name(&mut self) -> String {
        self.job_file_name = Some(self.derived_file_name.clone());
        self.derived_file_name.clone()
    }

    pub(crate) fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub(crate) fn store_artifact(&mut self, artifact: Artifact) {
        self.artifact = Some(artifact);
    }

    pub(crate) fn discard_artifact(&mut self) {
        self.artifact = None;
    }
}
