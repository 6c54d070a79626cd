use crate::state::{JobPhase, Notification};

/// Snapshot of everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub instruction_input: String,
    pub derived_file_name: String,
    pub phase: JobPhase,
    pub loading: bool,
    pub download_enabled: bool,
    pub notification: Option<Notification>,
    pub show_inline_error: bool,
    pub dirty: bool,
}
