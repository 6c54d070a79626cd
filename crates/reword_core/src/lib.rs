//! Reword core: pure job state machine and input helpers.
mod effect;
mod filename;
mod msg;
mod state;
mod update;
mod url_check;
mod view_model;

pub use effect::Effect;
pub use filename::{derive_file_name, extract_domain, ARTIFACT_EXTENSION};
pub use msg::Msg;
pub use state::{AppState, Artifact, JobPhase, JobRequest, Notification, NotificationKind};
pub use update::update;
pub use url_check::validate_url;
pub use view_model::AppViewModel;
