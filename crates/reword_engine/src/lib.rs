//! Reword engine: service IO and effect execution.
mod api;
mod config;
mod deliver;
mod engine;
mod poll;
mod types;

pub use api::{HttpTransformApi, TransformApi, TransformJob};
pub use config::{ServiceSettings, HOSTED_SERVICE_URL, LOCAL_SERVICE_URL};
pub use deliver::{ensure_download_dir, ArtifactWriter, DeliverError};
pub use engine::EngineHandle;
pub use poll::run_poll_loop;
pub use types::{ApiError, EngineEvent, PollOutcome};
