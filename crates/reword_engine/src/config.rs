use std::time::Duration;

/// Service address used while developing against a local backend.
pub const LOCAL_SERVICE_URL: &str = "http://localhost:3000";
/// Hosted production backend.
pub const HOSTED_SERVICE_URL: &str = "https://scrapergpt-backend-b088310f8268.herokuapp.com";

/// Environment variable selecting the deployment target.
const ENV_FLAG: &str = "REWORD_ENV";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Fixed spacing between completion polls.
    pub poll_interval: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: HOSTED_SERVICE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(15),
        }
    }
}

impl ServiceSettings {
    /// Picks the base URL from the deployment flag: `REWORD_ENV=development`
    /// targets the local backend, anything else the hosted one.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(ENV_FLAG).as_deref() {
            Ok("development") => LOCAL_SERVICE_URL.to_string(),
            _ => HOSTED_SERVICE_URL.to_string(),
        };
        Self {
            base_url,
            ..Self::default()
        }
    }
}
