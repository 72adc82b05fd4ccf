//! Configuration (layered: CLI flags > env > defaults).

use std::path::PathBuf;
use std::time::Duration;

/// Default assistant backend endpoint.
pub const DEFAULT_BACKEND_URL: &str = "https://study-ai-backend.study-ai.workers.dev";

const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_EXPORT_DIR: &str = "exports";

/// Runtime settings for the Ivy client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvyConfig {
    pub backend_url: String,
    pub timeout: Duration,
    pub export_dir: PathBuf,
}

impl Default for IvyConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl IvyConfig {
    /// Load from environment variables (`IVY_BACKEND_URL`,
    /// `IVY_TIMEOUT_SECS`, `IVY_EXPORT_DIR`), falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(url) = std::env::var("IVY_BACKEND_URL") {
            config.backend_url = url;
        }
        if let Ok(secs) = std::env::var("IVY_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.timeout = Duration::from_secs(secs);
            }
        }
        if let Ok(dir) = std::env::var("IVY_EXPORT_DIR") {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }
}
