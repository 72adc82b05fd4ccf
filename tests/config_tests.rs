//! Tests for the configuration system.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use ivy::config::{IvyConfig, DEFAULT_BACKEND_URL};
use pretty_assertions::assert_eq;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 3] = ["IVY_BACKEND_URL", "IVY_TIMEOUT_SECS", "IVY_EXPORT_DIR"];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn from_env_with_nothing_set_uses_defaults() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let config = IvyConfig::from_env();

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.timeout, Duration::from_secs(120));
    assert_eq!(config.export_dir, PathBuf::from("exports"));
}

#[test]
fn from_env_reads_all_three_variables() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    std::env::set_var("IVY_BACKEND_URL", "http://localhost:8787");
    std::env::set_var("IVY_TIMEOUT_SECS", "30");
    std::env::set_var("IVY_EXPORT_DIR", "/tmp/ivy-docs");

    let config = IvyConfig::from_env();

    assert_eq!(config.backend_url, "http://localhost:8787");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.export_dir, PathBuf::from("/tmp/ivy-docs"));
}

#[test]
fn from_env_ignores_an_unparseable_timeout() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    std::env::set_var("IVY_TIMEOUT_SECS", "a while");

    let config = IvyConfig::from_env();
    assert_eq!(config.timeout, Duration::from_secs(120));
}
