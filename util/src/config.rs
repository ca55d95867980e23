//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use scorer::PolicyKind;
use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

pub const DEFAULT_HISTORY_LIMIT: u64 = 10;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub scoring_policy: PolicyKind,
    /// Default cap for history reads. `None` returns every stored check.
    pub history_limit: Option<u64>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Parses a history cap. `0`, `none`, `all` and the empty string mean unbounded.
pub fn parse_history_limit(raw: &str) -> Result<Option<u64>, std::num::ParseIntError> {
    match raw.trim().to_lowercase().as_str() {
        "" | "none" | "all" | "0" => Ok(None),
        other => other.parse::<u64>().map(Some),
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let history_limit = match env::var("HISTORY_LIMIT") {
            Ok(raw) => parse_history_limit(&raw).unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid HISTORY_LIMIT, using default");
                Some(DEFAULT_HISTORY_LIMIT)
            }),
            Err(_) => Some(DEFAULT_HISTORY_LIMIT),
        };

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "malaria-guard".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,services=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/malaria_guard.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or("PORT", 5000),
            scoring_policy: parse_or("SCORING_POLICY", PolicyKind::default()),
            history_limit,
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_scoring_policy(value: PolicyKind) {
        AppConfig::set_field(|cfg| cfg.scoring_policy = value);
    }

    pub fn set_history_limit(value: Option<u64>) {
        AppConfig::set_field(|cfg| cfg.history_limit = value);
    }
}

// --- Free accessors ---

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn scoring_policy() -> PolicyKind {
    AppConfig::global().scoring_policy
}

pub fn history_limit() -> Option<u64> {
    AppConfig::global().history_limit
}
