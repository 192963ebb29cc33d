//! Shell configuration.

use std::path::PathBuf;

use crate::logging::LoggingConfig;
use crate::shell::KeyBindings;

pub const ENV_LOG_PATH: &str = "FRAMETRACE_LOG_PATH";
pub const ENV_SHUTDOWN_LOG_PATH: &str = "FRAMETRACE_SHUTDOWN_LOG_PATH";
pub const ENV_RECORD: &str = "FRAMETRACE_RECORD";

/// Shell configuration.
///
/// `frame_log_path` receives the log on the save command;
/// `shutdown_log_path` receives it once more when the window is destroyed.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub frame_log_path: PathBuf,
    pub shutdown_log_path: PathBuf,
    pub record_on_start: bool,
    pub bindings: KeyBindings,
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            frame_log_path: PathBuf::from("frame_times.csv"),
            shutdown_log_path: PathBuf::from("frame_times_final.csv"),
            record_on_start: false,
            bindings: KeyBindings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.frame_log_path = path.into();
        self
    }

    pub fn shutdown_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shutdown_log_path = path.into();
        self
    }

    pub fn record_on_start(mut self, record: bool) -> Self {
        self.record_on_start = record;
        self
    }

    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Applies `FRAMETRACE_*` overrides from the process environment.
    pub fn from_env(self) -> Self {
        self.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`. Unset or empty values leave fields alone.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(ENV_LOG_PATH) {
            self.frame_log_path = PathBuf::from(path);
        }
        if let Some(path) = get(ENV_SHUTDOWN_LOG_PATH) {
            self.shutdown_log_path = PathBuf::from(path);
        }
        if let Some(value) = get(ENV_RECORD) {
            match parse_flag(&value) {
                Some(flag) => self.record_on_start = flag,
                None => log::warn!("ignoring {ENV_RECORD}={value:?}: expected a boolean"),
            }
        }

        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
