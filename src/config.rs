// src/config.rs

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::{
    DEFAULT_INPUT_EXTENSION, DEFAULT_LOG_SUBPATH, DEFAULT_OUTPUT_SUBDIR, LOG_DIR_ENV_VAR,
};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime configuration, fixed at process start.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory scanned when no `--dir` is given.
    pub default_log_dir: PathBuf,
    /// Extension (without dot) of the log files to pick from.
    pub input_extension: String,
    /// Name of the chart directory created next to the input log.
    pub output_subdir: String,
}

impl AppConfig {
    /// Builds the configuration from the environment.
    /// `POSLOG_LOG_DIR` overrides the default log directory when set and non-empty.
    pub fn from_env() -> Self {
        let override_dir = std::env::var_os(LOG_DIR_ENV_VAR).filter(|v| !v.is_empty());
        Self::with_log_dir_override(override_dir.map(PathBuf::from))
    }

    pub fn with_log_dir_override(log_dir: Option<PathBuf>) -> Self {
        let default_log_dir = match log_dir {
            Some(dir) => expand_home(&dir),
            None => default_log_dir(),
        };
        Self {
            default_log_dir,
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_log_dir_override(None)
    }
}

/// Initializes the process-wide configuration from the environment.
/// Later calls return the already stored value.
pub fn init() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

/// Returns the process-wide configuration, initializing it on first use.
pub fn get() -> &'static AppConfig {
    init()
}

fn default_log_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    DEFAULT_LOG_SUBPATH
        .iter()
        .fold(home, |dir, part| dir.join(part))
}

/// Expands a leading `~` to the user's home directory. Other paths are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}


// src/config.rs
