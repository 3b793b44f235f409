mod config;
pub mod document;

pub use config::{Config, ProfileConfig, RulesConfig, SessionConfig};
pub use document::{PlanDocument, DOCUMENT_VERSION};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/pastor-planner[-dev]/` based on PASTOR_PLANNER_ENV.
///
/// Set PASTOR_PLANNER_ENV=dev to use the development directory, or
/// PASTOR_PLANNER_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if no directory can be determined or creating it fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PASTOR_PLANNER_CONFIG_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir().ok_or(ConfigError::NoConfigDir)?.join(".config");
            let env =
                std::env::var("PASTOR_PLANNER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pastor-planner-dev")
            } else {
                base_dir.join("pastor-planner")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
