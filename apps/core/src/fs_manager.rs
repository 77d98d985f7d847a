use std::path::PathBuf;
use tracing::error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ECM_ML_DATA_DIR";

/// Default file name of the persisted model.
pub const MODEL_FILENAME: &str = "model.json";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Application root: the directory holding the executable.
    pub fn root_dir() -> PathBuf {
        match std::env::current_exe() {
            Ok(mut path) => {
                path.pop(); // drop the executable name
                path
            }
            Err(e) => {
                error!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Data directory (`./data`, or `ECM_ML_DATA_DIR` when set).
    pub fn data_dir() -> PathBuf {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => Self::root_dir().join("data"),
        }
    }

    /// Models directory (`<data>/models`).
    pub fn models_dir() -> PathBuf {
        Self::data_dir().join("models")
    }

    /// Default model location (`<data>/models/model.json`).
    pub fn default_model_path() -> PathBuf {
        Self::models_dir().join(MODEL_FILENAME)
    }
}
