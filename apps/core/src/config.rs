//! Runtime configuration.
//!
//! Read from the process environment, after an optional `.env` file has been
//! loaded by the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::models::DEFAULT_MAX_TAGS;

pub const MODEL_PATH_ENV: &str = "MODEL_PATH";
pub const DEFAULT_MAX_TAGS_ENV: &str = "ECM_ML_DEFAULT_MAX_TAGS";
pub const EXTRACT_MAX_CHARS_ENV: &str = "ECM_ML_EXTRACT_MAX_CHARS";
pub const LOG_FILTER_ENV: &str = "ECM_ML_LOG";

const DEFAULT_EXTRACT_MAX_CHARS: usize = 100_000;
const DEFAULT_LOG_FILTER: &str = "info";

/// Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Where the trained model is persisted.
    pub model_path: PathBuf,
    /// Tag count used when a request omits one.
    #[validate(range(min = 1, max = 20))]
    pub default_max_tags: usize,
    /// Longest text the built-in extractor returns.
    #[validate(range(min = 1))]
    pub extract_max_chars: usize,
    /// Default `tracing` filter directive; `RUST_LOG` wins when set.
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PortablePathManager::default_model_path(),
            default_max_tags: DEFAULT_MAX_TAGS,
            extract_max_chars: DEFAULT_EXTRACT_MAX_CHARS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            model_path: env_string(MODEL_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            default_max_tags: env_parse(DEFAULT_MAX_TAGS_ENV)?
                .unwrap_or(defaults.default_max_tags),
            extract_max_chars: env_parse(EXTRACT_MAX_CHARS_ENV)?
                .unwrap_or(defaults.extract_max_chars),
            log_filter: env_string(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
        };

        config.validate()?;
        Ok(config)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::Config(format!("{} = {:?}: {}", key, raw, e)))
        })
        .transpose()
}
