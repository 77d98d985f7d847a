//! Durable storage for the keyword model.
//!
//! The model is written as JSON to a temporary file next to the target and
//! renamed into place, so a crash never leaves a half-written model behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::brain::keyword_model::MODEL_VERSION;
use crate::brain::KeywordModel;
use crate::error::AppError;

/// Reads and writes the model file at a fixed location.
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted model.
    ///
    /// A missing file is `Ok(None)`; unreadable or invalid content is an error.
    pub fn load(&self) -> Result<Option<KeywordModel>, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        let model: KeywordModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AppError::Persistence(format!("corrupt model file: {}", e)))?;
        if model.version != MODEL_VERSION {
            return Err(AppError::Persistence(format!(
                "unsupported model version {:?}, expected {:?}",
                model.version, MODEL_VERSION
            )));
        }
        model
            .keywords
            .validate()
            .map_err(|e| AppError::Persistence(format!("invalid model file: {}", e)))?;

        Ok(Some(model))
    }

    /// Load the model, treating any failure as "no model".
    pub fn load_or_none(&self) -> Option<KeywordModel> {
        match self.load() {
            Ok(Some(model)) => {
                info!(
                    path = ?self.path,
                    version = %model.version,
                    samples = model.trained_samples,
                    categories = model.keywords.len(),
                    "Model loaded successfully"
                );
                Some(model)
            }
            Ok(None) => {
                info!(path = ?self.path, "No model found, will need training");
                None
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Error loading model, starting without one");
                None
            }
        }
    }

    /// Atomically replace the model file.
    pub fn save(&self, model: &KeywordModel) -> Result<(), AppError> {
        let parent_dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, model)
                .map_err(|e| AppError::Persistence(format!("failed to encode model: {}", e)))?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| AppError::Io(e.error))?;

        info!(path = ?self.path, "Model persisted");
        Ok(())
    }
}
