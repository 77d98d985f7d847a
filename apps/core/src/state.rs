//! Shared model handle.
//!
//! Readers take an `Arc` snapshot and never see a half-built model; writers
//! replace the whole pointer.

use std::sync::{Arc, PoisonError, RwLock};

use crate::brain::KeywordModel;

/// Process-wide, swappable keyword model.
#[derive(Debug, Clone, Default)]
pub struct SharedModel {
    inner: Arc<RwLock<Option<Arc<KeywordModel>>>>,
}

impl SharedModel {
    pub fn new(initial: Option<KeywordModel>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial.map(Arc::new))),
        }
    }

    /// The model current at call time.
    pub fn snapshot(&self) -> Option<Arc<KeywordModel>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new model, returning the one it replaced.
    pub fn replace(&self, model: Arc<KeywordModel>) -> Option<Arc<KeywordModel>> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(model)
    }
}
