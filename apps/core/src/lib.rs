//! ECM document classification core.
//!
//! Classifies document text into categories and suggests keyword tags.
//! A trained keyword model is used when one is loaded; otherwise a fixed
//! lexicon supplies coarse priors.

pub mod actors;
pub mod brain;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod service;
pub mod state;
pub mod store;
pub mod text_extract;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::AppError;
pub use service::ClassifierService;
