//! Text extraction collaborator.
//!
//! The classifier only ever sees text. Turning uploaded bytes into text is
//! delegated to an injected [`TextExtractor`], which reports up front whether
//! it can do any work at all. The built-in extractor handles textual content
//! types; OCR backends plug in through the same trait.

use async_trait::async_trait;
use std::fmt;
use tracing::{info, warn};

use crate::error::AppError;

/// Content type used when nothing better is known.
const OCTET_STREAM: &str = "application/octet-stream";

/// Whether an extractor can serve requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available => write!(f, "available"),
            Capability::Unavailable(reason) => write!(f, "unavailable: {}", reason),
        }
    }
}

/// Text pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    /// Set when the text was cut to the configured limit.
    pub truncated: bool,
}

/// Turns document bytes into text.
#[async_trait]
pub trait TextExtractor: Send + Sync + 'static {
    fn capability(&self) -> Capability;

    async fn extract(&self, bytes: &[u8], content_type: &str) -> Result<ExtractedText, AppError>;
}

/// Resolve the effective content type, sniffing the bytes when the caller
/// gave nothing useful.
pub fn resolve_content_type(bytes: &[u8], declared: &str) -> String {
    let declared = declared
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    if !declared.is_empty() && declared != OCTET_STREAM {
        return declared;
    }

    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }

    if std::str::from_utf8(bytes).is_ok() {
        "text/plain".to_string()
    } else {
        OCTET_STREAM.to_string()
    }
}

fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || matches!(
            content_type,
            "application/json" | "application/xml" | "application/x-ndjson"
        )
}

/// Extractor for textual content types
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    max_chars: usize,
}

impl PlainTextExtractor {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn capability(&self) -> Capability {
        Capability::Available
    }

    async fn extract(&self, bytes: &[u8], content_type: &str) -> Result<ExtractedText, AppError> {
        let content_type = resolve_content_type(bytes, content_type);
        info!(
            "Extracting text ({} bytes, type: {})",
            bytes.len(),
            content_type
        );

        if !is_textual(&content_type) {
            warn!("No text extraction available for {}", content_type);
            return Err(AppError::Unsupported(format!(
                "no text extraction for content type {}",
                content_type
            )));
        }

        let raw = String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Validation(format!("Invalid UTF-8 content: {}", e)))?;
        let page_count = 1 + raw.matches('\u{c}').count();
        let (text, truncated) = truncate_chars(&clean_extracted_text(&raw), self.max_chars);

        Ok(ExtractedText {
            text,
            page_count,
            truncated,
        })
    }
}

/// Stand-in used when no extraction backend is configured.
#[derive(Debug, Clone)]
pub struct UnavailableExtractor {
    reason: String,
}

impl UnavailableExtractor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextExtractor for UnavailableExtractor {
    fn capability(&self) -> Capability {
        Capability::Unavailable(self.reason.clone())
    }

    async fn extract(&self, _bytes: &[u8], _content_type: &str) -> Result<ExtractedText, AppError> {
        Err(AppError::Unsupported(format!(
            "text extraction unavailable: {}",
            self.reason
        )))
    }
}

/// Trim lines and drop blank ones
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim().trim_matches('\u{c}').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => (text[..cut].to_string(), true),
        None => (text.to_string(), false),
    }
}
