//! Document loading for the command-line front end.
//!
//! The tokenizer itself never touches files; these loaders only turn a
//! PDF, EPUB, plain-text file or the clipboard into a string.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is empty: {0}")]
    EmptyDocument(String),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Text pulled from a document, with a `kind:location` source label.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

impl LoadedDocument {
    /// Rejects documents with nothing but whitespace in them.
    pub(crate) fn non_empty(text: String, source: String) -> Result<Self, LoadError> {
        if text.trim().is_empty() {
            return Err(LoadError::EmptyDocument(source));
        }
        Ok(Self { text, source })
    }
}

/// Loads a document, picking the loader by file extension.
pub fn load_document(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    debug!(path, ?extension, "loading document");

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        Some(ext @ ("mobi" | "azw" | "azw3" | "djvu")) => {
            Err(LoadError::UnsupportedFormat(ext.to_string()))
        }
        _ => text::load(path),
    }
}
