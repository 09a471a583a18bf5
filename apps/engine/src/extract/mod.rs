//! Text extraction from uploaded resume files.
//!
//! Policy: only an unrecognized extension is an error. Every mechanical
//! failure past format dispatch (unreadable file, corrupt document, decode
//! failure) degrades to empty text with a logged warning, so callers detect
//! extraction failure through a single empty-string check.

pub mod decode;
pub mod docx;
pub mod pdf;

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::errors::EngineError;

/// Supported resume file formats, matched on lower-cased extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| EngineError::UnsupportedFormat(ext.to_lowercase()))
    }
}

/// Extracts the visible text content of `path` as a single string.
pub fn extract_text(path: &Path) -> Result<String, EngineError> {
    let format = FileFormat::from_path(path)?;

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read resume file");
            return Ok(String::new());
        }
    };

    Ok(match format {
        FileFormat::Pdf => pdf::extract(&bytes),
        FileFormat::Doc | FileFormat::Docx => docx::extract(&bytes),
        FileFormat::Txt => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "resume text file is not UTF-8");
                String::new()
            }
        },
    })
}
