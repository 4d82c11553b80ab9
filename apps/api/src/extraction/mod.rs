//! Text extraction — turns an uploaded document into plain text.
//!
//! Scoring never touches a parsing library directly: it only sees the
//! `TextExtractor` trait. `AppState` carries an `Arc<dyn TextExtractor>`,
//! `DocumentExtractor` being the default backend.

pub mod docx;
pub mod pdf;

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Detects the format from the final extension of a file name, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("docx") => Ok(DocumentFormat::Docx),
            Some("pdf") => Ok(DocumentFormat::Pdf),
            _ => Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read {format} document: {reason}")]
    Parse {
        format: DocumentFormat,
        reason: String,
    },
}

/// Capability interface over the document parsing backends.
/// Implement this to swap parsers without touching the compliance checks.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        bytes: Bytes,
        format: DocumentFormat,
    ) -> Result<String, ExtractionError>;
}

/// Default backend: `pdf-extract` for PDF, `docx-rs` for Word.
///
/// Parsing is CPU-bound and runs on the blocking pool. A panic inside a
/// parsing library is reported as a parse error for that upload only.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract_text(
        &self,
        bytes: Bytes,
        format: DocumentFormat,
    ) -> Result<String, ExtractionError> {
        debug!("Extracting {format} text from {} bytes", bytes.len());

        let result = tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => pdf::extract_text(&bytes),
            DocumentFormat::Docx => docx::extract_text(&bytes),
        })
        .await
        .map_err(|join_err| {
            warn!("{format} parser aborted: {join_err}");
            ExtractionError::Parse {
                format,
                reason: "the document parser crashed on this file".to_string(),
            }
        })?;

        result.map_err(|reason| ExtractionError::Parse { format, reason })
    }
}
