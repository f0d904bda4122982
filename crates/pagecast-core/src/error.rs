use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("page {page} out of range (document has {count} page(s))")]
    PageOutOfRange { page: usize, count: usize },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("invalid cell address '{0}'")]
    InvalidCellAddress(String),

    #[error("Word conversion failed: {0}")]
    WordConversion(Box<ConvertError>),

    #[error("Excel conversion failed: {0}")]
    ExcelConversion(Box<ConvertError>),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn word(self) -> Self {
        ConvertError::WordConversion(Box::new(self))
    }

    pub(crate) fn excel(self) -> Self {
        ConvertError::ExcelConversion(Box::new(self))
    }
}
