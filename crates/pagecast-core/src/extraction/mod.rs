pub mod memory;
pub mod pdftotext;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// One positioned text run on a page.
///
/// `(x, y)` is the baseline origin in page space with `y` increasing upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Fragment {
            text: text.into(),
            x,
            y,
            width: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Build a fragment from a raw text item, reading x and y from the
    /// translation part of its transform.
    pub fn from_item(item: &TextItem) -> Self {
        Fragment {
            text: item.str.clone(),
            x: item.transform[4],
            y: item.transform[5],
            width: item.width,
        }
    }

    /// Estimated right edge; a missing width counts as zero.
    pub fn right_edge(&self) -> f64 {
        self.x + self.width.unwrap_or(0.0)
    }
}

/// A text item as handed over by a document-parsing backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub str: String,
    pub transform: [f64; 6],
    #[serde(default)]
    pub width: Option<f64>,
}

impl From<TextItem> for Fragment {
    fn from(item: TextItem) -> Self {
        Fragment::from_item(&item)
    }
}

/// An opened document that yields fragments one page at a time.
///
/// Page numbers are 1-based. Fetching a page may suspend the caller; the
/// pipelines never request two pages concurrently.
#[async_trait]
pub trait PageSource: Send {
    fn page_count(&self) -> usize;

    async fn page_fragments(&mut self, page_number: usize) -> Result<Vec<Fragment>, ConvertError>;
}

/// Trait for PDF text extraction backends.
#[async_trait]
pub trait PdfExtractor: Send + Sync {
    /// Open PDF bytes as a page source.
    async fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PageSource>, ConvertError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
