pub mod convert;
pub mod rows;
pub mod text;

use pagecast_core::error::ConvertError;
use pagecast_core::extraction::memory::MemorySource;
use pagecast_core::extraction::pdftotext::PdftotextExtractor;
use pagecast_core::extraction::{PageSource, PdfExtractor};
use std::path::Path;

/// Inputs ending in `.json` are text-item dumps; everything else is a PDF.
pub fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Open an input file as a page source.
pub async fn open_source(path: &Path) -> Result<Box<dyn PageSource>, ConvertError> {
    if is_json(path) {
        let json = std::fs::read_to_string(path)?;
        return Ok(Box::new(MemorySource::from_items_json(&json)?));
    }

    let pdf_bytes = std::fs::read(path)?;
    PdftotextExtractor::new().open(&pdf_bytes).await
}
