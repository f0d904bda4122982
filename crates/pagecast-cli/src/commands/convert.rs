use pagecast_core::config::ConvertConfig;
use pagecast_core::error::ConvertError;
use pagecast_core::extraction::memory::MemorySource;
use pagecast_core::extraction::pdftotext::PdftotextExtractor;
use pagecast_core::OutputFormat;
use std::path::PathBuf;

use crate::commands::is_json;

pub async fn run(
    input_file: PathBuf,
    format: OutputFormat,
    out: Option<PathBuf>,
    config: &ConvertConfig,
) -> Result<(), ConvertError> {
    let payload = if is_json(&input_file) {
        let json = std::fs::read_to_string(&input_file)?;
        let mut source = MemorySource::from_items_json(&json)?;
        pagecast_core::convert_source(&mut source, format, config).await?
    } else {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        pagecast_core::convert_pdf(&pdf_bytes, &extractor, format, config).await?
    };

    let path = out.unwrap_or_else(|| input_file.with_extension(payload.extension));
    std::fs::write(&path, &payload.bytes)?;
    eprintln!(
        "Wrote {} bytes ({}) to {}",
        payload.bytes.len(),
        payload.mime_type,
        path.display()
    );

    Ok(())
}
