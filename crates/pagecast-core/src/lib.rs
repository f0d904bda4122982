pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod layout;
pub mod output;
pub mod tabular;

use chrono::{DateTime, Utc};

use config::ConvertConfig;
use document::ReconstructedDocument;
use error::ConvertError;
use extraction::{PageSource, PdfExtractor};
use layout::lines::reconstruct_page_text;
use layout::rows::{extract_page_rows, Row};
use layout::LayoutOptions;
use output::Payload;
use tabular::report::{encode_report_csv, parse_marked_text, report_sheet};
use tabular::structured::encode_structured_csv;

/// Which payload a conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Reading-order text as RTF.
    Word,
    /// Grouped rows under the fixed `Page, Column 1..5` header.
    Excel,
    /// Classified lines with a metadata preamble.
    ExcelReport,
}

/// Reconstruct reading-order text for every page, in page order.
///
/// Pages are fetched one at a time; the first failing page aborts the whole
/// document.
pub async fn reconstruct_document(
    source: &mut dyn PageSource,
    options: &LayoutOptions,
) -> Result<ReconstructedDocument, ConvertError> {
    let page_count = source.page_count();
    tracing::debug!(page_count, "reconstructing text");

    let mut document = ReconstructedDocument::default();
    for page_number in 1..=page_count {
        let fragments = source.page_fragments(page_number).await?;
        tracing::debug!(page_number, fragments = fragments.len(), "page text");
        document.push_page(page_number, reconstruct_page_text(fragments, options));
    }

    Ok(document)
}

/// Group every page's fragments into page-tagged rows, in page order.
pub async fn extract_rows(
    source: &mut dyn PageSource,
    options: &LayoutOptions,
) -> Result<Vec<Row>, ConvertError> {
    let page_count = source.page_count();
    tracing::debug!(page_count, "extracting rows");

    let mut rows = Vec::new();
    for page_number in 1..=page_count {
        let fragments = source.page_fragments(page_number).await?;
        let page_rows = extract_page_rows(page_number, fragments, options);
        tracing::debug!(page_number, rows = page_rows.len(), "page rows");
        rows.extend(page_rows);
    }

    Ok(rows)
}

/// Convert a page source to an RTF word-processor payload.
pub async fn convert_to_word(
    source: &mut dyn PageSource,
    config: &ConvertConfig,
) -> Result<Payload, ConvertError> {
    let document = reconstruct_document(source, &config.layout)
        .await
        .map_err(ConvertError::word)?;
    Ok(Payload::word(output::rtf::render_rtf(&document)))
}

/// Convert a page source to the structured row CSV.
pub async fn convert_to_excel(
    source: &mut dyn PageSource,
    config: &ConvertConfig,
) -> Result<Payload, ConvertError> {
    let rows = extract_rows(source, &config.layout)
        .await
        .map_err(ConvertError::excel)?;
    let csv = encode_structured_csv(&rows).map_err(ConvertError::excel)?;
    Ok(Payload::spreadsheet(csv))
}

/// Convert a page source to the classified line report.
///
/// The report is built by re-reading the marked reconstructed text, so page
/// boundaries come from the page marker lines.
pub async fn convert_to_excel_report(
    source: &mut dyn PageSource,
    config: &ConvertConfig,
    created_at: DateTime<Utc>,
) -> Result<Payload, ConvertError> {
    let document = reconstruct_document(source, &config.layout)
        .await
        .map_err(ConvertError::excel)?;
    let lines = parse_marked_text(&document.to_marked_text());
    let sheet = report_sheet(&lines);
    let csv = encode_report_csv(&sheet, &config.report, created_at).map_err(ConvertError::excel)?;
    Ok(Payload::spreadsheet(csv))
}

/// Convert an already opened page source to `format`.
///
/// Report payloads are stamped with the current time.
pub async fn convert_source(
    source: &mut dyn PageSource,
    format: OutputFormat,
    config: &ConvertConfig,
) -> Result<Payload, ConvertError> {
    match format {
        OutputFormat::Word => convert_to_word(source, config).await,
        OutputFormat::Excel => convert_to_excel(source, config).await,
        OutputFormat::ExcelReport => convert_to_excel_report(source, config, Utc::now()).await,
    }
}

/// Main API entry point: open a PDF with `extractor` and convert it.
pub async fn convert_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    format: OutputFormat,
    config: &ConvertConfig,
) -> Result<Payload, ConvertError> {
    tracing::info!(backend = extractor.backend_name(), ?format, "converting PDF");

    let mut source = match extractor.open(pdf_bytes).await {
        Ok(source) => source,
        Err(e) if format == OutputFormat::Word => return Err(e.word()),
        Err(e) => return Err(e.excel()),
    };

    convert_source(source.as_mut(), format, config).await
}
