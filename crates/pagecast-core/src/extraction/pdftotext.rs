use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use tokio::process::Command;

use crate::error::ConvertError;
use crate::extraction::memory::MemorySource;
use crate::extraction::{Fragment, PageSource, PdfExtractor};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox` to get one box per word, then flips the top-down
/// box coordinates into bottom-up baseline fragments.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        std::process::Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfExtractor for PdftotextExtractor {
    async fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PageSource>, ConvertError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ConvertError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| ConvertError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox")
            .arg(tmpfile.path())
            .arg("-")
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::PdftotextNotFound
                } else {
                    ConvertError::Extraction(format!("pdftotext -bbox failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ConvertError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml)?;
        tracing::debug!(pages = pages.len(), "pdftotext extracted word boxes");

        Ok(Box::new(MemorySource::new(pages)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

#[derive(Debug)]
struct WordBox {
    x_min: f64,
    x_max: f64,
    y_max: f64,
    text: String,
}

/// Parse `pdftotext -bbox` XHTML into one fragment list per page.
fn parse_bbox_xml(xml: &str) -> Result<Vec<Vec<Fragment>>, ConvertError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages = Vec::new();
    let mut page_height: Option<f64> = None;
    let mut current: Vec<Fragment> = Vec::new();
    let mut word: Option<WordBox> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ConvertError::Extraction(format!("invalid bbox XML: {e}")))?;

        match event {
            Event::Start(ref e) if e.name().as_ref() == b"page" => {
                page_height = Some(f64_attr(e, b"height")?);
                current = Vec::new();
            }
            Event::Empty(ref e) if e.name().as_ref() == b"page" => {
                pages.push(Vec::new());
            }
            Event::Start(ref e) if e.name().as_ref() == b"word" => {
                word = Some(WordBox {
                    x_min: f64_attr(e, b"xMin")?,
                    x_max: f64_attr(e, b"xMax")?,
                    y_max: f64_attr(e, b"yMax")?,
                    text: String::new(),
                });
            }
            Event::Text(ref t) => {
                if let Some(w) = word.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| ConvertError::Extraction(format!("invalid word text: {e}")))?;
                    w.text.push_str(&text);
                }
            }
            Event::End(ref e) if e.name().as_ref() == b"word" => {
                if let (Some(w), Some(height)) = (word.take(), page_height) {
                    current.push(
                        Fragment::new(w.text, w.x_min, height - w.y_max)
                            .with_width(w.x_max - w.x_min),
                    );
                }
            }
            Event::End(ref e) if e.name().as_ref() == b"page" => {
                pages.push(std::mem::take(&mut current));
                page_height = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pages)
}

fn f64_attr(tag: &BytesStart, name: &[u8]) -> Result<f64, ConvertError> {
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| ConvertError::Extraction(format!("invalid attribute: {e}")))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| ConvertError::Extraction(format!("invalid attribute: {e}")))?;
            return value.trim().parse().map_err(|_| {
                ConvertError::Extraction(format!(
                    "attribute {} is not a number: '{}'",
                    String::from_utf8_lossy(name),
                    value
                ))
            });
        }
    }
    Err(ConvertError::Extraction(format!(
        "missing attribute {} on <{}>",
        String::from_utf8_lossy(name),
        String::from_utf8_lossy(tag.name().as_ref())
    )))
}
