//! Line-by-line report sheet built from marked page text.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::tabular::classify::{classify, ContentType};
use crate::tabular::delimited::{encode_records, worksheet_to_csv, BOM};
use crate::tabular::grid::{CellValue, Worksheet};

static RE_MARKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=== Page (\d+) ===$").expect("valid marker line regex"));

pub const REPORT_HEADER: [&str; 4] = ["Page", "Content Type", "Text Content", "Line Number"];

const REPORT_WIDTHS: [u32; 4] = [8, 15, 50, 12];

/// Labels written into the report preamble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub generator: String,
    pub format_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            generator: "pagecast".into(),
            format_label: "Professional Excel Spreadsheet".into(),
        }
    }
}

/// One classified text line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub page_number: usize,
    pub content_type: ContentType,
    pub text: String,
    /// 1-based position among the classified lines of its page.
    pub line_number: usize,
}

/// Scan marked page text, tracking the page from its marker lines and
/// classifying every other non-blank line.
///
/// Lines before the first marker belong to page 1.
pub fn parse_marked_text(text: &str) -> Vec<ReportLine> {
    let mut out = Vec::new();
    let mut page_number = 1;
    let mut line_number = 1;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(page) = RE_MARKER_LINE
            .captures(trimmed)
            .and_then(|c| c[1].parse::<usize>().ok())
        {
            page_number = page;
            line_number = 1;
            continue;
        }

        out.push(ReportLine {
            page_number,
            content_type: classify(trimmed),
            text: trimmed.to_string(),
            line_number,
        });
        line_number += 1;
    }

    out
}

/// Lay classified lines out as a styled four-column worksheet.
pub fn report_sheet(lines: &[ReportLine]) -> Worksheet {
    let mut sheet = Worksheet::new(&REPORT_HEADER, REPORT_WIDTHS.to_vec());
    for line in lines {
        sheet.grid.push_row(vec![
            CellValue::from(line.page_number),
            CellValue::text(line.content_type.to_string()),
            CellValue::text(line.text.as_str()),
            CellValue::from(line.line_number),
        ]);
    }
    sheet
}

/// BOM, metadata preamble, blank separator, then the sheet as CSV.
pub fn encode_report_csv(
    sheet: &Worksheet,
    options: &ReportOptions,
    created_at: DateTime<Utc>,
) -> Result<String, ConvertError> {
    let created = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let preamble = encode_records([
        ["Generated by", options.generator.as_str()],
        ["Creation Date", created.as_str()],
        ["Format", options.format_label.as_str()],
        ["", ""],
    ])?;
    let body = worksheet_to_csv(sheet)?;
    Ok(format!("{BOM}{preamble}{body}"))
}
