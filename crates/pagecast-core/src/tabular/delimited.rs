use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::ConvertError;
use crate::tabular::address::{CellAddress, CellRange};
use crate::tabular::grid::{CellValue, Worksheet};

/// Byte-order mark placed in front of every spreadsheet payload.
pub const BOM: char = '\u{FEFF}';

/// Encode records as CSV with every field quoted and `\n` line ends.
/// Records may differ in length.
pub fn encode_records<I, R, S>(records: I) -> Result<String, ConvertError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for record in records {
        writer.write_record(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Decode CSV produced by [`encode_records`]. A leading BOM is ignored.
pub fn decode_records(text: &str) -> Result<Vec<Vec<String>>, ConvertError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for record in reader.records() {
        out.push(record?.iter().map(str::to_string).collect());
    }
    Ok(out)
}

/// Encode a worksheet cell by cell across its `!ref` range.
///
/// The range string is decoded back into addresses before walking the
/// grid, so an address that does not round-trip fails the encode.
pub fn worksheet_to_csv(sheet: &Worksheet) -> Result<String, ConvertError> {
    let Some(range) = sheet.ref_range()? else {
        return Ok(String::new());
    };
    let range: CellRange = range.parse()?;

    let records = range.rows().map(|row| {
        range
            .cols()
            .map(|col| {
                sheet
                    .grid
                    .get(CellAddress::new(row, col))
                    .map(CellValue::to_string)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
    });

    encode_records(records)
}
