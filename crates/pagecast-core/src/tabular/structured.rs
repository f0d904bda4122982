use crate::error::ConvertError;
use crate::layout::rows::Row;
use crate::tabular::delimited::{encode_records, BOM};
use crate::tabular::grid::{CellValue, Worksheet};

pub const STRUCTURED_HEADER: [&str; 6] = [
    "Page", "Column 1", "Column 2", "Column 3", "Column 4", "Column 5",
];

const STRUCTURED_WIDTHS: [u32; 6] = [8, 20, 20, 20, 20, 20];

/// Header row followed by one record per row. Rows are not padded, and rows
/// wider than the header keep their extra cells.
pub fn structured_records(rows: &[Row]) -> Vec<Vec<String>> {
    std::iter::once(STRUCTURED_HEADER.iter().map(|h| h.to_string()).collect())
        .chain(rows.iter().map(Row::to_record))
        .collect()
}

/// BOM-prefixed CSV for grouped rows under the fixed `Page, Column 1..5`
/// header.
pub fn encode_structured_csv(rows: &[Row]) -> Result<String, ConvertError> {
    let csv = encode_records(structured_records(rows))?;
    Ok(format!("{BOM}{csv}"))
}

/// The same rows as a styled worksheet, page numbers typed as numbers.
pub fn structured_sheet(rows: &[Row]) -> Worksheet {
    let mut sheet = Worksheet::new(&STRUCTURED_HEADER, STRUCTURED_WIDTHS.to_vec());
    for row in rows {
        sheet.grid.push_row(
            std::iter::once(CellValue::from(row.page_number))
                .chain(row.cells.iter().map(|c| CellValue::text(c.as_str())))
                .collect(),
        );
    }
    sheet
}
