use std::fmt;

use serde::Serialize;

use crate::error::ConvertError;
use crate::tabular::address::{CellAddress, CellRange};
use crate::tabular::style::{style_for, CellStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        CellValue::Number(n as f64)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Dense row-major cell storage. Every row has the same width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        if row.len() > self.width {
            self.width = row.len();
            for existing in &mut self.rows {
                existing.resize(self.width, CellValue::Empty);
            }
        }
        row.resize(self.width, CellValue::Empty);
        self.rows.push(row);
    }

    pub fn get(&self, address: CellAddress) -> Option<&CellValue> {
        self.rows.get(address.row)?.get(address.col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Range covering the whole grid, or `None` when it has no cells.
    pub fn range(&self) -> Option<CellRange> {
        if self.width == 0 || self.rows.is_empty() {
            return None;
        }
        Some(CellRange {
            start: CellAddress::new(0, 0),
            end: CellAddress::new(self.rows.len() - 1, self.width - 1),
        })
    }
}

/// A named grid with its presentation hints. Row 0 is the header row.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub name: String,
    pub grid: Grid,
    /// Column widths in characters.
    pub column_widths: Vec<u32>,
    /// Uniform row height in points.
    pub row_height: f64,
}

impl Worksheet {
    pub const DEFAULT_NAME: &'static str = "PDF_Data";
    pub const ROW_HEIGHT: f64 = 20.0;

    pub fn new(header: &[&str], column_widths: Vec<u32>) -> Self {
        let mut grid = Grid::default();
        grid.push_row(header.iter().map(|h| CellValue::text(*h)).collect());
        Worksheet {
            name: Self::DEFAULT_NAME.to_string(),
            grid,
            column_widths,
            row_height: Self::ROW_HEIGHT,
        }
    }

    /// Range string of the whole sheet, e.g. `A1:D9`.
    pub fn ref_range(&self) -> Result<Option<String>, ConvertError> {
        self.grid.range().map(|r| r.encode()).transpose()
    }

    pub fn style_at(&self, address: CellAddress) -> CellStyle {
        style_for(address)
    }

    /// Width of column `col`, falling back to the last configured width.
    pub fn column_width(&self, col: usize) -> u32 {
        self.column_widths
            .get(col)
            .or(self.column_widths.last())
            .copied()
            .unwrap_or(10)
    }

    /// Every cell with its address and derived style, row by row.
    pub fn layout(&self) -> Result<SheetLayout<'_>, ConvertError> {
        let mut cells = Vec::with_capacity(self.grid.width() * self.grid.height());
        for (row, values) in self.grid.rows().enumerate() {
            for (col, value) in values.iter().enumerate() {
                let address = CellAddress::new(row, col);
                cells.push(StyledCell {
                    address: address.encode()?,
                    value,
                    style: self.style_at(address),
                });
            }
        }

        Ok(SheetLayout {
            name: &self.name,
            range: self.ref_range()?,
            column_widths: (0..self.grid.width()).map(|c| self.column_width(c)).collect(),
            row_height: self.row_height,
            cells,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StyledCell<'a> {
    pub address: String,
    pub value: &'a CellValue,
    pub style: CellStyle,
}

/// Serializable view of a worksheet: values plus presentation.
#[derive(Debug, Serialize)]
pub struct SheetLayout<'a> {
    pub name: &'a str,
    #[serde(rename = "!ref")]
    pub range: Option<String>,
    pub column_widths: Vec<u32>,
    pub row_height: f64,
    pub cells: Vec<StyledCell<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_padded_to_widest() {
        let mut grid = Grid::default();
        grid.push_row(vec![CellValue::text("a")]);
        grid.push_row(vec![CellValue::text("b"), CellValue::from(2)]);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(CellAddress::new(0, 1)), Some(&CellValue::Empty));
        assert_eq!(grid.range().unwrap().encode().unwrap(), "A1:B2");
    }

    #[test]
    fn test_empty_grid_has_no_range() {
        assert!(Grid::default().range().is_none());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::from(12).to_string(), "12");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_worksheet_ref_and_widths() {
        let sheet = Worksheet::new(&["A", "B", "C"], vec![8, 15]);
        assert_eq!(sheet.ref_range().unwrap().as_deref(), Some("A1:C1"));
        assert_eq!(sheet.column_width(0), 8);
        assert_eq!(sheet.column_width(2), 15);
        assert_eq!(sheet.name, "PDF_Data");
    }

    #[test]
    fn test_layout_styles_follow_rows() {
        let mut sheet = Worksheet::new(&["Page", "Text"], vec![8, 50]);
        sheet.grid.push_row(vec![CellValue::from(1), CellValue::text("a")]);
        sheet.grid.push_row(vec![CellValue::from(1), CellValue::text("b")]);

        let layout = sheet.layout().unwrap();
        assert_eq!(layout.range.as_deref(), Some("A1:B3"));
        assert_eq!(layout.column_widths, vec![8, 50]);
        assert_eq!(layout.cells.len(), 6);
        assert_eq!(layout.cells[3].address, "B2");
        assert!(layout.cells[0].style.bold);
        assert_eq!(layout.cells[2].style.fill, Some("F8F9FA"));
        assert_eq!(layout.cells[4].style.fill, None);

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["!ref"], "A1:B3");
        assert_eq!(json["cells"][2]["value"], 1.0);
    }
}
