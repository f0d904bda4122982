use serde::{Deserialize, Serialize};

use crate::extraction::Fragment;
use crate::layout::cluster::{cluster, UnitBuilder};
use crate::layout::sort::sort_fragments;
use crate::layout::LayoutOptions;

/// Fragments sharing a baseline, kept as discrete cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based page the row was found on.
    pub page_number: usize,
    pub cells: Vec<String>,
}

impl Row {
    /// The row as a flat record: page number first, then the cells.
    pub fn to_record(&self) -> Vec<String> {
        std::iter::once(self.page_number.to_string())
            .chain(self.cells.iter().cloned())
            .collect()
    }
}

/// Builds one row. Gaps are ignored; every fragment becomes its own cell.
#[derive(Debug)]
pub struct RowBuilder {
    page_number: usize,
    cells: Vec<String>,
}

impl RowBuilder {
    pub fn new(page_number: usize) -> Self {
        RowBuilder {
            page_number,
            cells: Vec::new(),
        }
    }
}

impl UnitBuilder for RowBuilder {
    type Unit = Row;

    fn push(&mut self, text: &str, _gap: Option<f64>, _options: &LayoutOptions) {
        self.cells.push(text.to_string());
    }

    fn finish(&mut self) -> Option<Row> {
        if self.cells.is_empty() {
            return None;
        }
        Some(Row {
            page_number: self.page_number,
            cells: std::mem::take(&mut self.cells),
        })
    }
}

/// Group one page's fragments into rows, top to bottom.
pub fn extract_page_rows(
    page_number: usize,
    mut fragments: Vec<Fragment>,
    options: &LayoutOptions,
) -> Vec<Row> {
    sort_fragments(&mut fragments, options);
    let mut rows = Vec::new();
    cluster(
        &fragments,
        options,
        &mut RowBuilder::new(page_number),
        |row| rows.push(row),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_by_baseline() {
        let rows = extract_page_rows(
            1,
            vec![
                Fragment::new("Name", 0.0, 100.0),
                Fragment::new("Amount", 200.0, 100.0),
                Fragment::new("Alice", 0.0, 80.0),
                Fragment::new("10", 200.0, 80.0),
            ],
            &LayoutOptions::default(),
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_record(), vec!["1", "Name", "Amount"]);
        assert_eq!(rows[1].to_record(), vec!["1", "Alice", "10"]);
    }

    #[test]
    fn test_close_fragments_stay_separate_cells() {
        let rows = extract_page_rows(
            3,
            vec![
                Fragment::new("ab", 0.0, 10.0).with_width(10.0),
                Fragment::new("cd", 10.5, 12.0),
            ],
            &LayoutOptions::default(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].page_number, 3);
        assert_eq!(rows[0].cells, vec!["ab", "cd"]);
    }

    #[test]
    fn test_blank_fragments_produce_no_row() {
        let rows = extract_page_rows(
            1,
            vec![
                Fragment::new("  ", 0.0, 300.0),
                Fragment::new("only", 0.0, 100.0),
            ],
            &LayoutOptions::default(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells, vec!["only"]);
    }
}
