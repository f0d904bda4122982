use pagecast_core::layout::rows::Row;

/// Render rows as aligned plain-text columns, page number first.
pub fn format_rows(rows: &[Row]) -> String {
    let records: Vec<Vec<String>> = rows.iter().map(Row::to_record).collect();

    let mut widths: Vec<usize> = Vec::new();
    for record in &records {
        for (i, cell) in record.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    for record in &records {
        let line = record
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
