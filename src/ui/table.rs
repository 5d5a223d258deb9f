//! Column layout for plain-text listings

use unicode_width::UnicodeWidthStr;

/// Terminal cell width of `s`
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-align `s` in a column of `width` cells
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Right-align `s` in a column of `width` cells
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Render rows with every column padded to its widest cell.
///
/// The last column is never padded. Columns listed in `right_aligned` are
/// right-aligned.
pub fn render_rows(rows: &[Vec<String>], right_aligned: &[usize]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| visible_width(cell))
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    if col + 1 == row.len() && !right_aligned.contains(&col) {
                        cell.clone()
                    } else if right_aligned.contains(&col) {
                        pad_left(cell, widths[col])
                    } else {
                        pad_right(cell, widths[col])
                    }
                })
                .collect();
            cells.join("  ")
        })
        .collect()
}
