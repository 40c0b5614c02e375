//! Multi-valued spreadsheet cells

/// Split a cell on newlines and semicolons, trimming and dropping empties
pub fn split_cell(cell: &str) -> Vec<String> {
    cell.split(['\n', '\r', ';'])
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
