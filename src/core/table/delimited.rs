//! Delimited-text (CSV export) normalization
//!
//! Lines are split on `\n` and cells on `,` with no quote handling. A comma
//! inside a cell therefore splits it across columns; callers that need commas
//! in content should publish through the structured endpoint instead.

use tracing::warn;

use super::Table;

/// Parse delimited text into a [`Table`]
///
/// The column count is the number of tokens on the first line.
pub fn parse_delimited(text: &str) -> Table {
    let rows: Vec<Vec<Option<String>>> = text
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.split(',').map(|cell| Some(cell.to_string())).collect()
        })
        .collect();

    let column_count = rows.first().map(|row| row.len()).unwrap_or(0);
    let overflow: usize = rows
        .iter()
        .map(|row| row.len().saturating_sub(column_count))
        .sum();
    if overflow > 0 {
        warn!(overflow, column_count, "dropping cells beyond the first line's width");
    }

    Table::new(column_count, rows)
}
