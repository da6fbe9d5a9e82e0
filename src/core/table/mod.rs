//! Data normalizer
//!
//! Both source shapes (delimited text and the structured cell-object table)
//! normalize into one [`Table`]: an ordered list of rows of optional cell
//! strings plus a column count. Malformed input never fails; ragged rows just
//! leave columns sparse.

pub mod delimited;
pub mod structured;

pub use delimited::parse_delimited;
pub use structured::{unwrap_callback, value_to_text, GvizResponse};

use tracing::debug;

use crate::utils::error::SheetResult;

/// Which representation a body is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    Delimited,
    Structured,
}

impl SourceShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceShape::Delimited => "delimited",
            SourceShape::Structured => "structured",
        }
    }
}

/// Normalized tabular data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    column_count: usize,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(column_count: usize, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { column_count, rows }
    }

    /// Parse CSV export text
    pub fn from_delimited(text: &str) -> Self {
        parse_delimited(text)
    }

    /// Normalize a decoded structured response
    pub fn from_structured(response: GvizResponse) -> Self {
        response.into_table()
    }

    /// Parse a bare structured JSON payload
    pub fn from_gviz_json(json: &str) -> Result<Self, serde_json::Error> {
        GvizResponse::from_json(json).map(GvizResponse::into_table)
    }

    /// Parse a body of either shape, sniffing which one it is
    ///
    /// A bare body that only looks like JSON is read as delimited text when it
    /// does not decode. Only a callback-wrapped payload that fails to decode
    /// is an error.
    pub fn from_any(body: &str) -> SheetResult<Self> {
        match detect_shape(body) {
            SourceShape::Delimited => Ok(Self::from_delimited(body)),
            SourceShape::Structured => match unwrap_callback(body) {
                Some((_, payload)) => Ok(Self::from_gviz_json(payload)?),
                None => match Self::from_gviz_json(body) {
                    Ok(table) => Ok(table),
                    Err(err) => {
                        debug!(error = %err, "body is not structured, reading as delimited");
                        Ok(Self::from_delimited(body))
                    }
                },
            },
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.placed_cells().next().is_none()
    }

    /// Every cell that lands in a column, as `(column index, text)` in row order
    ///
    /// Overflow cells, `None` and whitespace-only cells are skipped.
    pub fn placed_cells(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.rows.iter().flat_map(move |row| {
            row.iter()
                .enumerate()
                .take(self.column_count)
                .filter_map(|(index, cell)| match cell.as_deref() {
                    Some(text) if !text.trim().is_empty() => Some((index, text)),
                    _ => None,
                })
        })
    }

    /// Placed cells of one column in row order
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.placed_cells()
            .filter(|(i, _)| *i == index)
            .map(|(_, text)| text)
            .collect()
    }
}

/// Detect whether a body is delimited text or a structured payload
pub fn detect_shape(body: &str) -> SourceShape {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        return SourceShape::Structured;
    }
    match unwrap_callback(body) {
        Some((_, payload)) if payload.trim_start().starts_with('{') => SourceShape::Structured,
        _ => SourceShape::Delimited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_shape() {
        assert_eq!(detect_shape("a,b\n1,2"), SourceShape::Delimited);
        assert_eq!(detect_shape("  {\"table\": {}}"), SourceShape::Structured);
        assert_eq!(
            detect_shape("/*O_o*/\ncb({\"table\": {}});"),
            SourceShape::Structured
        );
        assert_eq!(detect_shape("f(x),g(y)"), SourceShape::Delimited);
    }

    #[test]
    fn test_from_any_both_shapes() {
        let csv = Table::from_any("a,b\n1,2").unwrap();
        let json = Table::from_any(
            r#"cb({"table":{"cols":[{},{}],"rows":[{"c":[{"v":"a"},{"v":"b"}]},{"c":[{"v":1},{"v":2}]}]}});"#,
        )
        .unwrap();
        assert_eq!(csv.column(0), json.column(0));
        assert_eq!(csv.column(1), json.column(1));
    }

    #[test]
    fn test_from_any_rejects_broken_wrapped_json() {
        assert!(Table::from_any("cb({\"table\": );").is_err());
    }

    #[test]
    fn test_from_any_csv_starting_with_brace() {
        let table = Table::from_any("{Intro},b\n1,2").unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column(0), vec!["{Intro}", "1"]);
        assert_eq!(table.column(1), vec!["b", "2"]);

        let table = Table::from_any("{\"table\": ").unwrap();
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_placed_cells_row_order() {
        let table = Table::new(
            2,
            vec![
                vec![Some("a".into()), Some("b".into())],
                vec![None, Some("c".into()), Some("dropped".into())],
            ],
        );
        let cells: Vec<_> = table.placed_cells().collect();
        assert_eq!(cells, vec![(0, "a"), (1, "b"), (1, "c")]);
        assert!(!table.is_empty());
        assert!(Table::default().is_empty());
    }
}
