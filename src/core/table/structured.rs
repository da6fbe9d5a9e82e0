//! Structured (gviz JSON) normalization
//!
//! The query endpoint answers with
//! `{table: {cols: [...], rows: [{c: [{v: value}, ...]}, ...]}}`, usually
//! wrapped in a callback invocation. Only the `v` field of a cell is read.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::Table;

lazy_static! {
    // /*O_o*/\nname({...});
    static ref CALLBACK_WRAPPER: Regex = Regex::new(
        r"(?s)^\s*(?:/\*.*?\*/)?\s*([A-Za-z_$][\w$.]*)\s*\((.*)\)\s*;?\s*$"
    ).unwrap();
}

/// Top-level structured response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizResponse {
    #[serde(default)]
    pub table: Option<GvizTable>,
}

/// Table body of a structured response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub cols: Vec<GvizColumn>,
    #[serde(default)]
    pub rows: Vec<Option<GvizRow>>,
}

/// Column descriptor; only its presence matters for layout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizColumn {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizRow {
    #[serde(default)]
    pub c: Option<Vec<Option<GvizCell>>>,
}

/// Cell descriptor; `f` and `p` are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: Value,
}

impl GvizResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Normalize into a [`Table`]; missing parts give an empty table
    pub fn into_table(self) -> Table {
        let Some(table) = self.table else {
            return Table::default();
        };

        let rows = table
            .rows
            .into_iter()
            .map(|row| {
                row.and_then(|r| r.c)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|cell| cell.and_then(|c| value_to_text(&c.v)))
                    .collect()
            })
            .collect();

        Table::new(table.cols.len(), rows)
    }
}

/// Stringify a cell value the way a browser would, `None` for null
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_text(n)),
        other => Some(other.to_string()),
    }
}

// Number::prototype.toString: shortest digits, fixed notation for
// 1e-6 <= |x| < 1e21, exponent form with an explicit sign otherwise.
fn number_to_text(n: &serde_json::Number) -> String {
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Split a callback-wrapped body into `(callback name, payload)`
///
/// ```rust
/// use sheetcols::core::table::unwrap_callback;
///
/// let body = "/*O_o*/\ncb_1({\"table\":{}});";
/// assert_eq!(unwrap_callback(body), Some(("cb_1", "{\"table\":{}}")));
/// ```
pub fn unwrap_callback(body: &str) -> Option<(&str, &str)> {
    let caps = CALLBACK_WRAPPER.captures(body)?;
    let name = caps.get(1)?.as_str();
    let payload = caps.get(2)?.as_str();
    Some((name, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "version": "0.6",
        "table": {
            "cols": [
                {"id": "A", "label": "Left", "type": "string"},
                {"id": "B", "label": "Right", "type": "number"}
            ],
            "rows": [
                {"c": [{"v": "[Hi]"}, {"v": 3.0, "f": "3"}]},
                {"c": [null, {"v": null}]},
                {"c": [{"v": true}, {"v": 2.5}, {"v": "overflow"}]}
            ]
        }
    }"#;

    #[test]
    fn test_structured_columns() {
        let table = GvizResponse::from_json(SAMPLE).unwrap().into_table();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column(0), vec!["[Hi]", "true"]);
        assert_eq!(table.column(1), vec!["3", "2.5"]);
    }

    #[test]
    fn test_null_values_contribute_nothing() {
        let table = GvizResponse::from_json(SAMPLE).unwrap().into_table();
        assert_eq!(table.rows()[1], vec![None, None]);
    }

    #[test]
    fn test_missing_parts_degrade_to_empty() {
        let table = GvizResponse::from_json("{}").unwrap().into_table();
        assert_eq!(table.column_count(), 0);

        let table = GvizResponse::from_json(r#"{"table": {"cols": [{}], "rows": [{"c": null}]}}"#)
            .unwrap()
            .into_table();
        assert_eq!(table.column_count(), 1);
        assert!(table.column(0).is_empty());
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&Value::Null), None);
        assert_eq!(value_to_text(&serde_json::json!(7)), Some("7".into()));
        assert_eq!(value_to_text(&serde_json::json!(7.0)), Some("7".into()));
        assert_eq!(value_to_text(&serde_json::json!(-0.25)), Some("-0.25".into()));
        assert_eq!(value_to_text(&serde_json::json!(false)), Some("false".into()));
    }

    #[test]
    fn test_numbers_stringify_like_javascript() {
        let cases = [
            (serde_json::json!(-0.0), "0"),
            (serde_json::json!(1e-7), "1e-7"),
            (serde_json::json!(2.5e-8), "2.5e-8"),
            (serde_json::json!(0.000001), "0.000001"),
            (serde_json::json!(1e20), "100000000000000000000"),
            (serde_json::json!(1e21), "1e+21"),
            (serde_json::json!(-1.5e300), "-1.5e+300"),
            (serde_json::json!(123456789.5), "123456789.5"),
            (serde_json::json!(-12), "-12"),
        ];
        for (value, expected) in cases {
            assert_eq!(value_to_text(&value), Some(expected.to_string()), "value: {}", value);
        }
    }

    #[test]
    fn test_unwrap_callback() {
        let body = "/*O_o*/\ngoogle.visualization.Query.setResponse({\"a\":1});";
        assert_eq!(
            unwrap_callback(body),
            Some(("google.visualization.Query.setResponse", "{\"a\":1}"))
        );
        assert_eq!(unwrap_callback("plain,csv\n1,2"), None);
    }
}
