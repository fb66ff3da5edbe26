use std::collections::BTreeMap;
use std::sync::OnceLock;
use regex::Regex;
use serde_json::Value;
use crate::config::TableLayout;
use crate::error::{AppError, AppResult};

const EMPTY_COLUMN_PREFIX: &str = "__EMPTY";

/// 列号和列数的上限，超出视为非法输入
pub const MAX_TABLE_COLUMNS: usize = 1024;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// `__EMPTY` 是第 0 列，`__EMPTY_<n>` 是第 n 列
pub fn column_index(key: &str) -> AppResult<usize> {
    let invalid = || AppError::Validation(format!("Unexpected column key: {}", key));
    let rest = key.strip_prefix(EMPTY_COLUMN_PREFIX).ok_or_else(invalid)?;
    if rest.is_empty() {
        return Ok(0);
    }
    rest.strip_prefix('_')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| *n < MAX_TABLE_COLUMNS)
        .ok_or_else(invalid)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn sorted_cells(row: &BTreeMap<String, Value>) -> AppResult<Vec<(usize, String)>> {
    let mut cells = row
        .iter()
        .map(|(key, value)| -> AppResult<(usize, String)> {
            Ok((column_index(key)?, cell_text(value)))
        })
        .collect::<AppResult<Vec<_>>>()?;
    cells.sort_by_key(|(index, _)| *index);
    Ok(cells)
}

/// Header row with gaps between consecutive columns filled by empty strings.
///
/// Whitespace runs inside a cell collapse to one space. Columns before the
/// first present one are not padded.
pub fn format_header_v1(row: &BTreeMap<String, Value>) -> AppResult<Vec<String>> {
    let mut header = Vec::new();
    let mut last_index: Option<usize> = None;

    for (index, text) in sorted_cells(row)? {
        if let Some(mut last) = last_index {
            while last + 1 < index {
                header.push(String::new());
                last += 1;
            }
        }
        header.push(whitespace().replace_all(&text, " ").trim().to_string());
        last_index = Some(index);
    }

    Ok(header)
}

/// 固定列数的表头，值从 start_index 开始依次填入，超出列数的丢弃
pub fn format_header_v2(row: &BTreeMap<String, Value>, layout: TableLayout) -> AppResult<Vec<String>> {
    if layout.total_columns > MAX_TABLE_COLUMNS {
        return Err(AppError::Validation(format!(
            "total_columns {} exceeds the limit of {}",
            layout.total_columns, MAX_TABLE_COLUMNS
        )));
    }

    let mut header = vec![String::new(); layout.total_columns];

    for (offset, (_, text)) in sorted_cells(row)?.into_iter().enumerate() {
        let Some(slot) = layout
            .start_index
            .checked_add(offset)
            .and_then(|index| header.get_mut(index))
        else {
            break;
        };
        *slot = text.trim().to_string();
    }

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> BTreeMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keys_sort_numerically_not_lexically() {
        let header = format_header_v1(&row(json!({
            "__EMPTY_10": "ten",
            "__EMPTY_9": "nine",
        })))
        .unwrap();
        assert_eq!(header, vec!["nine", "ten"]);
    }

    #[test]
    fn v1_fills_gaps_and_collapses_whitespace() {
        let header = format_header_v1(&row(json!({
            "__EMPTY_2": "  Name of\n  Employee ",
            "__EMPTY_5": "Wages",
            "__EMPTY_6": 42,
        })))
        .unwrap();
        assert_eq!(header, vec!["Name of Employee", "", "", "Wages", "42"]);
    }

    #[test]
    fn bare_prefix_is_column_zero() {
        assert_eq!(column_index("__EMPTY").unwrap(), 0);
        assert_eq!(column_index("__EMPTY_7").unwrap(), 7);
        assert!(column_index("Sr No").is_err());
        assert!(column_index("__EMPTY_x").is_err());
    }

    #[test]
    fn v2_places_values_from_the_start_index() {
        let header = format_header_v2(
            &row(json!({"__EMPTY_3": " Basic ", "__EMPTY_1": "DA"})),
            TableLayout { total_columns: 32, start_index: 8 },
        )
        .unwrap();

        assert_eq!(header.len(), 32);
        assert_eq!(header[8], "DA");
        assert_eq!(header[9], "Basic");
        assert!(header[..8].iter().all(String::is_empty));
    }

    #[test]
    fn v2_drops_values_past_the_last_column() {
        let header = format_header_v2(
            &row(json!({"__EMPTY_1": "a", "__EMPTY_2": "b", "__EMPTY_3": "c"})),
            TableLayout { total_columns: 3, start_index: 1 },
        )
        .unwrap();
        assert_eq!(header, vec!["", "a", "b"]);
    }

    #[test]
    fn v2_start_past_the_end_yields_blank_row() {
        let header = format_header_v2(
            &row(json!({"__EMPTY_1": "a", "__EMPTY_2": "b"})),
            TableLayout { total_columns: 3, start_index: usize::MAX },
        )
        .unwrap();
        assert_eq!(header, vec!["", "", ""]);
    }

    #[test]
    fn oversized_layouts_and_column_keys_are_rejected() {
        let err = format_header_v2(
            &row(json!({"__EMPTY_1": "a"})),
            TableLayout { total_columns: usize::MAX, start_index: 0 },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let huge = format!("__EMPTY_{}", usize::MAX);
        assert!(column_index(&huge).is_err());
        let mut cells = row(json!({"__EMPTY_1": "a"}));
        cells.insert(huge, json!("b"));
        assert!(format_header_v1(&cells).is_err());
    }
}
