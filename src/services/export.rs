use serde::Serialize;
use serde_json::Value;

use crate::domain::PointsError;

/// Serialize `records` with a header row taken from the first record's keys.
///
/// Values are written verbatim, a delimiter inside a value is not escaped.
/// Returns `Ok(None)` when there is nothing to export. Every row, the last
/// one included, ends with `line_delimiter`.
pub fn to_delimited_text<T: Serialize>(
    records: &[T],
    column_delimiter: &str,
    line_delimiter: &str,
) -> Result<Option<String>, PointsError> {
    let rows = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;

    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let keys: Vec<String> = match first {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };

    let mut result = String::new();
    result.push_str(&keys.join(column_delimiter));
    result.push_str(line_delimiter);

    for row in &rows {
        let cells: Vec<String> = keys
            .iter()
            .map(|key| row.get(key).map(cell_text).unwrap_or_default())
            .collect();
        result.push_str(&cells.join(column_delimiter));
        result.push_str(line_delimiter);
    }

    Ok(Some(result))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 => format!("{}", float),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_is_none() {
        let records: Vec<Value> = Vec::new();
        assert_eq!(to_delimited_text(&records, ",", "\n").unwrap(), None);
    }

    #[test]
    fn test_single_record() {
        let records = vec![json!({"A": 1, "B": 2})];
        assert_eq!(
            to_delimited_text(&records, ",", "\n").unwrap().as_deref(),
            Some("A,B\n1,2\n")
        );
    }

    #[test]
    fn test_custom_delimiters_and_key_order() {
        let records = vec![
            json!({"Title": "Fix bug", "Min. estimate": 3.0, "Consumed": 0.5}),
            json!({"Title": "Ship", "Min. estimate": 8.0, "Consumed": 2.0}),
        ];
        assert_eq!(
            to_delimited_text(&records, ";", "\r\n").unwrap().as_deref(),
            Some("Title;Min. estimate;Consumed\r\nFix bug;3;0.5\r\nShip;8;2\r\n")
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let records = vec![json!({"Title": "a,b"})];
        assert_eq!(
            to_delimited_text(&records, ",", "\n").unwrap().as_deref(),
            Some("Title\na,b\n")
        );
    }
}
