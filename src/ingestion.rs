use crate::error::{BalanceReportError, Result};
use crate::schema::Entry;
use serde_json::{Map, Value};

const REQUIRED_COLUMNS: [&str; 3] = ["categoria", "tipo", "valor"];

/// Convert loosely-typed tabular records into typed entries.
///
/// The structural check is over the whole collection: each required column
/// must appear in at least one record, otherwise a `Schema` error is
/// returned and nothing is converted. A missing or malformed value in an
/// individual row is not a schema error; it coerces to an empty label or
/// 0.0 respectively.
pub fn entries_from_records(records: &[Map<String, Value>]) -> Result<Vec<Entry>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !records.iter().any(|r| r.contains_key(**col)))
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(BalanceReportError::Schema { missing });
    }

    Ok(records
        .iter()
        .map(|record| Entry {
            category: string_field(record, "categoria"),
            kind: string_field(record, "tipo"),
            value: coerce_value(record.get("valor")),
        })
        .collect())
}

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerce a raw cell to a numeric value; anything non-convertible is 0.0.
///
/// Numeric strings may carry a leading currency sign and thousands
/// separators, which upstream spreadsheets commonly leave in.
pub fn coerce_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let cleaned: String = s
                .trim()
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(category: &str, kind: &str, value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("categoria".to_string(), json!(category));
        map.insert("tipo".to_string(), json!(kind));
        map.insert("valor".to_string(), value);
        map
    }

    #[test]
    fn test_entries_from_well_formed_records() {
        let records = vec![
            record("Activos Corrientes", "Caja", json!(100.0)),
            record("Pasivos Corrientes", "Proveedores", json!(60)),
        ];

        let entries = entries_from_records(&records).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, 100.0);
        assert_eq!(entries[1].category, "Pasivos Corrientes");
        assert_eq!(entries[1].value, 60.0);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let mut bad = Map::new();
        bad.insert("categoria".to_string(), json!("Activos"));
        bad.insert("tipo".to_string(), json!("Caja"));
        // no "valor" anywhere in the collection

        let err = entries_from_records(&[bad]).unwrap_err();
        match err {
            BalanceReportError::Schema { missing } => {
                assert_eq!(missing, vec!["valor".to_string()]);
            }
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_column_present_in_any_record_satisfies_check() {
        let full = record("Activos", "Caja", json!(10.0));
        let mut partial = Map::new();
        partial.insert("categoria".to_string(), json!("Pasivos"));
        partial.insert("tipo".to_string(), json!("Deuda"));
        // "valor" missing in this row only: coerces to 0.0

        let entries = entries_from_records(&[full, partial]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].value, 0.0);
    }

    #[test]
    fn test_non_numeric_value_coerces_to_zero() {
        let records = vec![record("Activos", "Caja", json!("n/a"))];
        let entries = entries_from_records(&records).unwrap();
        assert_eq!(entries[0].value, 0.0);
    }

    #[test]
    fn test_numeric_string_coercion() {
        assert_eq!(coerce_value(Some(&json!("1,234.50"))), 1234.5);
        assert_eq!(coerce_value(Some(&json!("$2,000"))), 2000.0);
        assert_eq!(coerce_value(Some(&json!(" 42.5 "))), 42.5);
        assert_eq!(coerce_value(Some(&json!(null))), 0.0);
        assert_eq!(coerce_value(None), 0.0);
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        assert!(entries_from_records(&[]).unwrap().is_empty());
    }
}
