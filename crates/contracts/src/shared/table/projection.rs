//! Backend record ⇄ table row mapping

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

use super::row::{CellValue, Row, RowId};
use super::schema::{KeyStrategy, TableSchema};

/// Maps one backend record into a row.
///
/// Every field of the record is kept, schema columns missing from the record
/// become [`CellValue::Empty`]. `index` is the record position in the response.
pub fn project_record(schema: &TableSchema, record: &Map<String, Value>, index: usize) -> Row {
    let mut values: BTreeMap<String, CellValue> = record
        .iter()
        .map(|(k, v)| (k.clone(), CellValue::from_json(v)))
        .collect();
    for column in schema.columns {
        values.entry(column.field.to_string()).or_default();
    }

    let key = values
        .get(schema.key_field())
        .map(ToString::to_string)
        .unwrap_or_default();
    let id = match schema.key {
        KeyStrategy::Field(_) if !key.trim().is_empty() => RowId::new(key),
        KeyStrategy::Field(_) => RowId::new(format!("row-{}", index)),
        KeyStrategy::FieldWithIndex(_) => RowId::new(format!("{}-{}", key, index)),
    };
    Row::new(id, values)
}

/// Maps a whole response, keeping row ids unique.
///
/// Entries that are not JSON objects are skipped.
pub fn project_records(schema: &TableSchema, records: &[Value]) -> Vec<Row> {
    let mut seen: HashSet<RowId> = HashSet::with_capacity(records.len());
    let mut rows = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            continue;
        };
        let mut row = project_record(schema, object, index);
        if seen.contains(&row.id) {
            row.id = RowId::new(format!("{}-{}", row.id, index));
        }
        while seen.contains(&row.id) {
            row.id = RowId::generate();
        }
        seen.insert(row.id.clone());
        rows.push(row);
    }
    rows
}

/// Template row for the "add" action.
pub fn blank_row(schema: &TableSchema, id: RowId) -> Row {
    let mut values = BTreeMap::new();
    for column in schema.columns {
        values.insert(column.field.to_string(), CellValue::text(""));
    }
    values
        .entry(schema.key_field().to_string())
        .or_insert_with(|| CellValue::text(""));
    for (field, value) in schema.row_defaults {
        values.insert(field.to_string(), CellValue::text(*value));
    }

    let mut row = Row::new(id, values);
    row.is_new = true;
    row
}

/// Maps a row back into a backend record (all fields, no control flags).
pub fn to_record(row: &Row) -> Map<String, Value> {
    row.values()
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json()))
        .collect()
}

/// Record sent by bulk save: the fields plus `id`, `isNew` and `isUpdated`
/// so the backend can tell inserts from updates and report back per row.
pub fn to_save_record(row: &Row) -> Value {
    let mut record = to_record(row);
    record.insert("id".to_string(), Value::String(row.id.to_string()));
    record.insert("isNew".to_string(), Value::Bool(row.is_new));
    record.insert("isUpdated".to_string(), Value::Bool(row.is_updated));
    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EMPLOYEE_SCHEMA;
    use crate::domain::a004_stores_transaction::STORES_TRANSACTION_SCHEMA;
    use serde_json::json;

    fn employee(service_no: &str, first_name: &str) -> Value {
        json!({ "ServiceNo": service_no, "FirstName": first_name, "Status": "Active" })
    }

    #[test]
    fn test_business_key_becomes_id() {
        let rows = project_records(&EMPLOYEE_SCHEMA, &[employee("E1", "Nimal")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "E1");
        assert!(!rows[0].is_new);
        assert!(!rows[0].is_updated);
    }

    #[test]
    fn test_missing_fields_are_empty_and_unknown_fields_kept() {
        let record = json!({ "ServiceNo": "E7", "Department": "Stores" });
        let rows = project_records(&EMPLOYEE_SCHEMA, &[record]);
        assert_eq!(rows[0].get("Email"), Some(&CellValue::Empty));
        assert_eq!(rows[0].text("Department"), "Stores");
    }

    #[test]
    fn test_duplicate_keys_are_disambiguated() {
        let rows = project_records(
            &EMPLOYEE_SCHEMA,
            &[employee("E1", "A"), employee("E1", "B"), json!("garbage")],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id.as_str(), "E1");
        assert_eq!(rows[1].id.as_str(), "E1-1");
    }

    #[test]
    fn test_key_with_index_strategy() {
        let records = vec![json!({ "WHcode": "STM" }), json!({ "WHcode": "STM" })];
        let rows = project_records(&STORES_TRANSACTION_SCHEMA, &records);
        assert_eq!(rows[0].id.as_str(), "STM-0");
        assert_eq!(rows[1].id.as_str(), "STM-1");
    }

    #[test]
    fn test_round_trip_preserves_business_key() {
        let original = json!({ "ServiceNo": "S-0042", "FirstName": "Kamal", "MobileNo": 771234567 });
        let rows = project_records(&EMPLOYEE_SCHEMA, &[original.clone()]);
        let record = to_record(&rows[0]);
        assert_eq!(record["ServiceNo"], original["ServiceNo"]);
        assert_eq!(record["MobileNo"], json!(771234567));
    }

    #[test]
    fn test_blank_row_applies_defaults() {
        let row = blank_row(&EMPLOYEE_SCHEMA, RowId::new("tmp-1"));
        assert!(row.is_new);
        assert_eq!(row.text("Status"), "Active");
        assert_eq!(row.text("ServiceNo"), "");
    }

    #[test]
    fn test_save_record_carries_flags() {
        let row = blank_row(&EMPLOYEE_SCHEMA, RowId::new("tmp-1"));
        let record = to_save_record(&row);
        assert_eq!(record["id"], json!("tmp-1"));
        assert_eq!(record["isNew"], json!(true));
        assert_eq!(record["isUpdated"], json!(false));
    }
}
