use super::row::Row;
use super::schema::TableSchema;

/// All field values of a row joined by a space: schema columns in order,
/// then any extra backend fields in name order.
pub fn row_haystack(row: &Row, schema: &TableSchema) -> String {
    let mut parts: Vec<String> = schema.columns.iter().map(|c| row.text(c.field)).collect();
    parts.extend(
        row.values()
            .iter()
            .filter(|(field, _)| schema.column(field).is_none())
            .map(|(_, value)| value.to_string()),
    );
    parts.join(" ")
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_filter(row: &Row, schema: &TableSchema, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    row_haystack(row, schema)
        .to_lowercase()
        .contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EMPLOYEE_SCHEMA;
    use crate::shared::table::projection::project_records;
    use serde_json::json;

    fn rows() -> Vec<Row> {
        project_records(
            &EMPLOYEE_SCHEMA,
            &[
                json!({ "ServiceNo": "E1", "FirstName": "Nimal", "LastName": "Perera", "Status": "Active" }),
                json!({ "ServiceNo": "E2", "FirstName": "Sunil", "LastName": "Silva", "Status": "Inactive", "Grade": 7 }),
            ],
        )
    }

    #[test]
    fn test_empty_term_matches_every_row() {
        for row in rows() {
            assert!(matches_filter(&row, &EMPLOYEE_SCHEMA, ""));
        }
    }

    #[test]
    fn test_every_substring_of_the_haystack_matches() {
        let rows = rows();
        let row = &rows[0];
        let haystack = row_haystack(row, &EMPLOYEE_SCHEMA);
        for start in 0..haystack.len() {
            for end in start + 1..=haystack.len() {
                let term = haystack[start..end].to_uppercase();
                assert!(matches_filter(row, &EMPLOYEE_SCHEMA, &term), "term {:?}", term);
            }
        }
    }

    #[test]
    fn test_match_spans_fields_and_extra_values() {
        let rows = rows();
        assert!(matches_filter(&rows[0], &EMPLOYEE_SCHEMA, "nimal perera"));
        assert!(matches_filter(&rows[1], &EMPLOYEE_SCHEMA, "inactive 7"));
        assert!(!matches_filter(&rows[0], &EMPLOYEE_SCHEMA, "silva"));
    }
}
