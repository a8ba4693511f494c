use std::cmp::Ordering;

use super::row::{CellValue, Row};
use super::schema::{FieldKind, TableSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field flips the direction, another field starts ascending.
    pub fn toggled(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(s) if s.field == field => SortState {
                field: s.field.clone(),
                direction: match s.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortState {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field != field {
            return " ⇅";
        }
        match self.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

fn compare_cells(kind: FieldKind, a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    let a = a.cloned().unwrap_or_default();
    let b = b.cloned().unwrap_or_default();
    if kind == FieldKind::Number {
        // Числа идут первыми, нечисловой текст после них
        match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => return x.total_cmp(&y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }
    }
    a.to_string()
        .to_lowercase()
        .cmp(&b.to_string().to_lowercase())
}

/// Stable sort, equal keys keep collection order.
pub(crate) fn sort_rows(rows: &mut [&Row], schema: &TableSchema, sort: &SortState) {
    let kind = schema
        .column(&sort.field)
        .map(|c| c.kind)
        .unwrap_or_default();
    rows.sort_by(|a, b| {
        let cmp = compare_cells(kind, a.get(&sort.field), b.get(&sort.field));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_warehouse::WAREHOUSE_SCHEMA;
    use crate::shared::table::projection::project_records;
    use serde_json::json;

    #[test]
    fn test_toggle_cycle() {
        let s = SortState::toggled(None, "LocCode");
        assert_eq!(s.direction, SortDirection::Ascending);
        let s = SortState::toggled(Some(&s), "LocCode");
        assert_eq!(s.direction, SortDirection::Descending);
        let s = SortState::toggled(Some(&s), "LocName");
        assert_eq!(s.field, "LocName");
        assert_eq!(s.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_is_stable_and_case_insensitive() {
        let rows = project_records(
            &WAREHOUSE_SCHEMA,
            &[
                json!({ "LocCode": "W3", "LocName": "b", "Status": "Active" }),
                json!({ "LocCode": "W1", "LocName": "A", "Status": "Closed" }),
                json!({ "LocCode": "W2", "LocName": "c", "Status": "Active" }),
            ],
        );
        let mut refs: Vec<&Row> = rows.iter().collect();
        let by_status = SortState { field: "Status".into(), direction: SortDirection::Ascending };
        sort_rows(&mut refs, &WAREHOUSE_SCHEMA, &by_status);
        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["W3", "W2", "W1"]);

        let by_name = SortState { field: "LocName".into(), direction: SortDirection::Descending };
        sort_rows(&mut refs, &WAREHOUSE_SCHEMA, &by_name);
        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["W2", "W3", "W1"]);
    }

    #[test]
    fn test_number_column_puts_text_after_numbers() {
        use crate::domain::a002_stock_balance::STOCK_BALANCE_SCHEMA;

        let rows = project_records(
            &STOCK_BALANCE_SCHEMA,
            &[
                json!({ "Warehouse": "W", "BalQty": 10 }),
                json!({ "Warehouse": "W", "BalQty": "5x" }),
                json!({ "Warehouse": "W", "BalQty": 9 }),
                json!({ "Warehouse": "W", "BalQty": "" }),
                json!({ "Warehouse": "W", "BalQty": "1" }),
            ],
        );
        let mut refs: Vec<&Row> = rows.iter().collect();
        let by_qty = SortState { field: "BalQty".into(), direction: SortDirection::Ascending };
        sort_rows(&mut refs, &STOCK_BALANCE_SCHEMA, &by_qty);
        let qty: Vec<String> = refs.iter().map(|r| r.text("BalQty")).collect();
        assert_eq!(qty, vec!["1", "9", "10", "", "5x"]);
    }
}
