pub mod a001_employee;
pub mod a002_stock_balance;
pub mod a003_project_mat_cost;
pub mod a004_stores_transaction;
pub mod a005_warehouse;
pub mod a006_mrq;
pub mod a007_mtn;
pub mod common;

use crate::shared::table::TableSchema;

/// Every list screen, in menu order.
pub fn all_schemas() -> [&'static TableSchema; 7] {
    [
        &a001_employee::EMPLOYEE_SCHEMA,
        &a002_stock_balance::STOCK_BALANCE_SCHEMA,
        &a003_project_mat_cost::PROJECT_MAT_COST_SCHEMA,
        &a004_stores_transaction::STORES_TRANSACTION_SCHEMA,
        &a005_warehouse::WAREHOUSE_SCHEMA,
        &a006_mrq::MRQ_LINES_SCHEMA,
        &a007_mtn::MTN_LINES_SCHEMA,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_are_consistent() {
        for schema in all_schemas() {
            assert!(
                schema.page_sizes.contains(&schema.default_page_size),
                "{}: default page size not offered",
                schema.entity
            );
            assert!(!schema.columns.is_empty(), "{}", schema.entity);
            if let Some(key) = schema.column(schema.key_field()) {
                assert!(!key.editable, "{}: business key must be read-only", schema.entity);
            }
            assert!(schema.list_path.starts_with("/Admin/"), "{}", schema.entity);
        }
    }

    #[test]
    fn test_entity_names_are_unique() {
        let schemas = all_schemas();
        for (i, a) in schemas.iter().enumerate() {
            for b in &schemas[i + 1..] {
                assert_ne!(a.entity, b.entity);
            }
        }
    }
}
