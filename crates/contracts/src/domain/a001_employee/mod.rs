//! Employee register

use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

pub const EMPLOYEE_STATUSES: &[&str] = &["Active", "Inactive"];

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("ServiceNo", "SERVICE NO").width(210),
    ColumnSchema::text("FirstName", "FIRST NAME").editable().width(220),
    ColumnSchema::text("LastName", "LAST NAME").editable().width(220),
    ColumnSchema::text("MobileNo", "MOBILE NO").editable().width(220),
    ColumnSchema::text("Email", "EMAIL").editable().width(210),
    ColumnSchema::text("NIC", "NIC").editable().width(180),
    ColumnSchema::select("Status", "STATUS", EMPLOYEE_STATUSES)
        .editable()
        .width(160),
];

pub const EMPLOYEE_SCHEMA: TableSchema = TableSchema {
    entity: "employee",
    title: "Employees",
    key: KeyStrategy::Field("ServiceNo"),
    columns: COLUMNS,
    row_defaults: &[("Status", "Active")],
    page_sizes: &[9, 25, 50, 100],
    default_page_size: 9,
    load: LoadMode::OnOpen,
    list_path: "/Admin/Employee/GetEmployeeDetails",
    save_path: Some("/Admin/Employee/PostEmployeeManDetails"),
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search Employee...",
    sortable: false,
    allow_add: true,
};
