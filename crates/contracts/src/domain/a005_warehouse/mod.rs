//! Warehouse master data and data-entry windows

use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("LocCode", "WAREHOUSE CODE").width(150),
    ColumnSchema::text("LocName", "WAREHOUSE NAME").width(240),
    ColumnSchema::text("Status", "STATUS").width(110),
    ColumnSchema::date("EntrySDate", "DATA ENTRY START DATE").width(180),
    ColumnSchema::date("EntryEDate", "DATA ENTRY END DATE").width(180),
];

pub const WAREHOUSE_SCHEMA: TableSchema = TableSchema {
    entity: "warehouse",
    title: "Warehouse Management",
    key: KeyStrategy::Field("LocCode"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[5, 10, 25],
    default_page_size: 5,
    load: LoadMode::OnOpen,
    list_path: "/Admin/Warehouse/GetWarehouseInfo",
    save_path: None,
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search Warehouse",
    sortable: true,
    allow_add: false,
};
