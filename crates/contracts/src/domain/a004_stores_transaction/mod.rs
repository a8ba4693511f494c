//! Stores transactions (issues, receipts, transfers) per warehouse

use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("WHcode", "WAREHOUSE CODE").width(130),
    ColumnSchema::text("DocType", "DOC TYPE").width(110),
    ColumnSchema::text("DocNo", "DOC NO").width(130),
    ColumnSchema::text("MatCode", "MATERIAL CODE").width(150),
    ColumnSchema::text("MatDesc", "MATERIAL DESC").width(240),
    ColumnSchema::text("Unit", "UNIT").width(80),
    ColumnSchema::number("Qty", "QUANTITY").width(100),
    ColumnSchema::number("Value", "VALUE").width(120),
    ColumnSchema::text("Project", "PROJECT").width(180),
    ColumnSchema::text("OriginatedBy", "ORIGINATED BY").width(150),
    ColumnSchema::date("Date", "DATE").width(120),
    ColumnSchema::number("AvgRate", "AVG RATE").width(110),
];

pub const STORES_TRANSACTION_SCHEMA: TableSchema = TableSchema {
    entity: "stores_transaction",
    title: "Stores Transactions",
    key: KeyStrategy::FieldWithIndex("WHcode"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[25, 50, 100],
    default_page_size: 25,
    load: LoadMode::DateRange,
    list_path: "/Admin/StoresTransaction/GetStoresTransactions",
    save_path: None,
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search Transactions...",
    sortable: true,
    allow_add: false,
};
