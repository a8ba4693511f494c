//! Stock balance per warehouse and material

use crate::shared::table::{
    ColumnSchema, ExportTarget, KeyStrategy, LoadMode, SaveScope, TableSchema,
};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("LocCode", "WAREHOUSE").width(140),
    ColumnSchema::text("MatCode", "MATERIAL CODE").width(160),
    ColumnSchema::text("MatDesc", "DESCRIPTION").width(260),
    ColumnSchema::text("Category", "CATEGORY").width(140),
    ColumnSchema::text("UOM", "UOM").width(90),
    ColumnSchema::number("AvgPrice", "AVG PRICE").width(120),
    ColumnSchema::number("BalQty", "BALANCE QTY").width(120),
    ColumnSchema::number("BalValue", "BALANCE VALUE").width(140),
];

pub const STOCK_BALANCE_SCHEMA: TableSchema = TableSchema {
    entity: "stock_balance",
    title: "Stock Balance",
    key: KeyStrategy::FieldWithIndex("Warehouse"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[5, 10, 20],
    default_page_size: 5,
    load: LoadMode::DateRange,
    list_path: "/Admin/StockBlanceDetails/GetStockBalanceDetails",
    save_path: None,
    save_scope: SaveScope::WorkingSet,
    export: Some(ExportTarget {
        file_name: "StockBalance.xlsx",
        sheet_name: "StockBalance",
    }),
    search_placeholder: "Search",
    sortable: true,
    allow_add: false,
};
