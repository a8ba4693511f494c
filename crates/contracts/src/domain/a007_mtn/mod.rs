//! Material transfer note (MTN): materials moved between warehouses

use super::common::MaterialDocumentKind;
use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("MatCode", "MATERIAL CODE").width(150),
    ColumnSchema::text("MatDesc", "DESCRIPTION").width(240),
    ColumnSchema::text("MatSpec", "SPECIFICATION").width(220),
    ColumnSchema::text("UOM", "UOM").width(80),
    ColumnSchema::number("BalQty", "BALANCE QUANTITY").width(140),
    ColumnSchema::number("TransferredQty", "TRANSFERRED QUANTITY")
        .editable()
        .width(160),
    ColumnSchema::number("AvgRate", "AVG RATE").width(110),
    ColumnSchema::number("Value", "VALUE").width(120),
];

pub const MTN_LINES_SCHEMA: TableSchema = TableSchema {
    entity: "mtn",
    title: "MTN Materials",
    key: KeyStrategy::FieldWithIndex("MatCode"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[10, 25, 80],
    default_page_size: 10,
    load: LoadMode::Warehouse,
    list_path: "/Admin/Mtn/LoadMTNMaterialDetails",
    save_path: Some("/Admin/Mtn/SaveMTNDetails"),
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search MTN Materials",
    sortable: false,
    allow_add: false,
};

pub const MTN_DOCUMENT: MaterialDocumentKind = MaterialDocumentKind {
    code: "MTN",
    title: "MTN Details",
    lines: &MTN_LINES_SCHEMA,
    quantity_field: "TransferredQty",
    default_warehouse: "STM",
};
