//! Material requisition (MRQ): materials issued from a warehouse

use super::common::MaterialDocumentKind;
use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::text("MatCode", "MATERIAL CODE").width(150),
    ColumnSchema::text("MatDesc", "MATERIAL DESCRIPTION").width(240),
    ColumnSchema::text("MatSpec", "MATERIAL SPECIFICATION").width(220),
    ColumnSchema::text("UOM", "UOM").width(80),
    ColumnSchema::number("BalQty", "BALANCE QUANTITY").width(140),
    ColumnSchema::number("IssuedQty", "ISSUED QUANTITY")
        .editable()
        .width(140),
];

pub const MRQ_LINES_SCHEMA: TableSchema = TableSchema {
    entity: "mrq",
    title: "MRQ Materials",
    key: KeyStrategy::FieldWithIndex("MatCode"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[10, 25, 80],
    default_page_size: 10,
    load: LoadMode::Warehouse,
    list_path: "/Admin/Mrq/LoadMRQMaterialDetails",
    save_path: Some("/Admin/Mrq/SaveMRQDetails"),
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search MRQ Materials",
    sortable: false,
    allow_add: false,
};

pub const MRQ_DOCUMENT: MaterialDocumentKind = MaterialDocumentKind {
    code: "MRQ",
    title: "MRQ Details",
    lines: &MRQ_LINES_SCHEMA,
    quantity_field: "IssuedQty",
    default_warehouse: "STM",
};
