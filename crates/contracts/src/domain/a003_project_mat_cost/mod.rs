//! Material cost booked against projects

use crate::shared::table::{ColumnSchema, KeyStrategy, LoadMode, SaveScope, TableSchema};

const COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::date("MatDate", "DATE").width(120),
    ColumnSchema::text("LocCode", "WAREHOUSE").width(120),
    ColumnSchema::text("MatCode", "MATERIAL CODE").width(150),
    ColumnSchema::text("DocumentType", "DOC TYPE").width(110),
    ColumnSchema::text("DocumentNo", "DOC NO").width(130),
    ColumnSchema::text("MatDescription", "DESCRIPTION").width(240),
    ColumnSchema::text("MatUnit", "UNIT").width(90),
    ColumnSchema::number("Quantity", "QUANTITY").width(110),
    ColumnSchema::number("Value", "VALUE").width(120),
    ColumnSchema::text("ProjectName", "PROJECT").width(200),
    ColumnSchema::text("OriginatedBy", "ORIGINATED BY").width(150),
    ColumnSchema::number("AvgRate", "AVG RATE").width(110),
];

pub const PROJECT_MAT_COST_SCHEMA: TableSchema = TableSchema {
    entity: "project_mat_cost",
    title: "Project Material Cost",
    key: KeyStrategy::FieldWithIndex("LocCode"),
    columns: COLUMNS,
    row_defaults: &[],
    page_sizes: &[10, 25, 50],
    default_page_size: 10,
    load: LoadMode::DateRange,
    list_path: "/Admin/ProjectMatCost/GetProjectMatCost",
    save_path: None,
    save_scope: SaveScope::WorkingSet,
    export: None,
    search_placeholder: "Search Project Material...",
    sortable: true,
    allow_add: false,
};
