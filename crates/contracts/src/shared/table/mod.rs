//! Generic client-side table engine
//!
//! Every screen of the application is the same pipeline:
//! backend records → [`projection`] → [`TableController`] (filter, sort,
//! paging, edit state, dirty flags) → bulk save → backend.
//!
//! ```rust,ignore
//! use contracts::domain::a001_employee::EMPLOYEE_SCHEMA;
//! use contracts::shared::table::TableController;
//!
//! let mut table = TableController::new(&EMPLOYEE_SCHEMA);
//! let ticket = table.begin_load();
//! table.finish_load(ticket, &records);
//! table.set_search("colombo");
//! for row in table.page_rows() { /* render */ }
//! ```

mod controller;
mod error;
mod filter;
mod pagination;
pub mod projection;
mod row;
mod save;
mod schema;
mod sort;

pub use controller::{LoadTicket, TableController};
pub use error::{ErrorKind, TableError};
pub use filter::{matches_filter, row_haystack};
pub use pagination::Pagination;
pub use row::{CellValue, Row, RowId, RowMode};
pub use save::{select_dirty, RejectedRow, SavePlan, SaveReport};
pub use schema::{
    ColumnSchema, ExportTarget, FieldKind, KeyStrategy, LoadMode, SaveScope, TableSchema,
};
pub use sort::{SortDirection, SortState};
