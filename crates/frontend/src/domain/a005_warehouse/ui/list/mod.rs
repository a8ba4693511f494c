use contracts::domain::a005_warehouse::WAREHOUSE_SCHEMA;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::table_screen::TableScreen;

/// Warehouse register, sortable by any column.
#[component]
pub fn WarehouseList() -> impl IntoView {
    view! { <TableScreen screen=Screen::Warehouse schema=&WAREHOUSE_SCHEMA /> }
}
