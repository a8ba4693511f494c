use contracts::domain::a002_stock_balance::STOCK_BALANCE_SCHEMA;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::table_screen::TableScreen;

/// Stock balance per warehouse for a date range, with xlsx export.
#[component]
pub fn StockBalanceList() -> impl IntoView {
    view! { <TableScreen screen=Screen::StockBalance schema=&STOCK_BALANCE_SCHEMA /> }
}
