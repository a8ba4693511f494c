use contracts::domain::a004_stores_transaction::STORES_TRANSACTION_SCHEMA;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::table_screen::TableScreen;

#[component]
pub fn StoresTransactionList() -> impl IntoView {
    view! { <TableScreen screen=Screen::StoresTransaction schema=&STORES_TRANSACTION_SCHEMA /> }
}
