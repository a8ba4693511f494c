use contracts::domain::a003_project_mat_cost::PROJECT_MAT_COST_SCHEMA;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::table_screen::TableScreen;

#[component]
pub fn ProjectMatCostList() -> impl IntoView {
    view! { <TableScreen screen=Screen::ProjectMatCost schema=&PROJECT_MAT_COST_SCHEMA /> }
}
