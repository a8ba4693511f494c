use contracts::domain::a001_employee::EMPLOYEE_SCHEMA;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::table_screen::TableScreen;

/// Employee register: add, edit and bulk-save employees.
#[component]
pub fn EmployeeList() -> impl IntoView {
    view! { <TableScreen screen=Screen::Employee schema=&EMPLOYEE_SCHEMA /> }
}
