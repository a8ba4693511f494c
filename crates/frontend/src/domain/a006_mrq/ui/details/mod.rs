use contracts::domain::a006_mrq::MRQ_DOCUMENT;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::material_document::MaterialDocumentScreen;

/// Material requisition issued from a warehouse.
#[component]
pub fn MrqDocument() -> impl IntoView {
    view! { <MaterialDocumentScreen screen=Screen::Mrq kind=MRQ_DOCUMENT /> }
}
