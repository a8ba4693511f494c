use contracts::domain::a007_mtn::MTN_DOCUMENT;
use leptos::prelude::*;

use crate::domain::Screen;
use crate::shared::components::material_document::MaterialDocumentScreen;

/// Material transfer note between warehouses.
#[component]
pub fn MtnDocument() -> impl IntoView {
    view! { <MaterialDocumentScreen screen=Screen::Mtn kind=MTN_DOCUMENT /> }
}
