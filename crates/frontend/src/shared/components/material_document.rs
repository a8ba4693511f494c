//! MRQ / MTN document screen: header form plus editable material lines.

use chrono::Utc;
use contracts::domain::common::{
    DocumentHeader, HeaderField, MaterialDocumentKind, MaterialDocumentRequest,
};
use contracts::shared::table::{TableController, TableError};
use leptos::prelude::*;
use thaw::*;

use crate::domain::Screen;
use crate::shared::components::editable_table::EditableTable;
use crate::shared::components::notice::{report_error, Notice, NoticeBar};
use crate::shared::components::table_screen::{spawn_load, spawn_save, track_dirty};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Text input bound to one header field.
#[component]
fn HeaderInput(field: HeaderField, header: RwSignal<DocumentHeader>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{field.label()}</label>
            <input
                class="form__input"
                type=field.input_type()
                prop:value=move || header.with(|h| h.field(field).to_string())
                on:input=move |ev| header.update(|h| h.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn MaterialDocumentScreen(screen: Screen, kind: MaterialDocumentKind) -> impl IntoView {
    let schema = kind.lines;
    let table = RwSignal::new(TableController::new(schema));
    let header = RwSignal::new(DocumentHeader::new(&kind, Utc::now().date_naive()));
    let notice = RwSignal::new(None::<Notice>);
    let saving = RwSignal::new(false);
    // Склад, для которого загружены строки и остатки
    let loaded_warehouse = RwSignal::new(None::<String>);
    let on_error = Callback::new(move |e: TableError| report_error(notice, schema.entity, &e));

    track_dirty(screen, table);

    let load_lines = move || {
        let warehouse = header.with_untracked(|h| h.warehouse.clone());
        if warehouse.trim().is_empty() {
            on_error.run(TableError::Validation("Warehouse is required".to_string()));
            return;
        }
        spawn_load(table, notice, kind.warehouse_query(&warehouse), move || {
            loaded_warehouse.set(Some(warehouse.trim().to_string()))
        });
    };
    load_lines();

    let on_save = move |_| {
        let current = header.get_untracked();
        let loaded = loaded_warehouse.get_untracked();
        let query = kind.warehouse_query(&current.warehouse);
        spawn_save(table, notice, saving, query, move |t, plan| {
            let request = MaterialDocumentRequest::build(
                &kind,
                &current,
                loaded.as_deref(),
                plan,
                &t.dirty_rows(),
            )?;
            serde_json::to_value(&request).map_err(|e| TableError::Decode(e.to_string()))
        });
    };
    let on_reset = move |_| {
        header.set(DocumentHeader::new(&kind, Utc::now().date_naive()));
        load_lines();
    };

    let loading = Signal::derive(move || table.with(|t| t.is_loading()));
    let search = Signal::derive(move || table.with(|t| t.search().to_string()));

    view! {
        <PageFrame page_id=screen.page_id() category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{kind.title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get() || !table.with(|t| t.can_save()))
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                        "New document"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="form__grid">
                    {HeaderField::ALL
                        .into_iter()
                        .map(|field| view! { <HeaderInput field=field header=header /> })
                        .collect_view()}
                </div>

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_lines()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Load materials"
                    </Button>
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |term: String| table.update(|t| t.set_search(&term)))
                        placeholder=schema.search_placeholder
                    />
                </Flex>

                <NoticeBar notice=notice />
                <EditableTable table=table locked=saving on_error=on_error />
            </div>
        </PageFrame>
    }
}
