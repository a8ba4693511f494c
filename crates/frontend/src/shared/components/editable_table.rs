//! Schema-driven table bound to a [`TableController`] signal.
//!
//! Rows in view mode read their cells straight from the controller; a row in
//! edit mode keeps typed text in a local draft and commits it field by field
//! when its Save button is pressed.

use std::collections::BTreeMap;

use contracts::shared::table::{
    ColumnSchema, FieldKind, RowId, TableController, TableError, TableSchema,
};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_class, sort_indicator};

/// Writes every changed draft into the controller, then leaves edit mode.
fn commit_drafts(
    table: &mut TableController,
    id: &RowId,
    drafts: &BTreeMap<&'static str, String>,
) -> Result<(), TableError> {
    let schema = table.schema();
    for column in schema.columns {
        let Some(raw) = drafts.get(column.field) else {
            continue;
        };
        let current = table
            .row(id)
            .map(|r| r.text(column.field))
            .ok_or_else(|| TableError::UnknownRow(id.clone()))?;
        if *raw != current {
            table.commit_input(id, column.field, raw)?;
        }
    }
    table.save_row(id)
}

fn column_style(column: &ColumnSchema) -> String {
    column
        .width
        .map(|w| format!("min-width: {}px;", w))
        .unwrap_or_default()
}

#[component]
pub fn EditableTable(
    table: RwSignal<TableController>,
    /// Row actions are disabled while a save is in flight.
    #[prop(into)]
    locked: Signal<bool>,
    /// Receives validation failures of row actions.
    on_error: Callback<TableError>,
) -> impl IntoView {
    let schema: &'static TableSchema = table.with_untracked(|t| t.schema());
    let editable = schema.is_editable();

    let row_keys = move || {
        table.with(|t| {
            t.page_rows()
                .iter()
                .map(|r| (r.id.clone(), r.is_editing()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-wrapper">
            <table class="table__data" id=format!("{}-table", schema.entity)>
                <thead>
                    <tr>
                        {schema.columns.iter().map(|column| {
                            let field = column.field;
                            if schema.sortable {
                                view! {
                                    <th
                                        class="table__header-cell table__sortable-header"
                                        style=column_style(column)
                                        on:click=move |_| table.update(|t| t.toggle_sort(field))
                                    >
                                        {column.header}
                                        <span class=move || table.with(|t| sort_class(t.sort(), field))>
                                            {move || table.with(|t| sort_indicator(t.sort(), field))}
                                        </span>
                                    </th>
                                }.into_any()
                            } else {
                                view! {
                                    <th class="table__header-cell" style=column_style(column)>
                                        {column.header}
                                    </th>
                                }.into_any()
                            }
                        }).collect_view()}
                        {editable.then(|| view! { <th class="table__header-cell">"ACTIONS"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=row_keys
                        key=|k| k.clone()
                        children=move |(id, editing)| {
                            if editing {
                                view! { <EditRow table=table id=id locked=locked on_error=on_error /> }.into_any()
                            } else {
                                view! { <ViewRow table=table id=id locked=locked on_error=on_error /> }.into_any()
                            }
                        }
                    />
                    {move || table.with(|t| t.page_rows().is_empty()).then(|| {
                        let span = schema.columns.len() + usize::from(editable);
                        view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan=span.to_string()>
                                    {move || if table.with(|t| t.is_loading()) { "Loading..." } else { "No rows" }}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || table.with(|t| t.page()))
                total_pages=Signal::derive(move || table.with(|t| t.total_pages()))
                total_count=Signal::derive(move || table.with(|t| t.visible_rows().len()))
                page_size=Signal::derive(move || table.with(|t| t.page_size()))
                on_page_change=Callback::new(move |page| table.update(|t| t.set_page(page)))
                on_page_size_change=Callback::new(move |size| table.update(|t| t.set_page_size(size)))
                page_size_options=schema.page_sizes
            />
        </div>
    }
}

#[component]
fn ViewRow(
    table: RwSignal<TableController>,
    id: RowId,
    locked: Signal<bool>,
    on_error: Callback<TableError>,
) -> impl IntoView {
    let schema = table.with_untracked(|t| t.schema());
    let id = StoredValue::new(id);

    let is_dirty = move || {
        table.with(|t| t.row(&id.get_value()).map(|r| r.is_dirty()).unwrap_or(false))
    };
    let rejection = move || {
        table.with(|t| t.rejection(&id.get_value()).map(str::to_string))
    };

    let run = move |action: fn(&mut TableController, &RowId) -> Result<(), TableError>| {
        let mut result = Ok(());
        table.update(|t| result = action(t, &id.get_value()));
        if let Err(e) = result {
            on_error.run(e);
        }
    };

    view! {
        <tr
            class="table__row"
            class:table__row--dirty=is_dirty
            class:table__row--rejected=move || rejection().is_some()
            title=move || rejection().unwrap_or_default()
        >
            {schema.columns.iter().map(|column| {
                let field = column.field;
                view! {
                    <td class="table__cell">
                        {move || table.with(|t| {
                            let text = t.row(&id.get_value()).map(|r| r.text(field)).unwrap_or_default();
                            highlight_matches(&text, t.search())
                        })}
                    </td>
                }
            }).collect_view()}
            {schema.is_editable().then(|| view! {
                <td class="table__cell table__cell--actions">
                    <button
                        class="button button--icon"
                        title="Edit"
                        disabled=move || locked.get()
                        on:click=move |_| run(TableController::begin_edit)
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        disabled=move || locked.get()
                        on:click=move |_| run(|t, id| t.delete_row(id).map(|_| ()))
                    >
                        {icon("trash")}
                    </button>
                </td>
            })}
        </tr>
    }
}

#[component]
fn EditRow(
    table: RwSignal<TableController>,
    id: RowId,
    locked: Signal<bool>,
    on_error: Callback<TableError>,
) -> impl IntoView {
    let schema = table.with_untracked(|t| t.schema());

    // Черновик: только поля, доступные для ввода
    let initial: BTreeMap<&'static str, String> = table.with_untracked(|t| {
        let Some(row) = t.row(&id) else {
            return BTreeMap::new();
        };
        schema
            .columns
            .iter()
            .filter(|c| schema.can_edit_field(c.field, row.is_new))
            .map(|c| (c.field, row.text(c.field)))
            .collect()
    });
    let drafts = RwSignal::new(initial);
    let id = StoredValue::new(id);

    let on_save = move |_| {
        let current = drafts.get_untracked();
        let mut result = Ok(());
        table.update(|t| result = commit_drafts(t, &id.get_value(), &current));
        if let Err(e) = result {
            on_error.run(e);
        }
    };
    let on_cancel = move |_| {
        let mut result = Ok(());
        table.update(|t| result = t.cancel_edit(&id.get_value()));
        if let Err(e) = result {
            on_error.run(e);
        }
    };

    view! {
        <tr class="table__row table__row--editing">
            {schema.columns.iter().map(|column| {
                let field = column.field;
                let has_draft = drafts.with_untracked(|d| d.contains_key(field));
                let cell = if has_draft {
                    draft_input(column, drafts)
                } else {
                    view! {
                        <span>
                            {move || table.with(|t| t.row(&id.get_value()).map(|r| r.text(field)).unwrap_or_default())}
                        </span>
                    }.into_any()
                };
                view! { <td class="table__cell">{cell}</td> }
            }).collect_view()}
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon button--primary"
                    title="Save"
                    disabled=move || locked.get()
                    on:click=on_save
                >
                    {icon("check")}
                </button>
                <button class="button button--icon" title="Cancel" on:click=on_cancel>
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}

fn draft_input(
    column: &'static ColumnSchema,
    drafts: RwSignal<BTreeMap<&'static str, String>>,
) -> AnyView {
    let field = column.field;
    let value = move || drafts.with(|d| d.get(field).cloned().unwrap_or_default());
    let set = move |v: String| {
        drafts.update(|d| {
            d.insert(field, v);
        })
    };

    match column.kind {
        FieldKind::Select => view! {
            <select
                class="table__editor"
                prop:value=value
                on:change=move |ev| set(event_target_value(&ev))
            >
                <option value="">""</option>
                {column.options.iter().map(|&option| view! {
                    <option value=option selected=move || value() == option>{option}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                class="table__editor"
                type=kind.input_type()
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    }
}
