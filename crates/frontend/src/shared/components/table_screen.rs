//! Standard list screen: toolbar, optional date-range loader, editable table.

use contracts::shared::date_range::{DateRange, DateRangeLoader as DateRangeState};
use contracts::shared::table::{LoadMode, SavePlan, TableController, TableError, TableSchema};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::domain::Screen;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::{fetch_records, save_rows};
use crate::shared::components::date_range_loader::DateRangeLoader;
use crate::shared::components::editable_table::EditableTable;
use crate::shared::components::notice::{report_error, Notice, NoticeBar};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

type Query = Vec<(&'static str, String)>;

/// Issues a fetch and applies it unless a newer one was started meanwhile.
///
/// `on_applied` runs only when this response replaced the rows.
pub fn spawn_load<F>(
    table: RwSignal<TableController>,
    notice: RwSignal<Option<Notice>>,
    query: Query,
    on_applied: F,
) where
    F: FnOnce() + 'static,
{
    let Some(ticket) = table.try_update(|t| t.begin_load()) else {
        return;
    };
    let schema = table.with_untracked(|t| t.schema());
    spawn_local(async move {
        match fetch_records(schema, &query).await {
            Ok(records) => {
                let applied = table
                    .try_update(|t| t.finish_load(ticket, &records))
                    .unwrap_or(false);
                if applied {
                    log::info!("{}: loaded {} rows", schema.entity, records.len());
                    notice.set(None);
                    on_applied();
                } else {
                    log::debug!("{}: superseded response dropped", schema.entity);
                }
            }
            Err(e) => {
                let current = table.try_update(|t| t.fail_load(ticket)).unwrap_or(false);
                if current {
                    report_error(notice, schema.entity, &e);
                }
            }
        }
    });
}

/// Posts every dirty row and applies the per-row outcome.
///
/// `body` turns the plan into the request payload; an error there aborts the
/// save before anything is sent.
pub fn spawn_save<F>(
    table: RwSignal<TableController>,
    notice: RwSignal<Option<Notice>>,
    saving: RwSignal<bool>,
    query: Query,
    body: F,
) where
    F: FnOnce(&TableController, &SavePlan) -> Result<Value, TableError>,
{
    let schema = table.with_untracked(|t| t.schema());
    let prepared = table.with_untracked(|t| {
        let plan = t.plan_save()?;
        let payload = body(t, &plan)?;
        Ok::<_, TableError>((plan, payload))
    });
    let (plan, payload) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            report_error(notice, schema.entity, &e);
            return;
        }
    };
    saving.set(true);
    spawn_local(async move {
        let result = save_rows(schema, &plan, &query, &payload).await;
        saving.set(false);
        match result {
            Ok(report) => {
                table.update(|t| {
                    t.apply_save_report(&plan, &report);
                });
                notice.set(Some(save_notice(plan.len(), report.rejected.len())));
            }
            Err(e) => report_error(notice, schema.entity, &e),
        }
    });
}

pub fn save_notice(submitted: usize, rejected: usize) -> Notice {
    if rejected == 0 {
        Notice::Success(format!("Saved {} row(s)", submitted))
    } else {
        Notice::Warning(format!(
            "{} of {} row(s) were rejected; they stay marked for the next save",
            rejected, submitted
        ))
    }
}

/// Keeps the tab's unsaved-changes marker in sync with the controller.
pub fn track_dirty(screen: Screen, table: RwSignal<TableController>) {
    if let Some(ctx) = use_context::<AppGlobalContext>() {
        Effect::new(move |_| {
            let dirty = table.with(|t| t.can_save());
            ctx.set_dirty(screen, dirty);
        });
    }
}

#[component]
pub fn TableScreen(screen: Screen, schema: &'static TableSchema) -> impl IntoView {
    let table = RwSignal::new(TableController::new(schema));
    let notice = RwSignal::new(None::<Notice>);
    let saving = RwSignal::new(false);
    let range = RwSignal::new(DateRangeState::new());
    let on_error = Callback::new(move |e: TableError| report_error(notice, schema.entity, &e));

    track_dirty(screen, table);

    if schema.load == LoadMode::OnOpen {
        spawn_load(table, notice, Vec::new(), || ());
    }

    let loading = Signal::derive(move || table.with(|t| t.is_loading()));
    let search = Signal::derive(move || table.with(|t| t.search().to_string()));

    let on_add = move |_| {
        if let Some(Err(e)) = table.try_update(|t| t.add_row()) {
            on_error.run(e);
        }
    };
    let on_save_all =
        move |_| spawn_save(table, notice, saving, Vec::new(), |_, plan| Ok(plan.body()));
    let on_reload = move |_| spawn_load(table, notice, Vec::new(), || ());
    let on_export = move |_| {
        let result = table.with_untracked(|t| {
            crate::shared::export::export_rows(schema, &t.visible_rows())
        });
        if let Err(e) = result {
            on_error.run(e);
        }
    };
    let on_range = Callback::new(move |r: DateRange| spawn_load(table, notice, r.query(), || ()));

    view! {
        <PageFrame page_id=screen.page_id() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{schema.title}</h1>
                    <Badge>{move || table.with(|t| t.rows().len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |term: String| table.update(|t| t.set_search(&term)))
                        placeholder=schema.search_placeholder
                    />
                    {(schema.is_editable() && schema.allow_add).then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=on_add>
                            {icon("plus")}
                            " Add"
                        </Button>
                    })}
                    {schema.is_editable().then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_save_all
                            disabled=Signal::derive(move || saving.get() || !table.with(|t| t.can_save()))
                        >
                            {icon("save")}
                            {move || if saving.get() { " Saving..." } else { " Save All" }}
                        </Button>
                    })}
                    {(schema.load == LoadMode::OnOpen).then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=on_reload disabled=loading>
                            {icon("refresh")}
                            {move || if loading.get() { " Loading..." } else { " Reload" }}
                        </Button>
                    })}
                    {schema.export.is_some().then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                            {icon("download")}
                            " Export"
                        </Button>
                    })}
                </div>
            </div>

            <div class="page__content">
                {(schema.load == LoadMode::DateRange).then(|| view! {
                    <DateRangeLoader state=range loading=loading on_load=on_range on_invalid=on_error />
                })}
                <NoticeBar notice=notice />
                {move || loading.get().then(|| view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                })}
                <EditableTable table=table locked=saving on_error=on_error />
            </div>
        </PageFrame>
    }
}
