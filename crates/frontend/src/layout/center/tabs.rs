use crate::domain::Screen;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Tab header with the unsaved-changes marker and a close button.
#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let screen = tab.screen;
    let is_active = Memo::new(move |_| ctx.active.get() == Some(screen));
    let is_dirty = move || {
        ctx.opened
            .with(|tabs| tabs.iter().any(|t| t.screen == screen && t.dirty))
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(screen);
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate_tab(screen)>
            <span>{screen.label()}</span>
            {move || if is_dirty() { " (*)" } else { "" }}
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab body. Hidden instead of unmounted so each screen keeps its state.
#[component]
fn TabPage(screen: Screen) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_active = move || ctx.active.get() == Some(screen);

    log::debug!("TabPage created: {}", screen.key());
    on_cleanup(move || log::debug!("TabPage destroyed: {}", screen.key()));

    view! {
        <div class="tab-page" style:display=move || if is_active() { "block" } else { "none" }>
            {screen.render()}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.screen
                    children=move |tab| view! { <TabHeader tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.screen
                    children=move |tab: TabData| view! { <TabPage screen=tab.screen /> }
                />
            </div>
        </div>
    }
}
