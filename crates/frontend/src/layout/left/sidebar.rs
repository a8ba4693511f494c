//! Sidebar with collapsible menu groups

use crate::domain::{Screen, ScreenGroup};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты при старте
    let expanded_groups = RwSignal::new(ScreenGroup::ALL.to_vec());

    view! {
        <div class="app-sidebar__content">
            {ScreenGroup::ALL.into_iter().map(|group| {
                let screens: Vec<Screen> = Screen::ALL
                    .into_iter()
                    .filter(|s| s.group() == group)
                    .collect();
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|g| *g == group) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon())}
                                <span>{group.label()}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group)>
                            <div class="app-sidebar__children">
                                {screens.iter().map(|&screen| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.get() == Some(screen)
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open_tab(screen)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(screen.icon())}
                                            <span>{screen.label()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
