use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::domain::Screen;

/// Open tabs and panel visibility, shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<Screen>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active screen from `?active=` and keeps the URL in sync.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active").and_then(|key| Screen::from_key(key)) {
            Some(screen) => self.open_tab(screen),
            None => self.open_tab(Screen::Employee),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(screen) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", screen.key())])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, screen: Screen) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.screen == screen));
        if !exists {
            log::debug!("open_tab: {}", screen.key());
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    screen,
                    dirty: false,
                })
            });
        }
        self.activate_tab(screen);
    }

    pub fn activate_tab(&self, screen: Screen) {
        self.active.set(Some(screen));
    }

    pub fn close_tab(&self, screen: Screen) {
        log::debug!("close_tab: {}", screen.key());
        self.opened.update(|tabs| tabs.retain(|tab| tab.screen != screen));
        if self.active.with_untracked(|active| *active == Some(screen)) {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.screen));
            self.active.set(next_active);
        }
    }

    /// Marks a tab as holding unsaved changes.
    pub fn set_dirty(&self, screen: Screen, dirty: bool) {
        let changed = self.opened.with_untracked(|tabs| {
            tabs.iter()
                .any(|tab| tab.screen == screen && tab.dirty != dirty)
        });
        if changed {
            self.opened.update(|tabs| {
                if let Some(tab) = tabs.iter_mut().find(|t| t.screen == screen) {
                    tab.dirty = dirty;
                }
            });
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub screen: Screen,
    pub dirty: bool,
}
