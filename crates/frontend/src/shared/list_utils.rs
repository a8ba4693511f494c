/// Утилиты для списков: подсветка совпадений, поле поиска, индикаторы сортировки
use contracts::shared::table::SortState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span class="search-highlight">{text[start..end].to_string()}</span> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of `text` matching `filter`, ignoring case.
///
/// Lower-casing may change byte lengths, so matching is done per char
/// boundary of the original text.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let hit = needle.iter().enumerate().all(|(j, n)| {
            let mut lower = chars[i + j].1.to_lowercase();
            lower.next() == Some(*n) && lower.next().is_none()
        });
        if hit {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Предыдущий таймер отменяется при drop
        pending.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    sort.map(|s| s.indicator(field)).unwrap_or(" ⇅")
}

pub fn sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_ignore_case() {
        assert_eq!(match_ranges("Colombo COLOMBO", "colombo"), vec![(0, 7), (8, 15)]);
        assert!(match_ranges("Kandy", "galle").is_empty());
    }

    #[test]
    fn test_match_ranges_keep_char_boundaries() {
        let text = "Склад STM";
        let ranges = match_ranges(text, "stm");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "STM");
    }
}
