use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigation step of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Previous,
    Next,
    Last,
}

impl Step {
    /// Page to go to, `None` when the step is unavailable.
    fn target(self, page: usize, total_pages: usize) -> Option<usize> {
        let last = total_pages.checked_sub(1)?;
        let target = match self {
            Step::First => 0,
            Step::Previous => page.checked_sub(1)?,
            Step::Next => page + 1,
            Step::Last => last,
        };
        (target <= last && target != page).then_some(target)
    }

    fn icon(self) -> &'static str {
        match self {
            Step::First => "chevrons-left",
            Step::Previous => "chevron-left",
            Step::Next => "chevron-right",
            Step::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Step::First => "First page",
            Step::Previous => "Previous page",
            Step::Next => "Next page",
            Step::Last => "Last page",
        }
    }
}

/// "Rows 6-10 of 23"
fn rows_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "No rows".to_string();
    }
    let first = page * page_size + 1;
    let last = ((page + 1) * page_size).min(total_count);
    format!("Rows {}-{} of {}", first, last, total_count)
}

/// Pager under an editable table: step buttons, row range and page size.
#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: &'static [usize],
) -> impl IntoView {
    let step_button = move |step: Step| {
        let target = move || step.target(current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=step.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(step.icon())}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {step_button(Step::First)}
            {step_button(Step::Previous)}
            <span class="pagination-info">
                {move || rows_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            {step_button(Step::Next)}
            {step_button(Step::Last)}
            <select
                class="page-size-select"
                title="Rows per page"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {page_size_options
                    .iter()
                    .map(|&size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_targets() {
        assert_eq!(Step::First.target(2, 3), Some(0));
        assert_eq!(Step::Previous.target(0, 3), None);
        assert_eq!(Step::Next.target(1, 3), Some(2));
        assert_eq!(Step::Next.target(2, 3), None);
        assert_eq!(Step::Last.target(2, 3), None);
        assert_eq!(Step::Last.target(0, 0), None);
    }

    #[test]
    fn test_rows_label() {
        assert_eq!(rows_label(1, 5, 23), "Rows 6-10 of 23");
        assert_eq!(rows_label(4, 5, 23), "Rows 21-23 of 23");
        assert_eq!(rows_label(0, 5, 0), "No rows");
    }
}
