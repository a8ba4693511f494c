use chrono::{Datelike, NaiveDate, Utc};
use contracts::shared::date_range::{DateRange, DateRangeLoader as DateRangeState};
use contracts::shared::table::TableError;
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Первый и последний день месяца, в который попадает `date`
fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = date.with_day(1)?;
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)?
    };
    Some((start, next.pred_opt()?))
}

/// DateRangeLoader - две даты и кнопки Load / Reload.
///
/// Validation failures go to `on_invalid`; nothing is fetched in that case.
#[component]
pub fn DateRangeLoader(
    state: RwSignal<DateRangeState>,
    #[prop(into)]
    loading: Signal<bool>,
    /// Вызывается с проверенным диапазоном
    on_load: Callback<DateRange>,
    on_invalid: Callback<TableError>,
) -> impl IntoView {
    let submit = move || match state.with_untracked(|s| s.submit()) {
        Ok(range) => on_load.run(range),
        Err(e) => on_invalid.run(e),
    };
    let reload = move || match state.with_untracked(|s| s.reload()) {
        Ok(range) => on_load.run(range),
        Err(e) => on_invalid.run(e),
    };

    let on_current_month = move |_| {
        if let Some((start, end)) = month_bounds(Utc::now().date_naive()) {
            state.update(|s| {
                s.set_start(&start.format(DATE_FORMAT).to_string());
                s.set_end(&end.format(DATE_FORMAT).to_string());
            });
        }
    };

    view! {
        <Flex class="date-range-loader" align=FlexAlign::Center gap=FlexGap::Small>
            <label class="date-range-loader__label">"Start date"</label>
            <input
                type="date"
                class="date-range-loader__input"
                prop:value=move || state.with(|s| s.start().to_string())
                on:input=move |ev| state.update(|s| s.set_start(&event_target_value(&ev)))
            />
            <label class="date-range-loader__label">"End date"</label>
            <input
                type="date"
                class="date-range-loader__input"
                prop:value=move || state.with(|s| s.end().to_string())
                on:input=move |ev| state.update(|s| s.set_end(&event_target_value(&ev)))
            />
            <Button size=ButtonSize::Small on_click=on_current_month>
                "This month"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| submit()
                disabled=loading
            >
                "Load"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| reload()
                disabled=loading
            >
                {crate::shared::icons::icon("refresh")}
                " Reload"
            </Button>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let (start, end) = month_bounds(d).unwrap();
        assert_eq!(start.to_string(), "2024-02-01");
        assert_eq!(end.to_string(), "2024-02-29");

        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(month_bounds(d).unwrap().1.to_string(), "2023-12-31");
    }
}
