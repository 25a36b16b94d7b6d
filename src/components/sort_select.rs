//! Sort Select Component
//!
//! Single-select dropdown over the four sort options.

use leptos::prelude::*;
use voto_listing::SortOption;

#[component]
pub fn SortSelect(
    #[prop(into)] sort: Signal<SortOption>,
    #[prop(into)] on_change: Callback<SortOption>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            prop:value=move || sort.get().as_str()
            on:change=move |ev| on_change.run(SortOption::parse_or_default(&event_target_value(&ev)))
        >
            {SortOption::ALL.into_iter().map(|option| view! {
                <option value=option.as_str() selected=move || sort.get() == option>
                    {option.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
