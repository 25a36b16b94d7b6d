//! Search & Filter Controls
//!
//! Search box, party filter and sort dropdown above the grid.

use std::collections::BTreeSet;

use leptos::prelude::*;
use voto_listing::{CategoryOption, SortOption};

use crate::components::{CategoryFilter, SortSelect};

#[component]
pub fn SearchFilterControls(
    search: ReadSignal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] category_options: Signal<Vec<CategoryOption>>,
    selected_categories: RwSignal<BTreeSet<String>>,
    #[prop(into)] sort: Signal<SortOption>,
    #[prop(into)] on_sort: Callback<SortOption>,
) -> impl IntoView {
    view! {
        <div class="search-filter-controls">
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar candidato..."
                    autocomplete="off"
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
            <div class="filter-row">
                <CategoryFilter options=category_options selected=selected_categories />
                <SortSelect sort=sort on_change=on_sort />
            </div>
        </div>
    }
}
