//! Pagination Controls
//!
//! Page navigator plus page-size selector.

use leptos::prelude::*;
use voto_listing::{page_links, PageLink, PAGE_SIZE_OPTIONS};

#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] has_prev: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] page_size: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
    #[prop(into)] on_page_size: Callback<usize>,
) -> impl IntoView {
    let links = move || page_links(page.get(), total_pages.get());

    view! {
        <nav class="pagination" aria-label="Paginación">
            <button
                class="page-btn prev"
                disabled=move || !has_prev.get()
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "‹ Anterior"
            </button>

            {move || links().into_iter().map(|link| match link {
                PageLink::Page { number, current } => view! {
                    <button
                        class=if current { "page-btn active" } else { "page-btn" }
                        aria-current=if current { Some("page") } else { None }
                        on:click=move |_| on_page.run(number)
                    >
                        {number}
                    </button>
                }.into_any(),
                PageLink::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
            }).collect_view()}

            <button
                class="page-btn next"
                disabled=move || !has_next.get()
                on:click=move |_| on_page.run((page.get_untracked() + 1).min(total_pages.get_untracked()))
            >
                "Siguiente ›"
            </button>

            <label class="page-size">
                "Por página "
                <select
                    prop:value=move || page_size.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size.run(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.into_iter().map(|size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size}
                        </option>
                    }).collect_view()}
                </select>
            </label>
        </nav>
    }
}
