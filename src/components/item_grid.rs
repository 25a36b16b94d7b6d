//! Item Grid Component
//!
//! Lays out the current page of cards; `EmptyState` covers a filtered set
//! with nothing in it.

use leptos::prelude::*;
use voto_listing::{Candidate, LayoutKind};

use crate::components::ItemCard;
use crate::context::Bookmarks;

#[component]
pub fn ItemGrid(
    #[prop(into)] items: Signal<Vec<Candidate>>,
    bookmarks: Bookmarks,
    #[prop(into)] layout: Signal<LayoutKind>,
) -> impl IntoView {
    let on_bookmark = Callback::new(move |id: u32| bookmarks.toggle(id));

    move || {
        let layout = layout.get();
        view! {
            <div class=format!("grid {}", layout.params().grid_class)>
                <For
                    each=move || items.get()
                    key=move |c| (c.id, layout)
                    children=move |candidate| {
                        let bookmarked = bookmarks.is_bookmarked(candidate.id);
                        view! {
                            <ItemCard
                                candidate=candidate
                                bookmarked=bookmarked
                                on_bookmark=on_bookmark
                                layout=layout
                            />
                        }
                    }
                />
            </div>
        }
        .into_any()
    }
}

/// Shown when nothing survives the filters
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-title">"No se encontraron items con estos criterios."</p>
            <p class="empty-state-hint">"Vuelve a ajustar los parametros de busqueda y filtra."</p>
        </div>
    }
}
