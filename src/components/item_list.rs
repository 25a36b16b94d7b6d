//! Item List Component
//!
//! Owns the filter and pagination state of the candidate listing and
//! wires search, party filter, sort, layout and paging controls to the
//! pipeline. Items arrive from the app shell; `None` means the fetch is
//! still outstanding.

use std::collections::BTreeSet;

use leptos::prelude::*;
use voto_listing::{
    category_options, paginate, pipeline, Candidate, Debouncer, LayoutKind, ListQuery, PageRequest,
    Pagination, SortOption,
};

use crate::components::{
    EmptyState, ItemGrid, LayoutToggle, PaginationControls, SearchFilterControls, SkeletonGrid,
};
use crate::context::{use_app_context, Bookmarks};
use crate::timer::GlooScheduler;

/// What the grid and the pager need for the visible page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub items: Vec<Candidate>,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub summary: String,
}

impl PageView {
    pub fn build(items: &[Candidate], pagination: Pagination) -> Self {
        let window = pagination.window(items);
        Self {
            items: window.items.to_vec(),
            page: window.page,
            total_pages: window.total_pages,
            has_prev: window.has_prev(),
            has_next: window.has_next(),
            summary: window.summary(),
        }
    }
}

/// What the list body shows: placeholders, the empty state, or a page
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Items not fetched yet
    Loading,
    /// Loaded, but nothing survived the filters
    Empty,
    Page(PageView),
}

impl ListState {
    /// `filtered` is `None` until the fetch completes
    pub fn build(filtered: Option<&[Candidate]>, pagination: Pagination) -> Self {
        match filtered {
            None => ListState::Loading,
            Some([]) => ListState::Empty,
            Some(items) => ListState::Page(PageView::build(items, pagination)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn page_view(&self) -> Option<&PageView> {
        match self {
            ListState::Page(view) => Some(view),
            _ => None,
        }
    }

    /// Range line under the grid, blank while loading
    pub fn summary(&self) -> String {
        match self {
            ListState::Loading => String::new(),
            ListState::Empty => paginate::<Candidate>(&[], 1, 1).summary(),
            ListState::Page(view) => view.summary.clone(),
        }
    }
}

#[component]
pub fn ItemList(
    #[prop(into)] items: Signal<Option<Vec<Candidate>>>,
    bookmarks: Bookmarks,
) -> impl IntoView {
    let config = use_app_context().config;

    // Filter state
    let (search_input, set_search_input) = signal(String::new());
    let (debounced_search, set_debounced_search) = signal(String::new());
    let selected_categories = RwSignal::new(BTreeSet::<String>::new());
    let (sort, set_sort) = signal(SortOption::default());

    // Presentation and paging state
    let (layout, set_layout) = signal(LayoutKind::default());
    let page_request = RwSignal::new(PageRequest::default());

    let debouncer = StoredValue::new_local(Debouncer::new(
        GlooScheduler,
        config.search_debounce_ms,
        move |text: String| set_debounced_search.set(text),
    ));
    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
    });

    let on_search = Callback::new(move |text: String| {
        set_search_input.set(text.clone());
        debouncer.try_update_value(|d| d.push(text));
    });
    let on_sort = Callback::new(move |option: SortOption| set_sort.set(option));

    let party_options = Memo::new(move |_| {
        items.with(|items| items.as_deref().map(category_options).unwrap_or_default())
    });

    // Filtered + sorted view, `None` while loading
    let filtered = Memo::new(move |_| {
        let query = ListQuery {
            search: debounced_search.get(),
            categories: selected_categories.get(),
            sort: sort.get(),
        };
        let pinned = bookmarks.ids().get();
        let out = items.with(|items| items.as_deref().map(|items| pipeline::apply(items, &query, &pinned)));
        if let Some(out) = &out {
            log::debug!("[ItemList] {} items after filtering", out.len());
        }
        out
    });

    // Bumps on every change of the filtered set; pages chosen for an older
    // revision read back as page 1
    let revision = Memo::new(move |prev: Option<&u64>| {
        filtered.track();
        prev.map_or(0, |r| r + 1)
    });

    let list_state = Memo::new(move |_| {
        let pagination = page_request.with(|r| r.resolve(revision.get()));
        filtered.with(|f| ListState::build(f.as_deref(), pagination))
    });

    let is_loading = Memo::new(move |_| list_state.with(ListState::is_loading));
    let is_empty = Memo::new(move |_| list_state.with(|s| *s == ListState::Empty));
    let current_items = Signal::derive(move || {
        list_state.with(|s| s.page_view().map(|v| v.items.clone()).unwrap_or_default())
    });
    let page = Signal::derive(move || list_state.with(|s| s.page_view().map_or(1, |v| v.page)));
    let total_pages = Signal::derive(move || list_state.with(|s| s.page_view().map_or(1, |v| v.total_pages)));
    let has_prev = Signal::derive(move || list_state.with(|s| s.page_view().is_some_and(|v| v.has_prev)));
    let has_next = Signal::derive(move || list_state.with(|s| s.page_view().is_some_and(|v| v.has_next)));
    let page_size = Signal::derive(move || page_request.with(|r| r.resolve(revision.get()).page_size()));
    let summary = move || list_state.with(ListState::summary);

    let on_page = Callback::new(move |next: usize| {
        let last = total_pages.get_untracked();
        let current = revision.get_untracked();
        page_request.update(|r| r.go_to(current, next.clamp(1, last)));
    });
    let on_page_size = Callback::new(move |size: usize| {
        log::debug!("[ItemList] Page size {}", size);
        let current = revision.get_untracked();
        page_request.update(|r| r.resize(current, size));
    });

    view! {
        <section class="item-list">
            <div class="item-list-toolbar">
                <SearchFilterControls
                    search=search_input
                    on_search=on_search
                    category_options=party_options
                    selected_categories=selected_categories
                    sort=sort
                    on_sort=on_sort
                />
                <LayoutToggle layout=layout set_layout=set_layout />
            </div>

            {move || if is_loading.get() {
                view! { <SkeletonGrid count=page_size layout=layout /> }.into_any()
            } else if is_empty.get() {
                view! { <EmptyState /> }.into_any()
            } else {
                view! { <ItemGrid items=current_items bookmarks=bookmarks layout=layout /> }.into_any()
            }}

            <Show when=move || !is_loading.get()>
                <PaginationControls
                    page=page
                    total_pages=total_pages
                    has_prev=has_prev
                    has_next=has_next
                    page_size=page_size
                    on_page=on_page
                    on_page_size=on_page_size
                />
                <p class="item-count">{summary}</p>
            </Show>
        </section>
    }
}
