//! Application Context
//!
//! Shared handles provided via Leptos Context API or passed as props.

use leptos::prelude::*;
use voto_listing::{BookmarkSet, BookmarkStore, ItemId};

use crate::config::AppConfig;
use crate::storage::SharedBackend;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Bookmark store handed to the list view
///
/// The store itself lives in a local arena slot; `ids` mirrors its set so
/// the pipeline can react to toggles.
#[derive(Clone, Copy)]
pub struct Bookmarks {
    ids: RwSignal<BookmarkSet>,
    store: StoredValue<BookmarkStore<SharedBackend>, LocalStorage>,
}

impl Bookmarks {
    pub fn new(store: BookmarkStore<SharedBackend>) -> Self {
        Self {
            ids: RwSignal::new(store.ids().clone()),
            store: StoredValue::new_local(store),
        }
    }

    pub fn ids(&self) -> Signal<BookmarkSet> {
        self.ids.into()
    }

    pub fn is_bookmarked(&self, id: ItemId) -> Signal<bool> {
        let ids = self.ids;
        Signal::derive(move || ids.with(|set| set.contains(&id)))
    }

    /// Toggle and persist, then publish the new set
    pub fn toggle(&self, id: ItemId) {
        if let Some(next) = self.store.try_update_value(|store| store.toggle(id).clone()) {
            log::debug!("[Bookmarks] Toggled {}, {} bookmarked", id, next.len());
            self.ids.set(next);
        }
    }
}
