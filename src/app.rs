//! Voto Frontend App
//!
//! Application shell: fetches the active electoral process and hands the
//! candidates and the bookmark store to the listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use voto_listing::BookmarkStore;

use crate::api;
use crate::components::{ItemList, ProcessHeader};
use crate::config::AppConfig;
use crate::context::{AppContext, Bookmarks};
use crate::storage;
use crate::store::{
    store_set_empty, store_set_has_voted, store_set_process, AppState, AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    provide_context(AppContext::new(config.clone()));

    let store: AppStore = AppStore::new(AppState::default());
    provide_context(store);

    // Bookmarks are read once per session and injected into the list
    let backend = storage::open_backend();
    let token = storage::session_token(&*backend);
    let bookmarks = Bookmarks::new(BookmarkStore::load(backend));

    // Load the active process on mount
    {
        let config = config.clone();
        let token = token.clone();
        spawn_local(async move {
            match api::fetch_active_process(&config, token.as_deref()).await {
                Ok(process) => {
                    log::info!("[APP] Loaded {} candidacies for {}", process.candidacies.len(), process.name);
                    store_set_process(&store, &process);
                }
                Err(e) => {
                    log::error!("[APP] Could not load candidates: {}", e);
                    store_set_empty(&store);
                }
            }
        });
    }

    if let Some(token) = token {
        spawn_local(async move {
            let voted = api::has_voted(&config, &token).await;
            store_set_has_voted(&store, voted);
        });
    }

    let items = Signal::derive(move || store.candidates().get());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <ProcessHeader />
                <ItemList items=items bookmarks=bookmarks />
            </main>
        </div>
    }
}
