//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use voto_listing::Candidate;

use crate::models::ElectoralProcess;

/// Data fetched from the voting API
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// `None` while the first fetch is outstanding
    pub candidates: Option<Vec<Candidate>>,
    /// Name of the active electoral process
    pub process_name: Option<String>,
    pub process_description: Option<String>,
    pub process_starts_at: Option<String>,
    /// Voting deadline, drives the countdown
    pub process_ends_at: Option<String>,
    /// Vote status of the signed-in user, `None` when anonymous
    pub has_voted: Option<bool>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace listing data with a freshly fetched process
pub fn store_set_process(store: &AppStore, process: &ElectoralProcess) {
    store.process_name().set(Some(process.name.clone()));
    store.process_description().set(non_blank(&process.description));
    store.process_starts_at().set(non_blank(&process.starts_at));
    store.process_ends_at().set(non_blank(&process.ends_at));
    store.candidates().set(Some(process.candidates()));
}

fn non_blank(value: &str) -> Option<String> {
    Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Finish loading with nothing to show
pub fn store_set_empty(store: &AppStore) {
    store.candidates().set(Some(Vec::new()));
}

pub fn store_set_has_voted(store: &AppStore, voted: bool) {
    store.has_voted().set(Some(voted));
}
