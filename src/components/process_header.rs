//! Process Header Component
//!
//! Name and description of the active electoral process, a live countdown
//! to its deadline and the signed-in user's vote status.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use voto_listing::date;

use crate::store::{use_app_store, AppStateStoreFields};

const TICK_MS: u32 = 1_000;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[component]
pub fn ProcessHeader() -> impl IntoView {
    let store = use_app_store();
    let (now, set_now) = signal(now_ms());

    let ticker = StoredValue::new_local(Some(Interval::new(TICK_MS, move || set_now.set(now_ms()))));
    on_cleanup(move || {
        ticker.try_update_value(|t| {
            t.take();
        });
    });

    let remaining = move || date::format_remaining(now.get(), store.process_ends_at().get().as_deref());
    let opening = move || {
        date::format_long_es(store.process_starts_at().get().as_deref())
            .map(|d| format!("Inicio: {}", d))
    };
    let vote_status = move || {
        store.has_voted().get().map(|voted| {
            if voted { "Ya emitiste tu voto" } else { "Aún no has votado" }
        })
    };

    view! {
        <header class="hero">
            <h1>"Candidatos"</h1>
            {move || store.process_name().get().map(|name| view! { <p class="process-name">{name}</p> })}
            {move || store.process_description().get().map(|text| view! {
                <p class="process-description">{text}</p>
            })}
            {move || opening().map(|text| view! { <p class="process-opening">{text}</p> })}
            {move || remaining().map(|left| view! {
                <p class="time-left">"Tiempo restante: " {left}</p>
            })}
            {move || vote_status().map(|status| view! { <p class="vote-status">{status}</p> })}
        </header>
    }
}
