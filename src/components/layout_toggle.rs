//! Layout Toggle Component
//!
//! Switches card density. Presentation only.

use leptos::prelude::*;
use voto_listing::LayoutKind;

fn icon(kind: LayoutKind) -> &'static str {
    match kind {
        LayoutKind::Compact => "▦",
        LayoutKind::Standard => "▢",
        LayoutKind::List => "☰",
    }
}

#[component]
pub fn LayoutToggle(
    layout: ReadSignal<LayoutKind>,
    set_layout: WriteSignal<LayoutKind>,
) -> impl IntoView {
    view! {
        <div class="layout-toggle" role="group">
            {LayoutKind::ALL.into_iter().map(|kind| {
                view! {
                    <button
                        class=move || if layout.get() == kind { "layout-btn active" } else { "layout-btn" }
                        title=kind.label()
                        aria-label=kind.label()
                        on:click=move |_| set_layout.set(kind)
                    >
                        {icon(kind)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
