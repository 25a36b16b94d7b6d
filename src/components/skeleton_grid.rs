//! Skeleton Grid Component
//!
//! Placeholder cards while the candidate fetch is outstanding.

use leptos::prelude::*;
use voto_listing::LayoutKind;

#[component]
pub fn SkeletonGrid(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] layout: Signal<LayoutKind>,
) -> impl IntoView {
    move || {
        let params = layout.get().params();
        view! {
            <div class=format!("grid loading {}", params.grid_class) aria-busy="true">
                {(0..count.get()).map(|_| view! {
                    <div class=format!("card skeleton-card {}", params.min_height_class)>
                        <div class="card-header">
                            <div class="skeleton skeleton-title"></div>
                            <div class="skeleton skeleton-badge"></div>
                        </div>
                        <div class="card-content">
                            <div class="skeleton skeleton-line"></div>
                            <div class="skeleton skeleton-line short"></div>
                        </div>
                        <div class="card-footer">
                            <div class="skeleton skeleton-button"></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
    }
}
