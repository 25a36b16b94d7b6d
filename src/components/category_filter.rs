//! Category Filter Component
//!
//! Multi-select over party names. Selecting several parties widens the
//! result (OR), selecting none disables the filter.

use std::collections::BTreeSet;

use leptos::prelude::*;
use voto_listing::CategoryOption;

/// Add `value` if missing, remove it otherwise
pub fn toggle_category(selected: &mut BTreeSet<String>, value: &str) {
    if !selected.remove(value) {
        selected.insert(value.to_string());
    }
}

#[component]
pub fn CategoryFilter(
    #[prop(into)] options: Signal<Vec<CategoryOption>>,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let button_label = move || {
        let count = selected.with(|s| s.len());
        if count == 0 {
            "Filtrar por partido".to_string()
        } else {
            format!("Filtrar por partido ({})", count)
        }
    };

    view! {
        <div class="category-filter">
            <button class="category-filter-trigger" on:click=move |_| set_open.update(|o| *o = !*o)>
                {button_label}
            </button>
            <Show when=move || open.get()>
                <div class="category-filter-menu">
                    <For
                        each=move || options.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let value = option.value.clone();
                            let checked_value = value.clone();
                            view! {
                                <label class="category-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|s| s.contains(&checked_value))
                                        on:change=move |_| selected.update(|s| toggle_category(s, &value))
                                    />
                                    {option.label}
                                </label>
                            }
                        }
                    />
                    <Show when=move || selected.with(|s| !s.is_empty())>
                        <button class="category-clear" on:click=move |_| selected.set(BTreeSet::new())>
                            "Limpiar filtros"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_category() {
        let mut selected = BTreeSet::new();
        toggle_category(&mut selected, "Verde");
        toggle_category(&mut selected, "Azul");
        assert_eq!(selected.len(), 2);
        toggle_category(&mut selected, "Verde");
        assert!(!selected.contains("Verde"));
        assert!(selected.contains("Azul"));
    }
}
