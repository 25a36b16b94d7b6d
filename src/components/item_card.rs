//! Item Card Component
//!
//! One candidate card with bookmark toggle and search link.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use voto_listing::{date, Candidate, LayoutKind, Listable};

/// Web search for the candidate, name and party joined by `+`
pub fn search_url(candidate: &Candidate) -> String {
    let terms: Vec<String> = [&candidate.first_name, &candidate.last_name, &candidate.party]
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| utf8_percent_encode(s.trim(), NON_ALPHANUMERIC).to_string())
        .collect();
    format!("https://www.google.com/search?q={}", terms.join("+"))
}

/// Registration line shown in the card body
pub fn registration_line(candidate: &Candidate) -> String {
    let formatted = date::format_long_es(candidate.date())
        .unwrap_or_else(|| "desconocida".to_string());
    format!("Fecha de registro: {}", formatted)
}

#[component]
pub fn ItemCard(
    candidate: Candidate,
    #[prop(into)] bookmarked: Signal<bool>,
    #[prop(into)] on_bookmark: Callback<u32>,
    layout: LayoutKind,
) -> impl IntoView {
    let params = layout.params();
    let id = candidate.id;
    let href = search_url(&candidate);
    let details = registration_line(&candidate);
    let logo = candidate.party_logo.clone();

    view! {
        <div class=format!("card item-card {} {}", params.card_class, params.min_height_class)>
            <div class="card-header">
                <div class="card-title-block">
                    <h3 class="card-title">{candidate.full_name()}</h3>
                    <span class="badge badge-secondary">{candidate.party.clone()}</span>
                </div>
                {logo.map(|src| view! {
                    <img class="party-logo" src=src alt="Logo partido" />
                })}
            </div>

            {params.show_details.then(|| view! {
                <div class="card-content">{details}</div>
            })}

            <div class="card-footer">
                <button
                    class=move || if bookmarked.get() { "bookmark-btn active" } else { "bookmark-btn" }
                    title=move || if bookmarked.get() { "Quitar marcador" } else { "Marcar" }
                    on:click=move |_| on_bookmark.run(id)
                >
                    "🔖"
                </button>
                <a class="more-info" href=href target="_blank" rel="noopener noreferrer">
                    "Más información ↗"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_terms() {
        let c = Candidate::new(1, "José", "Pérez Ríos", "Frente & Unidad");
        assert_eq!(
            search_url(&c),
            "https://www.google.com/search?q=Jos%C3%A9+P%C3%A9rez%20R%C3%ADos+Frente%20%26%20Unidad"
        );
    }

    #[test]
    fn test_search_url_skips_empty_parts() {
        let c = Candidate::new(1, "Ana", "", "Verde");
        assert_eq!(search_url(&c), "https://www.google.com/search?q=Ana+Verde");
    }

    #[test]
    fn test_registration_line() {
        let c = Candidate::new(1, "Ana", "", "Verde").with_date("2024-01-01");
        assert_eq!(registration_line(&c), "Fecha de registro: 1 de enero de 2024");
        let c = Candidate::new(2, "Beto", "", "Verde").with_date("Unknown");
        assert_eq!(registration_line(&c), "Fecha de registro: desconocida");
    }
}
