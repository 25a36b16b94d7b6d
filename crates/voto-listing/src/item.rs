//! Listing Items
//!
//! The candidate record and the trait the pipeline works against.

use serde::{Deserialize, Serialize};

/// Identifier of a listed item, unique within a listing session
pub type ItemId = u32;

/// Anything that can go through the filter/sort/paginate pipeline
pub trait Listable: Clone {
    fn id(&self) -> ItemId;

    /// Name used for alphabetical ordering
    fn sort_name(&self) -> &str;

    /// Fields matched by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Grouping key used by the category filter
    fn group(&self) -> &str;

    /// Raw ISO-8601 date used for date ordering
    fn date(&self) -> Option<&str>;
}

/// A candidate as shown in the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: ItemId,
    pub first_name: String,
    pub last_name: String,
    /// Party name, used as the category
    pub party: String,
    #[serde(default)]
    pub party_logo: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    /// Creation/founding date, may be missing, "Unknown" or garbage
    #[serde(default)]
    pub registered_at: Option<String>,
}

impl Candidate {
    pub fn new(id: ItemId, first_name: &str, last_name: &str, party: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            party: party.to_string(),
            party_logo: None,
            photo: None,
            registered_at: None,
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.registered_at = Some(date.to_string());
        self
    }

    /// "First Last", trimmed when either part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Listable for Candidate {
    fn id(&self) -> ItemId {
        self.id
    }

    fn sort_name(&self) -> &str {
        &self.first_name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name]
    }

    fn group(&self) -> &str {
        &self.party
    }

    fn date(&self) -> Option<&str> {
        self.registered_at.as_deref()
    }
}

/// Option shown in the category multi-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    pub value: String,
}

/// Distinct groups in first-seen order
pub fn category_options<T: Listable>(items: &[T]) -> Vec<CategoryOption> {
    let mut options: Vec<CategoryOption> = Vec::new();
    for item in items {
        let group = item.group();
        if group.is_empty() || options.iter().any(|o| o.value == group) {
            continue;
        }
        options.push(CategoryOption {
            label: group.to_string(),
            value: group.to_string(),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let c = Candidate::new(1, "Ana", "Quispe Mamani", "Verde");
        assert_eq!(c.full_name(), "Ana Quispe Mamani");

        let c = Candidate::new(2, "Beto", "", "Verde");
        assert_eq!(c.full_name(), "Beto");
    }

    #[test]
    fn test_category_options_dedup_in_order() {
        let items = vec![
            Candidate::new(1, "Ana", "A", "Verde"),
            Candidate::new(2, "Beto", "B", "Azul"),
            Candidate::new(3, "Carla", "C", "Verde"),
            Candidate::new(4, "Dani", "D", ""),
        ];
        let options = category_options(&items);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Verde", "Azul"]);
        assert_eq!(options[0].label, "Verde");
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        let json = r#"{"id":7,"first_name":"Eva","last_name":"Rojas","party":"Azul"}"#;
        let c: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 7);
        assert!(c.registered_at.is_none());
        assert!(c.party_logo.is_none());
    }
}
