//! Sort Options
//!
//! The four orderings offered by the sort dropdown.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    /// Unknown strings fall back to the default ordering
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::DateDesc => "Fecha (Primero)",
            SortOption::DateAsc => "Fecha (Ultimo)",
            SortOption::NameAsc => "Nombre (A-Z)",
            SortOption::NameDesc => "Nombre (Z-A)",
        }
    }

    pub fn field(&self) -> SortField {
        match self {
            SortOption::DateDesc | SortOption::DateAsc => SortField::Date,
            SortOption::NameAsc | SortOption::NameDesc => SortField::Name,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortOption::DateAsc | SortOption::NameAsc => SortDirection::Asc,
            SortOption::DateDesc | SortOption::NameDesc => SortDirection::Desc,
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| format!("Unknown sort option: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>(), Ok(option));
            assert_eq!(SortOption::parse_or_default(option.as_str()), option);
        }
        assert!("bogus".parse::<SortOption>().is_err());
        assert_eq!(SortOption::parse_or_default("bogus"), SortOption::DateDesc);
        assert_eq!(SortOption::default(), SortOption::DateDesc);
    }

    #[test]
    fn test_field_and_direction() {
        assert_eq!(SortOption::NameDesc.field(), SortField::Name);
        assert_eq!(SortOption::NameDesc.direction(), SortDirection::Desc);
        assert_eq!(SortOption::DateAsc.field(), SortField::Date);
        assert_eq!(SortOption::DateAsc.direction(), SortDirection::Asc);
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&SortOption::NameAsc).unwrap();
        assert_eq!(json, "\"name-asc\"");
    }
}
