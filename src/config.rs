//! Application Configuration
//!
//! Values baked in at build time through environment variables, with
//! defaults that work when the app is served next to the API. A relative
//! API base is anchored to the page origin, since the HTTP client only
//! takes absolute URLs.

use log::LevelFilter;

/// Delay before the search box feeds the filter pipeline
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// localStorage key the auth provider leaves the session token under
pub const SESSION_TOKEN_KEY: &str = "voto.session.token";

const DEFAULT_API_BASE: &str = "/api";

/// Runtime configuration shared through context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the protected API, without trailing slash; absolute
    /// once `with_origin` ran
    pub api_base: String,
    pub log_level: LevelFilter,
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Build from `VOTO_API_BASE_PROTECTED` and `VOTO_LOG_LEVEL`, anchored
    /// to the current page origin
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("VOTO_API_BASE_PROTECTED"),
            option_env!("VOTO_LOG_LEVEL"),
        )
        .with_origin(browser_origin().as_deref())
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base),
            log_level: log_level.and_then(parse_level).unwrap_or(defaults.log_level),
            search_debounce_ms: defaults.search_debounce_ms,
        }
    }

    /// Prefix a relative API base with `origin` (e.g. `https://voto.example`)
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        if let Some(origin) = origin.map(|o| o.trim().trim_end_matches('/')).filter(|o| !o.is_empty()) {
            if !is_absolute(&self.api_base) {
                self.api_base = format!("{}/{}", origin, self.api_base.trim_start_matches('/'));
            }
        }
        self
    }

    /// Join a path onto the API base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// `window.location.origin`, when running in a page
fn browser_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint("procesos/activo"), "/api/procesos/activo");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://voto.example/api/v1/"), Some("debug"));
        assert_eq!(config.api_base, "https://voto.example/api/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.endpoint("/votos/estado"), "https://voto.example/api/v1/votos/estado");
    }

    #[test]
    fn test_default_base_resolves_to_absolute_url() {
        let config = AppConfig::from_values(None, None).with_origin(Some("http://localhost:8080/"));
        let url = config.endpoint("procesos/activo");
        assert_eq!(url, "http://localhost:8080/api/procesos/activo");
        assert!(reqwest::Url::parse(&url).is_ok());
    }

    #[test]
    fn test_absolute_base_ignores_origin() {
        let config = AppConfig::from_values(Some("https://voto.example/api"), None)
            .with_origin(Some("http://localhost:8080"));
        assert_eq!(config.api_base, "https://voto.example/api");
    }

    #[test]
    fn test_relative_base_without_origin_is_kept() {
        let config = AppConfig::from_values(None, None).with_origin(None);
        assert_eq!(config.api_base, "/api");
        assert!(reqwest::Url::parse(&config.endpoint("x")).is_err());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
