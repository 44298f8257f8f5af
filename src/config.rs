//! Page-level configuration.
//!
//! Defaults match the markup the portfolio page ships with. A page may
//! override any field with a JSON data island:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "projects_url": "data/projects.json", "detail_cache": "memoize" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ISLAND_ID: &str = "folio-config";
pub const DEFAULT_LIST_SELECTOR: &str = "#projects-list";
pub const DEFAULT_DATA_ISLAND_ID: &str = "projects-data";
pub const DEFAULT_PROJECTS_URL: &str = "projects.json";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_THEME_TOGGLE_SELECTOR: &str = "#theme-toggle";
pub const DEFAULT_CONTACT_FORM_SELECTOR: &str = "#contact-form";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/your-form-id";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// How the detail view resolves the project list on each click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Fetch the resource again for every click.
    #[default]
    AlwaysFetch,
    /// Reuse the first successful fetch until the page reloads.
    Memoize,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub list_selector: String,
    pub data_island_id: String,
    pub projects_url: String,
    pub detail_cache: CachePolicy,
    pub theme_key: String,
    pub theme_toggle_selector: String,
    pub contact_form_selector: String,
    pub contact_endpoint: String,
    pub reveal_threshold: f64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            list_selector: DEFAULT_LIST_SELECTOR.to_owned(),
            data_island_id: DEFAULT_DATA_ISLAND_ID.to_owned(),
            projects_url: DEFAULT_PROJECTS_URL.to_owned(),
            detail_cache: CachePolicy::AlwaysFetch,
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            theme_toggle_selector: DEFAULT_THEME_TOGGLE_SELECTOR.to_owned(),
            contact_form_selector: DEFAULT_CONTACT_FORM_SELECTOR.to_owned(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl FolioConfig {
    /// Parse overrides from a JSON object; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: Self = serde_json::from_str(raw)?;
        cfg.reveal_threshold = cfg.reveal_threshold.clamp(0.0, 1.0);
        Ok(cfg)
    }

    /// Resolve config from the optional page island text.
    ///
    /// A malformed island is logged and ignored.
    pub fn resolve(island: Option<&str>) -> Self {
        let Some(raw) = island else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                leptos::logging::warn!("ignoring malformed {CONFIG_ISLAND_ID} island: {e}");
                Self::default()
            }
        }
    }

    /// Read the config island from the current document.
    pub fn from_page() -> Self {
        #[cfg(feature = "csr")]
        {
            let island = crate::util::dom::element_text_by_id(CONFIG_ISLAND_ID);
            Self::resolve(island.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
