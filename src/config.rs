//! Page-level configuration for the widgets.
//!
//! The site may embed a JSON object in
//! `<script type="application/json" id="docs-widgets-config">`. Every field is
//! optional; anything left out keeps the default below.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::WidgetError;

pub const CONFIG_ELEMENT_ID: &str = "docs-widgets-config";

/// Button and status-region strings for the copy-code buttons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyStrings {
    pub default: String,
    pub aria_label: String,
    pub copied: String,
    pub failed: String,
}

impl Default for CopyStrings {
    fn default() -> Self {
        Self {
            default: "Copy".to_string(),
            aria_label: "Copy to clipboard".to_string(),
            copied: "Copied".to_string(),
            failed: "Copy failed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Local storage key holding the cached theme.
    pub storage_key: String,
    /// Attribute set on `<html>` to the current theme.
    pub theme_attribute: String,
    pub toggle_id: String,
    pub light_theme: String,
    pub dark_theme: String,
    /// Theme transitions: current theme -> theme after one toggle.
    pub themes: BTreeMap<String, String>,
    pub code_block_selector: String,
    pub copy: CopyStrings,
    pub revert_delay_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert("light".to_string(), "dark".to_string());
        themes.insert("dark".to_string(), "light".to_string());

        Self {
            storage_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            light_theme: "light".to_string(),
            dark_theme: "dark".to_string(),
            themes,
            code_block_selector: ".code-header + .highlighter-rouge".to_string(),
            copy: CopyStrings::default(),
            revert_delay_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(json).map_err(|e| WidgetError::Config(e.to_string()))
    }

    /// Read the embedded config element, if the page has one.
    ///
    /// A page without the element gets the defaults. An empty element is
    /// treated the same way.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, WidgetError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .unwrap_or_default();

        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }

    /// Theme used when nothing is cached, chosen from the system preference.
    pub fn preferred_theme(&self, prefers_dark: bool) -> &str {
        if prefers_dark {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_markup() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.code_block_selector, ".code-header + .highlighter-rouge");
        assert_eq!(config.revert_delay_ms, 2000);
        assert_eq!(config.themes.get("light").map(String::as_str), Some("dark"));
        assert_eq!(config.themes.get("dark").map(String::as_str), Some("light"));
        assert_eq!(config.copy.default, "Copy");
        assert_eq!(config.copy.copied, "Copied");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "revertDelayMs": 500, "copy": { "copied": "Done!" } }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.revert_delay_ms, 500);
        assert_eq!(config.copy.copied, "Done!");
        assert_eq!(config.copy.default, "Copy");
        assert_eq!(config.storage_key, "theme");
    }

    #[test]
    fn test_custom_theme_cycle() {
        let config = SiteConfig::from_json(
            r#"{ "themes": { "light": "sepia", "sepia": "dark", "dark": "light" } }"#,
        )
        .unwrap();
        assert_eq!(config.themes.len(), 3);
        assert_eq!(config.themes["sepia"], "dark");
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_log_level_falls_back_to_info() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_preferred_theme() {
        let config = SiteConfig::default();
        assert_eq!(config.preferred_theme(true), "dark");
        assert_eq!(config.preferred_theme(false), "light");
    }
}
