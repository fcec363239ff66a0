//! `[site.nav]` configuration: where the navigation catalog data lives.
//!
//! # Example
//!
//! ```toml
//! [site.nav]
//! data = "nav.toml"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Navigation catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.nav")]
pub struct NavDataConfig {
    /// Path to the nav data file (relative to the site root).
    #[config(default = "nav.toml")]
    pub data: PathBuf,

    /// Icon URL substituted by the renderer when an entry's icon is empty.
    #[config(experimental)]
    pub fallback_icon: Option<String>,
}

impl Default for NavDataConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("nav.toml"),
            fallback_icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_data_path() {
        let config = test_parse_config("");
        assert_eq!(config.site.nav.data, PathBuf::from("nav.toml"));
        assert!(config.site.nav.fallback_icon.is_none());
    }

    #[test]
    fn test_custom_data_path() {
        let config = test_parse_config("[site.nav]\ndata = \"content/links.toml\"");
        assert_eq!(config.site.nav.data, PathBuf::from("content/links.toml"));
    }

    #[test]
    fn test_fallback_icon_is_experimental_hint() {
        use crate::config::ConfigDiagnostics;

        let nav = NavDataConfig {
            fallback_icon: Some("/logo.png".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        nav.validate_field_status(&mut diag);
        // Experimental fields produce hints, never errors
        assert!(!diag.has_errors());
    }
}
