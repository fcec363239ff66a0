//! `[site.info]` configuration.
//!
//! Basic site metadata: title, description, language, base path.
//! These values are passed through to the external renderer untouched.

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata handed to the renderer as-is.
/// For custom fields, use `[site.info.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Language code (e.g., "en", "zh-CN").
    #[config(default = "en")]
    pub language: String,

    /// Public site URL (e.g., "https://example.github.io/wiki").
    pub url: Option<String>,

    /// Base path the site is served under. Must begin with `/`.
    #[config(default = "/")]
    pub base: String,

    /// Copyright notice.
    pub copyright: String,

    /// Custom fields forwarded to the renderer verbatim.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            language: "en".into(),
            url: None,
            base: "/".into(),
            copyright: String::new(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `url`, when present, must be a valid http/https URL
    /// - `base` must begin with `/`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base path '{}' must begin with '/'", self.base),
                "use \"/\" for a root deployment or \"/wiki/\" for a subdirectory",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.language, "en");
        assert_eq!(config.site.info.base, "/");
        assert!(config.site.info.url.is_none());
        assert!(config.site.info.extra.is_empty());
    }

    #[test]
    fn test_extra_passthrough() {
        let config = test_parse_config("[site.info.extra]\nbadge = \"wiki.example\"");
        assert_eq!(
            config.site.info.extra.get("badge").and_then(|v| v.as_str()),
            Some("wiki.example")
        );
    }

    #[test]
    fn test_url_scheme_rejected() {
        let mut info = SiteInfoConfig {
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.has_errors());

        info.url = Some("https://example.com".into());
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_base_must_start_with_slash() {
        let info = SiteInfoConfig {
            base: "wiki/".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
