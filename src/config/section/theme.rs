//! `[theme]` section configuration.
//!
//! UI strings and assets passed through to the external renderer:
//! logo, outline, footer, doc-footer labels, social links.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "logo.png"
//!
//! [theme.outline]
//! levels = [1, 6]
//! label = "目录"
//!
//! [theme.footer]
//! message = "https://github.com/example/wiki"
//! copyright = "Copyright © 2019-present example"
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/example/wiki"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme settings forwarded to the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Site logo path (relative to site root) or URL.
    pub logo: Option<PathBuf>,

    /// Right-hand outline settings.
    #[config(sub)]
    pub outline: OutlineConfig,

    /// Page footer.
    #[config(sub)]
    pub footer: FooterConfig,

    /// Prev/next links under each page.
    #[config(sub)]
    pub doc_footer: DocFooterConfig,

    /// Miscellaneous UI labels.
    #[config(sub)]
    pub labels: UiLabelsConfig,

    /// "Last updated" display.
    #[config(sub)]
    pub last_updated: LastUpdatedConfig,

    /// Social links shown in the site header.
    #[serde(default)]
    #[config(skip)]
    pub social: Vec<SocialLink>,
}

impl ThemeConfig {
    /// Validate theme configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.outline.validate(diag);

        for social in &self.social {
            if let Err(e) = url::Url::parse(&social.link) {
                diag.error_with_hint(
                    FieldPath::new("theme.social"),
                    format!("invalid social link '{}': {}", social.link, e),
                    "social links must be absolute URLs",
                );
            }
        }
    }
}

// ============================================================================
// Sub-sections
// ============================================================================

/// Outline (table of contents) configuration
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.outline")]
pub struct OutlineConfig {
    /// Heading levels shown, as `[from, to]` with 1 <= from <= to <= 6.
    pub levels: Vec<u8>,

    /// Outline heading label.
    #[config(default = "On this page")]
    pub label: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            levels: vec![2, 3],
            label: "On this page".into(),
        }
    }
}

impl OutlineConfig {
    /// Validate outline levels are a sane `[from, to]` pair.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.levels.len() != 2 {
            diag.error_with_hint(
                Self::FIELDS.levels,
                format!("expected [from, to], got {} value(s)", self.levels.len()),
                "e.g. levels = [1, 6]",
            );
            return;
        }
        let (from, to) = (self.levels[0], self.levels[1]);
        if from < 1 || to > 6 || from > to {
            diag.error_with_hint(
                Self::FIELDS.levels,
                format!("levels [{from}, {to}] out of range"),
                "heading levels run from 1 to 6, with from <= to",
            );
        }
    }
}

/// Page footer text
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer message line.
    pub message: String,

    /// Copyright line.
    pub copyright: String,
}

/// Prev/next page link labels
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.doc_footer")]
pub struct DocFooterConfig {
    /// Label for the previous-page link.
    #[config(default = "Previous page")]
    pub prev: String,

    /// Label for the next-page link.
    #[config(default = "Next page")]
    pub next: String,
}

impl Default for DocFooterConfig {
    fn default() -> Self {
        Self {
            prev: "Previous page".into(),
            next: "Next page".into(),
        }
    }
}

/// Miscellaneous UI labels
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.labels")]
pub struct UiLabelsConfig {
    /// "Return to top" button.
    #[config(default = "Return to top")]
    pub return_to_top: String,

    /// Mobile sidebar menu button.
    #[config(default = "Menu")]
    pub menu: String,

    /// Light mode switch title.
    #[config(default = "Switch to light theme")]
    pub light_mode: String,

    /// Dark mode switch title.
    #[config(default = "Switch to dark theme")]
    pub dark_mode: String,
}

impl Default for UiLabelsConfig {
    fn default() -> Self {
        Self {
            return_to_top: "Return to top".into(),
            menu: "Menu".into(),
            light_mode: "Switch to light theme".into(),
            dark_mode: "Switch to dark theme".into(),
        }
    }
}

/// "Last updated" timestamp display
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.last_updated")]
pub struct LastUpdatedConfig {
    /// Show the last-updated timestamp.
    #[config(default = "true")]
    pub enable: bool,

    /// Label preceding the timestamp.
    #[config(default = "Last updated")]
    pub text: String,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            text: "Last updated".into(),
        }
    }
}

/// A social link rendered in the site header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name or URL (renderer-defined).
    pub icon: String,
    /// Absolute target URL.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.logo.is_none());
        assert_eq!(config.theme.outline.levels, vec![2, 3]);
        assert_eq!(config.theme.doc_footer.prev, "Previous page");
        assert!(config.theme.last_updated.enable);
        assert!(config.theme.social.is_empty());
    }

    #[test]
    fn test_outline_levels() {
        let config = test_parse_config("[theme.outline]\nlevels = [1, 6]\nlabel = \"目录\"");
        assert_eq!(config.theme.outline.levels, vec![1, 6]);
        assert_eq!(config.theme.outline.label, "目录");

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_outline_levels_rejected() {
        let config = test_parse_config("[theme.outline]\nlevels = [0, 9]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.has_errors());

        let config = test_parse_config("[theme.outline]\nlevels = [3]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_social_links() {
        let config = test_parse_config(
            "[[theme.social]]\nicon = \"github\"\nlink = \"https://github.com/example/wiki\"",
        );
        assert_eq!(config.theme.social.len(), 1);
        assert_eq!(config.theme.social[0].icon, "github");

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_social_link_must_be_absolute() {
        let config = test_parse_config("[[theme.social]]\nicon = \"github\"\nlink = \"/local\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
