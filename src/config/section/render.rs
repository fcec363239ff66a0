//! `[render]` section configuration.
//!
//! Flags forwarded to the external renderer. Nothing here changes how
//! this tool behaves; the renderer decides what to do with each flag.
//!
//! # Example
//!
//! ```toml
//! [render]
//! clean_urls = true
//! line_numbers = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Renderer pass-through flags.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "render")]
pub struct RenderConfig {
    /// Drop `.html` extensions from generated links.
    #[config(default = "true")]
    pub clean_urls: bool,

    /// Show line numbers in code blocks.
    #[config(default = "false")]
    pub line_numbers: bool,

    /// Compute and show per-page last-updated timestamps.
    #[config(default = "true")]
    pub last_updated: bool,

    /// Skip dead-link detection during rendering.
    #[config(default = "false")]
    pub ignore_dead_links: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clean_urls: true,
            line_numbers: false,
            last_updated: true,
            ignore_dead_links: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.render.clean_urls);
        assert!(!config.render.line_numbers);
        assert!(config.render.last_updated);
        assert!(!config.render.ignore_dead_links);
    }

    #[test]
    fn test_overrides() {
        let config = test_parse_config("[render]\nclean_urls = false\nline_numbers = true");
        assert!(!config.render.clean_urls);
        assert!(config.render.line_numbers);
    }
}
