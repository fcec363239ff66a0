//! `[site]` section configuration.
//!
//! Contains site metadata and the navigation data source.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Wiki"
//! description = "A personal wiki"
//! language = "zh-CN"
//! url = "https://example.github.io/wiki"
//!
//! [site.info.extra]
//! badge = "example.wiki"
//!
//! [site.nav]
//! data = "nav.toml"
//! ```

mod info;
mod nav;

pub use info::SiteInfoConfig;
pub use nav::NavDataConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration containing metadata and nav source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, description, language, base, etc.)
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Navigation catalog source settings.
    #[config(sub)]
    pub nav: NavDataConfig,
}
