//! Nav data loading.
//!
//! Reads the authored TOML file named by `[site.nav] data` and hands
//! the parsed groups to [`NavCatalog::from_groups`]. All I/O lives
//! here; the catalog itself never touches the filesystem.
//!
//! # Data format
//!
//! ```toml
//! [[groups]]
//! title = "短篇"
//!
//! [[groups.items]]
//! icon = "a.png"
//! title = "我传"
//! description = "滚去要你的饭"
//! link = "/article/我传"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use super::catalog::{NavCatalog, NavGroup};
use crate::config::ConfigError;
use crate::debug;

/// Top-level shape of the nav data file.
#[derive(Debug, Default, Deserialize)]
struct NavData {
    #[serde(default)]
    groups: Vec<NavGroup>,
}

/// Load a catalog from a nav data file.
///
/// Unknown keys are reported as a warning and otherwise ignored, so an
/// authored file can carry renderer-private annotations without
/// breaking this tool.
pub fn load(path: &Path) -> Result<NavCatalog> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

    let (catalog, ignored) = from_str(&content)?;

    if !ignored.is_empty() {
        crate::log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in &ignored {
            eprintln!("- {}", field);
        }
    }

    debug!(
        "nav";
        "loaded {} with {} groups, {} entries",
        path.display(),
        catalog.groups().len(),
        catalog.entry_count()
    );

    Ok(catalog)
}

/// Parse nav data from a TOML string, collecting unknown keys.
pub fn from_str(content: &str) -> Result<(NavCatalog, Vec<String>)> {
    let mut ignored = Vec::new();
    let deserializer = toml::Deserializer::new(content);
    let data: NavData = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
        ignored.push(path.to_string());
    })
    .map_err(ConfigError::Toml)?;

    Ok((NavCatalog::from_groups(data.groups), ignored))
}
