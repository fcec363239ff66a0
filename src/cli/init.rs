//! Site initialization.
//!
//! Creates `wikinav.toml` (generated from the config section templates)
//! and a starter `nav.toml` next to it.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{NavDataConfig, RenderConfig, SiteInfoConfig, ThemeConfig};
use crate::config::SiteConfig;
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "wikinav.toml";

/// Default nav data filename
const NAV_FILE: &str = "nav.toml";

/// Starter nav data written by init.
const STARTER_NAV: &str = r#"# Navigation catalog data.
# Each [[groups]] is one category; each [[groups.items]] one entry.
# Order here is display order.

[[groups]]
title = "Links"

[[groups.items]]
icon = "https://github.githubassets.com/favicons/favicon.png"
title = "issues"
description = "report a broken link"
link = "https://github.com/example/wiki/issues"
"#;

/// Create a new site with default config and nav data
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();

    if site_config.config_path.exists() {
        log!(
            "error";
            "'{}' already exists, refusing to overwrite",
            site_config.config_path.display()
        );
        std::process::exit(1);
    }

    if has_name {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create site directory '{}'", root.display()))?;
    }

    write_config(root)?;
    write_starter_nav(root)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}

/// Generate wikinav.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Wikinav configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push('\n');

    // [site.info] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [site.nav] section
    out.push_str(&NavDataConfig::template_with_header());
    out.push('\n');

    // [theme] section (pulls in its sub-sections)
    out.push_str(&ThemeConfig::template_with_header());
    out.push('\n');

    // [render] section
    out.push_str(&RenderConfig::template_with_header());

    out
}

/// Write default wikinav.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write starter nav.toml (kept if one already exists)
fn write_starter_nav(root: &Path) -> Result<()> {
    let path = root.join(NAV_FILE);
    if !path.exists() {
        fs::write(&path, STARTER_NAV)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_covers_all_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site.info]"));
        assert!(template.contains("[site.nav]"));
        assert!(template.contains("[theme]"));
        assert!(template.contains("[theme.outline]"));
        assert!(template.contains("[render]"));
    }

    #[test]
    fn test_template_parses_back() {
        let template = generate_config_template();
        let (_, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join(CONFIG_FILE);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site.info]"));
        assert!(content.contains("[site.nav]"));
    }

    #[test]
    fn test_starter_nav_parses() {
        let (catalog, ignored) = crate::nav::loader::from_str(STARTER_NAV).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(catalog.groups().len(), 1);
        assert_eq!(catalog.entry_count(), 1);
    }

    #[test]
    fn test_starter_nav_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let nav_path = temp.path().join(NAV_FILE);
        fs::write(&nav_path, "# custom").unwrap();

        write_starter_nav(temp.path()).unwrap();

        let content = fs::read_to_string(&nav_path).unwrap();
        assert_eq!(content, "# custom");
    }
}
