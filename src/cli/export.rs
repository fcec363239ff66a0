//! Export command implementation.
//!
//! Serializes the renderer payload - pass-through config sections plus
//! the nav catalog - as JSON. Field names in the output are the wire
//! contract with the renderer; group and entry order is exactly the
//! authored order.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::ExportArgs;
use crate::config::{RenderConfig, SiteConfig, SiteInfoConfig, ThemeConfig};
use crate::log;
use crate::nav::{self, NavCatalog, NavGroup};
use crate::utils::plural_count;

/// Everything the renderer needs, in one document.
#[derive(Debug, Serialize)]
pub struct RendererPayload<'a> {
    pub site: &'a SiteInfoConfig,
    pub theme: &'a ThemeConfig,
    pub render: &'a RenderConfig,
    pub nav: &'a [NavGroup],
}

/// Execute export command
pub fn run_export(args: &ExportArgs, config: &SiteConfig) -> Result<()> {
    let catalog = nav::loader::load(&config.nav_data_path())?;

    log!(
        "export";
        "exporting {} in {}",
        plural_count(catalog.entry_count(), "link"),
        plural_count(catalog.groups().len(), "group")
    );

    let mut output = payload_value(config, &catalog)?;

    if let Some(ref fields) = args.fields {
        output = filter_fields(&output, fields);
    }

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    write_output(&formatted, args.output.as_deref())
}

/// Build the full payload as a JSON value.
pub fn payload_value(config: &SiteConfig, catalog: &NavCatalog) -> Result<JsonValue> {
    let payload = RendererPayload {
        site: &config.site.info,
        theme: &config.theme,
        render: &config.render,
        nav: catalog.groups(),
    };
    Ok(serde_json::to_value(&payload)?)
}

/// Filter to specific top-level sections, keeping payload order.
pub fn filter_fields(payload: &JsonValue, fields: &[String]) -> JsonValue {
    let mut obj = Map::new();

    if let JsonValue::Object(payload_obj) = payload {
        for (key, value) in payload_obj {
            if fields.iter().any(|f| f == key) {
                obj.insert(key.clone(), value.clone());
            }
        }
        for field in fields {
            if !payload_obj.contains_key(field) {
                log!("warning"; "unknown export field '{}', expected one of: site, theme, render, nav", field);
            }
        }
    }

    JsonValue::Object(obj)
}

/// Write formatted output to a file or stdout.
fn write_output(formatted: &str, output_path: Option<&Path>) -> Result<()> {
    if let Some(path) = output_path {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{}", formatted)?;
        log!("export"; "wrote output to {}", path.display());
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavLink;

    fn sample() -> (SiteConfig, NavCatalog) {
        let mut config = SiteConfig::default();
        config.site.info.title = "Test Wiki".into();

        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "短篇",
            vec![NavLink {
                icon: "a.png".into(),
                title: "我传".into(),
                description: "滚去要你的饭".into(),
                link: "/article/我传".into(),
            }],
        )]);
        (config, catalog)
    }

    #[test]
    fn test_payload_sections_in_order() {
        let (config, catalog) = sample();
        let value = payload_value(&config, &catalog).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["site", "theme", "render", "nav"]);
    }

    #[test]
    fn test_wire_field_names() {
        let (config, catalog) = sample();
        let value = payload_value(&config, &catalog).unwrap();

        let entry = &value["nav"][0]["items"][0];
        assert_eq!(entry["icon"], "a.png");
        assert_eq!(entry["title"], "我传");
        // Output always says `description`, even though input may say `desc`
        assert_eq!(entry["description"], "滚去要你的饭");
        assert_eq!(entry["link"], "/article/我传");
        assert!(entry.get("desc").is_none());
    }

    #[test]
    fn test_nav_order_preserved() {
        let mut config = SiteConfig::default();
        config.site.info.title = "t".into();
        let catalog = NavCatalog::from_groups(vec![
            NavGroup::new("zeta", vec![]),
            NavGroup::new("alpha", vec![]),
        ]);

        let value = payload_value(&config, &catalog).unwrap();
        assert_eq!(value["nav"][0]["title"], "zeta");
        assert_eq!(value["nav"][1]["title"], "alpha");
    }

    #[test]
    fn test_filter_fields() {
        let (config, catalog) = sample();
        let value = payload_value(&config, &catalog).unwrap();

        let filtered = filter_fields(&value, &["nav".to_string()]);
        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("nav"));
    }

    #[test]
    fn test_filter_keeps_payload_order() {
        let (config, catalog) = sample();
        let value = payload_value(&config, &catalog).unwrap();

        // Request out of order; output follows payload order
        let filtered = filter_fields(&value, &["nav".to_string(), "site".to_string()]);
        let keys: Vec<&str> = filtered.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["site", "nav"]);
    }
}
