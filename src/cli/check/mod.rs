//! Check command implementation.
//!
//! The catalog model deliberately accepts whatever the author wrote
//! (see [`crate::nav::catalog`]); this command is where authoring
//! mistakes surface. It never rewrites anything - it only reports.

mod report;

pub use report::{CheckIssue, CheckReport, GroupReport};

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::cli::args::CheckArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::nav::{self, NavCatalog};
use crate::utils::{is_external_link, plural_count};

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let catalog = nav::loader::load(&config.nav_data_path())?;

    log!(
        "check";
        "checking {} across {}",
        plural_count(catalog.entry_count(), "link"),
        plural_count(catalog.groups().len(), "group")
    );

    let report = check_catalog(&catalog, config.site.nav.fallback_icon.is_some());
    report.print();
    eprintln!();
    eprintln!("{report}");

    if report.has_errors() && !args.warn_only {
        std::process::exit(1);
    }
    Ok(())
}

/// Check a catalog for authoring mistakes.
///
/// When `has_fallback_icon` is set, empty icons are fine - the
/// renderer substitutes the configured fallback.
pub fn check_catalog(catalog: &NavCatalog, has_fallback_icon: bool) -> CheckReport {
    let mut report = CheckReport::default();

    for (gi, group) in catalog.groups().iter().enumerate() {
        let label = if group.title.trim().is_empty() {
            format!("groups[{gi}]")
        } else {
            group.title.clone()
        };
        let mut out = GroupReport::new(label);

        if group.title.trim().is_empty() {
            out.error("title", "group title is empty");
        }
        if group.is_empty() {
            out.warn("items", "group has no entries");
        }

        // Duplicate titles are cosmetic (entries render independently),
        // and only within one group - the same title in another group
        // is fine.
        let mut seen = FxHashSet::default();

        for (ii, item) in group.items().iter().enumerate() {
            let target = if item.title.trim().is_empty() {
                format!("items[{ii}]")
            } else {
                item.title.clone()
            };

            if item.title.trim().is_empty() {
                out.error(target.clone(), "entry title is empty");
            } else if !seen.insert(item.title.as_str()) {
                out.warn(target.clone(), "duplicate title within this group");
            }

            check_link(&mut out, &target, &item.link);

            if item.icon.trim().is_empty() && !has_fallback_icon {
                out.warn(target, "icon is empty");
            }
        }

        report.push(out);
    }

    report
}

/// Check a single entry's link target.
fn check_link(out: &mut GroupReport, target: &str, link: &str) {
    if link.trim().is_empty() {
        out.error(target, "link is empty");
        return;
    }

    if is_external_link(link) {
        if let Err(e) = url::Url::parse(link) {
            out.error(target, format!("unparseable URL '{link}': {e}"));
        }
    } else if !link.starts_with('/') {
        out.error(
            target,
            format!("site-relative link '{link}' must begin with '/'"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavGroup, NavLink};

    fn entry(title: &str, link: &str, icon: &str) -> NavLink {
        NavLink {
            icon: icon.into(),
            title: title.into(),
            description: String::new(),
            link: link.into(),
        }
    }

    #[test]
    fn test_clean_catalog_passes() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "短篇",
            vec![
                entry("我传", "/article/我传", "a.png"),
                entry("issues", "https://github.com/example/wiki/issues", "g.png"),
            ],
        )]);
        let report = check_catalog(&catalog, false);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_empty_link_is_error() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "g",
            vec![entry("t", "", "a.png")],
        )]);
        let report = check_catalog(&catalog, false);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_relative_link_without_slash_is_error() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "g",
            vec![entry("t", "article/page", "a.png")],
        )]);
        let report = check_catalog(&catalog, false);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_duplicate_title_within_group_warns() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "g",
            vec![
                entry("issues", "/a", "a.png"),
                entry("issues", "/b", "a.png"),
            ],
        )]);
        let report = check_catalog(&catalog, false);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_duplicate_title_across_groups_is_fine() {
        let catalog = NavCatalog::from_groups(vec![
            NavGroup::new("a", vec![entry("issues", "/a", "a.png")]),
            NavGroup::new("b", vec![entry("issues", "/b", "a.png")]),
        ]);
        let report = check_catalog(&catalog, false);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_empty_icon_warns_without_fallback() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "g",
            vec![entry("t", "/t", "")],
        )]);

        let report = check_catalog(&catalog, false);
        assert_eq!(report.warning_count(), 1);

        // With a configured fallback icon the renderer fills the gap
        let report = check_catalog(&catalog, true);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_empty_group_warns() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new("g", vec![])]);
        let report = check_catalog(&catalog, false);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_bad_external_url_is_error() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "g",
            vec![entry("t", "https://", "a.png")],
        )]);
        let report = check_catalog(&catalog, false);
        assert_eq!(report.error_count(), 1);
    }
}
