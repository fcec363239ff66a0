//! Navigation catalog model.
//!
//! The catalog is plain configuration data: an ordered list of titled
//! groups, each an ordered list of link entries. It is assembled once
//! from authored source data and never mutated afterwards - consumers
//! only ever see shared slices.
//!
//! Nothing here validates entries. An empty `link` or a duplicate
//! title passes through untouched; authored-data problems are the
//! author's to fix, surfaced (if at all) by `wikinav check`.

use serde::{Deserialize, Serialize};

/// One navigable item: icon, title, description, target.
///
/// Field names are the wire contract with the renderer. `desc` is
/// accepted as an input alias, but output always says `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Icon URL or site-local path. Decorative.
    #[serde(default)]
    pub icon: String,

    /// Display title.
    pub title: String,

    /// Free-text description shown under the title.
    #[serde(default, alias = "desc")]
    pub description: String,

    /// Target: absolute external URL, or site path beginning with `/`.
    pub link: String,
}

/// A titled, ordered collection of [`NavLink`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Category label.
    pub title: String,

    /// Entries in display order.
    #[serde(default)]
    items: Vec<NavLink>,
}

impl NavGroup {
    /// Build a group from a title and its entries.
    pub fn new(title: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Entries in authored order.
    #[inline]
    pub fn items(&self) -> &[NavLink] {
        &self.items
    }

    /// Number of entries in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the group has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The full ordered collection of [`NavGroup`] records for the site.
///
/// Constructed once at startup, read many times, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavCatalog {
    groups: Vec<NavGroup>,
}

impl NavCatalog {
    /// Assemble a catalog from already-parsed groups.
    ///
    /// Pure in-memory construction: no I/O, no validation, no
    /// reordering. Authored order is preserved exactly.
    pub fn from_groups(groups: Vec<NavGroup>) -> Self {
        Self { groups }
    }

    /// Groups in authored order.
    ///
    /// Total: never fails, never filters or sorts. Repeated calls
    /// return the same data.
    #[inline]
    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    /// Total entry count across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(NavGroup::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, link: &str) -> NavLink {
        NavLink {
            icon: "a.png".into(),
            title: title.into(),
            description: String::new(),
            link: link.into(),
        }
    }

    #[test]
    fn test_groups_preserve_authored_order() {
        let catalog = NavCatalog::from_groups(vec![
            NavGroup::new("zeta", vec![link("z2", "/z2"), link("z1", "/z1")]),
            NavGroup::new("alpha", vec![link("a1", "/a1")]),
        ]);

        // No sorting side effect: "zeta" stays first, "z2" stays first
        let groups = catalog.groups();
        assert_eq!(groups[0].title, "zeta");
        assert_eq!(groups[1].title, "alpha");
        assert_eq!(groups[0].items()[0].title, "z2");
        assert_eq!(groups[0].items()[1].title, "z1");
    }

    #[test]
    fn test_repeated_reads_are_equal() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new("g", vec![link("t", "/t")])]);

        let first: Vec<NavGroup> = catalog.groups().to_vec();
        let second: Vec<NavGroup> = catalog.groups().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_roundtrip_field_by_field() {
        let entry = NavLink {
            icon: "https://example.com/icon.png".into(),
            title: "芷溪列传".into(),
            description: "梦开始的地方".into(),
            link: "https://docs.example.com/doc/abc".into(),
        };
        let catalog = NavCatalog::from_groups(vec![NavGroup::new("长篇", vec![entry.clone()])]);

        let got = &catalog.groups()[0].items()[0];
        assert_eq!(got.icon, entry.icon);
        assert_eq!(got.title, entry.title);
        assert_eq!(got.description, entry.description);
        assert_eq!(got.link, entry.link);
    }

    #[test]
    fn test_single_group_single_item() {
        let catalog = NavCatalog::from_groups(vec![NavGroup::new(
            "短篇",
            vec![NavLink {
                icon: "a.png".into(),
                title: "我传".into(),
                description: "滚去要你的饭".into(),
                link: "/article/我传".into(),
            }],
        )]);

        let groups = catalog.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0].items()[0].title, "我传");
        assert_eq!(groups[0].items()[0].link, "/article/我传");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = NavCatalog::default();
        assert!(catalog.groups().is_empty());
        assert_eq!(catalog.entry_count(), 0);
    }

    #[test]
    fn test_entry_count() {
        let catalog = NavCatalog::from_groups(vec![
            NavGroup::new("a", vec![link("1", "/1"), link("2", "/2")]),
            NavGroup::new("b", vec![link("3", "/3")]),
            NavGroup::new("empty", vec![]),
        ]);
        assert_eq!(catalog.entry_count(), 3);
        assert!(catalog.groups()[2].is_empty());
    }
}
