//! Check report types and formatting.

use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single authoring issue found in the nav data.
#[derive(Debug, Clone)]
pub struct CheckIssue {
    /// The entry title (or positional label) the issue points at.
    pub target: String,
    /// Issue description.
    pub reason: String,
}

/// Issues for one nav group.
#[derive(Debug, Default)]
pub struct GroupReport {
    /// Group label as shown in the report.
    pub title: String,
    pub errors: Vec<CheckIssue>,
    pub warnings: Vec<CheckIssue>,
}

impl GroupReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn error(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(CheckIssue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn warn(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(CheckIssue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Full check report across all groups. Groups keep authored order so
/// the report reads like the data file.
#[derive(Debug, Default)]
pub struct CheckReport {
    groups: Vec<GroupReport>,
}

impl CheckReport {
    /// Add a group's findings; clean groups are dropped.
    pub fn push(&mut self, group: GroupReport) {
        if !group.is_clean() {
            self.groups.push(group);
        }
    }

    pub fn error_count(&self) -> usize {
        self.groups.iter().map(|g| g.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.groups.iter().map(|g| g.warnings.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Print the full report to stderr, group by group.
    pub fn print(&self) {
        for group in &self.groups {
            eprintln!();
            eprintln!("{}{}{}", "[".dimmed(), group.title.cyan(), "]".dimmed());
            for e in &group.errors {
                eprintln!("{} {}: {}", "→".red(), e.target, e.reason);
            }
            for w in &group.warnings {
                eprintln!("{} {}: {}", "→".yellow(), w.target, w.reason);
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }

        if errors > 0 {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                errors.to_string().red().bold(),
                format!("error{}", plural_s(errors)).dimmed()
            )?;
        }
        if warnings > 0 {
            if errors > 0 {
                write!(f, "{}", ", ".dimmed())?;
            } else {
                write!(f, "{} ", "found".dimmed())?;
            }
            write!(
                f,
                "{} {}",
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_groups_dropped() {
        let mut report = CheckReport::default();
        report.push(GroupReport::new("clean"));
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_counts() {
        let mut report = CheckReport::default();

        let mut g = GroupReport::new("g");
        g.error("entry", "link is empty");
        g.warn("entry", "icon is empty");
        report.push(g);

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }
}
