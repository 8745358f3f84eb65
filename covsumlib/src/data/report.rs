//! High-level report generation API.
//!
//! Report generation runs in two stages so a caller can re-sort without
//! re-parsing:
//! 1. [`aggregate`] applies root stripping and exclusion, then accumulates
//!    every block into per-file and total counters.
//! 2. [`Aggregation::into_report`] sorts the file summaries.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::options::Ordering;
use crate::query::sorter::sort_summaries;
use crate::source::paths::PathFilter;
use crate::source::profile::{parse_profiles, Profile};
use crate::Result;

use super::accumulator::Accumulator;
use super::summary::{Summary, TOTAL_NAME};

/// Options for generating a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Root stripping and exclusion
    pub filter: PathFilter,
    /// Order of the file summaries
    pub ordering: Ordering,
}

impl ReportOptions {
    /// Create new default options (no root, no exclusions, by filename ascending).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root prefix stripped from file names.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.filter = self.filter.root(root);
        self
    }

    /// Add an exclusion prefix.
    pub fn exclude(mut self, prefix: impl Into<String>) -> Self {
        self.filter = self.filter.exclude(prefix);
        self
    }

    /// Set the whole path filter.
    pub fn filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the ordering of file summaries.
    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }
}

/// Coverage report: the run-wide summary plus one summary per retained file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Coverage across every retained file
    pub total: Summary,
    /// Per-file coverage, in the requested order
    pub files: Vec<Summary>,
}

impl Report {
    /// Look up a file summary by display name.
    pub fn file(&self, name: &str) -> Option<&Summary> {
        self.files.iter().find(|s| s.name == name)
    }
}

/// Unsorted result of accumulating a profile.
///
/// Files appear in the order their display name was first seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub total: Summary,
    pub files: Vec<Summary>,
}

impl Aggregation {
    /// Build a sorted report, keeping this aggregation for further orderings.
    pub fn sorted(&self, ordering: Ordering) -> Report {
        self.clone().into_report(ordering)
    }

    /// Build a sorted report.
    pub fn into_report(self, ordering: Ordering) -> Report {
        let mut files = self.files;
        sort_summaries(&mut files, ordering);
        Report {
            total: self.total,
            files,
        }
    }
}

/// Accumulate parsed profiles into per-file and total summaries.
///
/// Files whose display name matches an exclusion prefix contribute to
/// nothing, not even the total. Profiles that map to the same display name
/// (possible once a root is stripped) share one summary.
pub fn aggregate(profiles: &[Profile], filter: &PathFilter) -> Aggregation {
    let mut total = Accumulator::new(TOTAL_NAME);
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut files: Vec<Accumulator> = Vec::new();
    let mut excluded = 0usize;

    for profile in profiles {
        let name = filter.display_name(&profile.file_name);
        if filter.is_excluded(name) {
            debug!(file = name, "excluded from report");
            excluded += 1;
            continue;
        }

        let slot = match index.get(name) {
            Some(&slot) => slot,
            None => {
                index.insert(name.to_string(), files.len());
                files.push(Accumulator::new(name));
                files.len() - 1
            }
        };

        let file = &mut files[slot];
        for block in &profile.blocks {
            file.add(block);
            total.add(block);
        }
    }

    debug!(files = files.len(), excluded, "aggregated coverage");

    Aggregation {
        total: total.finalize(),
        files: files.into_iter().map(Accumulator::finalize).collect(),
    }
}

/// Generate a coverage report from a profile on disk.
///
/// # Example
///
/// ```rust
/// use covsumlib::{generate_report, Ordering, ReportOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let profile = dir.path().join("coverage.out");
/// fs::write(&profile, "mode: set\nexample.com/m/a.go:1.1,3.2 4 1\nexample.com/m/b.go:1.1,2.2 1 0\n").unwrap();
///
/// let options = ReportOptions::new()
///     .root("example.com/m")
///     .ordering(Ordering::by_missing_stmts());
/// let report = generate_report(&profile, &options).unwrap();
///
/// assert_eq!(report.total.stmts, 5);
/// assert_eq!(report.files[0].name, "b.go");
/// ```
pub fn generate_report(source: impl AsRef<Path>, options: &ReportOptions) -> Result<Report> {
    let profiles = parse_profiles(source)?;
    Ok(aggregate(&profiles, &options.filter).into_report(options.ordering))
}

/// Generate a coverage report with the sort column and direction given as text.
///
/// `sort_key` is one of `filename`, `block`, `stmt`, `missing-blocks` or
/// `missing-stmts`; `direction` is `asc` or `desc`. The profile is parsed and
/// aggregated first, so a malformed profile is reported ahead of a bad sort
/// argument.
pub fn generate_report_with<S: AsRef<str>>(
    source: impl AsRef<Path>,
    root: &str,
    exclusions: &[S],
    sort_key: &str,
    direction: &str,
) -> Result<Report> {
    let profiles = parse_profiles(source)?;
    let filter = PathFilter::new()
        .root(root)
        .exclude_many(exclusions.iter().map(|e| e.as_ref().to_string()));
    let aggregation = aggregate(&profiles, &filter);
    let ordering = Ordering::parse(sort_key, direction)?;
    Ok(aggregation.into_report(ordering))
}
