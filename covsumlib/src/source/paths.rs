//! Display names and prefix exclusion for profile file names.
//!
//! Profiles name files by import path (`github.com/acme/widget/a.go`). A
//! configured root is stripped once from the front to get the name shown in
//! the report, and any file whose display name starts with an exclusion
//! prefix is left out of the report entirely.

/// Configuration for mapping and excluding profile file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    /// Prefix stripped (with a trailing `/`) from every file name; empty disables stripping
    pub root: String,
    /// Display-name prefixes to leave out of the report
    pub exclusions: Vec<String>,
}

impl PathFilter {
    /// Create a filter with no root and no exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root prefix.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Add an exclusion prefix. An empty prefix matches every file.
    pub fn exclude(mut self, prefix: impl Into<String>) -> Self {
        self.exclusions.push(prefix.into());
        self
    }

    /// Add multiple exclusion prefixes.
    pub fn exclude_many<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            self = self.exclude(prefix);
        }
        self
    }

    /// Map a raw profile file name to its report name.
    ///
    /// Strips exactly one leading `root/`. Names outside the root are returned as is.
    pub fn display_name<'a>(&self, raw: &'a str) -> &'a str {
        if self.root.is_empty() {
            return raw;
        }
        raw.strip_prefix(self.root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(raw)
    }

    /// Check whether a display name falls under any exclusion prefix.
    ///
    /// This is a plain string prefix test, so `internal` also excludes
    /// `internal/x.go` and `internalize.go`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }
}
