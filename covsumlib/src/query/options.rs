//! Sort options for report file summaries.

use std::cmp;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::summary::Summary;
use crate::error::CovsumError;
use crate::Result;

/// Column to sort file summaries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Display name (lexicographical)
    #[default]
    Filename,
    /// Block coverage percentage
    Block,
    /// Statement coverage percentage
    Stmt,
    /// Number of blocks that never ran
    MissingBlocks,
    /// Number of statements that never ran
    MissingStmts,
}

impl SortKey {
    /// All keys, in the order they are listed in help text.
    pub const ALL: [SortKey; 5] = [
        SortKey::Filename,
        SortKey::Block,
        SortKey::Stmt,
        SortKey::MissingBlocks,
        SortKey::MissingStmts,
    ];

    /// Name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Filename => "filename",
            SortKey::Block => "block",
            SortKey::Stmt => "stmt",
            SortKey::MissingBlocks => "missing-blocks",
            SortKey::MissingStmts => "missing-stmts",
        }
    }

    /// Three-way comparison of two summaries on this column, ascending.
    pub fn compare(&self, a: &Summary, b: &Summary) -> cmp::Ordering {
        match self {
            SortKey::Filename => a.name.cmp(&b.name),
            SortKey::Block => a.block_coverage.total_cmp(&b.block_coverage),
            SortKey::Stmt => a.stmt_coverage.total_cmp(&b.stmt_coverage),
            SortKey::MissingBlocks => a.missing_blocks.cmp(&b.missing_blocks),
            SortKey::MissingStmts => a.missing_stmts.cmp(&b.missing_stmts),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CovsumError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CovsumError::InvalidSortKey(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ordering: cmp::Ordering) -> cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = CovsumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(CovsumError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Ordering configuration for file summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ordering {
    /// Column to sort by
    pub by: SortKey,
    /// Sort direction
    pub direction: SortDirection,
}

impl Ordering {
    pub fn new(by: SortKey, direction: SortDirection) -> Self {
        Self { by, direction }
    }

    /// Parse a column and direction given as text.
    ///
    /// The direction is checked first, so when both are invalid the
    /// direction error is the one reported.
    pub fn parse(by: &str, direction: &str) -> Result<Self> {
        let direction = direction.parse::<SortDirection>()?;
        let by = by.parse::<SortKey>()?;
        Ok(Self { by, direction })
    }

    /// Create ordering by filename ascending (default)
    pub fn by_filename() -> Self {
        Self::default()
    }

    /// Create ordering by block coverage, lowest first
    pub fn by_block_coverage() -> Self {
        Self::new(SortKey::Block, SortDirection::Ascending)
    }

    /// Create ordering by statement coverage, lowest first
    pub fn by_stmt_coverage() -> Self {
        Self::new(SortKey::Stmt, SortDirection::Ascending)
    }

    /// Create ordering by missing blocks, most first
    pub fn by_missing_blocks() -> Self {
        Self::new(SortKey::MissingBlocks, SortDirection::Descending)
    }

    /// Create ordering by missing statements, most first
    pub fn by_missing_stmts() -> Self {
        Self::new(SortKey::MissingStmts, SortDirection::Descending)
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = SortDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Compare two summaries under this ordering.
    pub fn compare(&self, a: &Summary, b: &Summary) -> cmp::Ordering {
        self.direction.apply(self.by.compare(a, b))
    }
}
