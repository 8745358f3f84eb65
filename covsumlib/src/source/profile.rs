//! Go cover profile parsing.
//!
//! A profile is the text written by `go test -coverprofile`:
//!
//! ```text
//! mode: set
//! github.com/acme/widget/a.go:3.14,5.2 2 1
//! github.com/acme/widget/a.go:7.10,9.3 1 0
//! ```
//!
//! Each block line is `<file>:<startLine>.<startCol>,<endLine>.<endCol> <numStmt> <count>`.
//! Blocks are grouped per file, files are returned sorted by name, and blocks
//! inside a file are sorted by start position with duplicate ranges merged.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CovsumError;
use crate::Result;

/// Counting mode declared in the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Whether each block ran at all
    Set,
    /// How many times each block ran
    Count,
    /// Like `Count`, but collected with atomic counters
    Atomic,
}

impl Mode {
    /// Name as written in the `mode:` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Set => "set",
            Mode::Count => "count",
            Mode::Atomic => "atomic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "set" => Ok(Mode::Set),
            "count" => Ok(Mode::Count),
            "atomic" => Ok(Mode::Atomic),
            _ => Err(format!("unknown mode '{}'", s)),
        }
    }
}

/// A contiguous run of statements sharing one execution count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBlock {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    /// Number of statements in the block
    pub num_stmt: u64,
    /// Execution count (0 means never executed)
    pub count: u64,
}

impl ProfileBlock {
    /// Create a block with the given statement and execution counts at position zero.
    pub fn new(num_stmt: u64, count: u64) -> Self {
        Self {
            num_stmt,
            count,
            ..Self::default()
        }
    }

    /// Builder: set the source range as `(line, column)` pairs.
    pub fn at(mut self, start: (u32, u32), end: (u32, u32)) -> Self {
        self.start_line = start.0;
        self.start_col = start.1;
        self.end_line = end.0;
        self.end_col = end.1;
        self
    }

    /// Whether the block ran at least once.
    pub fn is_covered(&self) -> bool {
        self.count > 0
    }

    fn start(&self) -> (u32, u32) {
        (self.start_line, self.start_col)
    }

    fn same_range(&self, other: &ProfileBlock) -> bool {
        self.start() == other.start()
            && (self.end_line, self.end_col) == (other.end_line, other.end_col)
    }
}

/// All blocks recorded for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// File name exactly as written in the profile (usually an import path)
    pub file_name: String,
    pub mode: Mode,
    /// Blocks ordered by start position
    pub blocks: Vec<ProfileBlock>,
}

impl Profile {
    /// Create an empty profile for a file.
    pub fn new(file_name: impl Into<String>, mode: Mode) -> Self {
        Self {
            file_name: file_name.into(),
            mode,
            blocks: Vec::new(),
        }
    }

    /// Builder: replace the block list.
    pub fn with_blocks(mut self, blocks: Vec<ProfileBlock>) -> Self {
        self.blocks = blocks;
        self
    }
}

/// Read and parse a cover profile from disk.
pub fn parse_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CovsumError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profiles_str(&text)
}

/// Parse cover profile text.
///
/// # Example
///
/// ```rust
/// use covsumlib::{parse_profiles_str, Mode};
///
/// let profiles = parse_profiles_str("mode: set\nb.go:1.1,2.2 5 1\na.go:1.1,3.2 3 0\n").unwrap();
/// assert_eq!(profiles.len(), 2);
/// assert_eq!(profiles[0].file_name, "a.go");
/// assert_eq!(profiles[0].mode, Mode::Set);
/// ```
pub fn parse_profiles_str(text: &str) -> Result<Vec<Profile>> {
    let mut mode: Option<Mode> = None;
    let mut files: BTreeMap<String, Vec<(usize, ProfileBlock)>> = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("mode:") {
            let parsed = rest
                .trim()
                .parse::<Mode>()
                .map_err(|message| parse_error(line_no, message))?;
            match mode {
                None => mode = Some(parsed),
                Some(existing) if existing != parsed => {
                    return Err(parse_error(
                        line_no,
                        format!("mode '{}' conflicts with earlier mode '{}'", parsed, existing),
                    ));
                }
                Some(_) => {}
            }
            continue;
        }

        if mode.is_none() {
            return Err(parse_error(line_no, "expected 'mode:' header line"));
        }

        let (file_name, block) =
            parse_block_line(line).map_err(|message| parse_error(line_no, message))?;
        files
            .entry(file_name.to_string())
            .or_default()
            .push((line_no, block));
    }

    let Some(mode) = mode else {
        return Ok(Vec::new());
    };

    let mut profiles = Vec::with_capacity(files.len());
    for (file_name, blocks) in files {
        let blocks = merge_blocks(blocks, mode)?;
        profiles.push(Profile {
            file_name,
            mode,
            blocks,
        });
    }

    debug!(files = profiles.len(), mode = %mode, "parsed cover profile");
    Ok(profiles)
}

fn parse_error(line: usize, message: impl Into<String>) -> CovsumError {
    CovsumError::Parse {
        line,
        message: message.into(),
    }
}

/// Parse one `<file>:<range> <numStmt> <count>` line.
///
/// Fields are taken from the right so file names may contain spaces or colons.
fn parse_block_line(line: &str) -> std::result::Result<(&str, ProfileBlock), String> {
    let mut fields = line.rsplitn(3, ' ');
    let (Some(count), Some(num_stmt), Some(location)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!(
            "expected '<file>:<range> <numStmt> <count>', got '{}'",
            line
        ));
    };

    let (file_name, range) = location
        .rsplit_once(':')
        .ok_or_else(|| format!("missing ':' between file name and range in '{}'", location))?;
    if file_name.is_empty() {
        return Err("empty file name".to_string());
    }

    let (start, end) = range
        .split_once(',')
        .ok_or_else(|| format!("invalid range '{}'", range))?;
    let start = parse_position(start)?;
    let end = parse_position(end)?;

    let num_stmt = parse_count(num_stmt, "statement")?;
    let count = parse_count(count, "execution")?;

    Ok((file_name, ProfileBlock::new(num_stmt, count).at(start, end)))
}

/// Counts are bounded by the Go toolchain's signed 64-bit `int`.
fn parse_count(text: &str, what: &str) -> std::result::Result<u64, String> {
    let value = text
        .parse::<u64>()
        .map_err(|_| format!("invalid {} count '{}'", what, text))?;
    if value > i64::MAX as u64 {
        return Err(format!("{} count '{}' out of range", what, text));
    }
    Ok(value)
}

fn parse_position(text: &str) -> std::result::Result<(u32, u32), String> {
    let invalid = || format!("invalid position '{}'", text);
    let (line, col) = text.split_once('.').ok_or_else(invalid)?;
    let line = line.parse::<u32>().map_err(|_| invalid())?;
    let col = col.parse::<u32>().map_err(|_| invalid())?;
    Ok((line, col))
}

/// Sort blocks by position and fold repeated ranges together.
fn merge_blocks(mut blocks: Vec<(usize, ProfileBlock)>, mode: Mode) -> Result<Vec<ProfileBlock>> {
    blocks.sort_by_key(|(_, block)| (block.start(), block.end_line, block.end_col));

    let mut merged: Vec<ProfileBlock> = Vec::with_capacity(blocks.len());
    for (line_no, block) in blocks {
        match merged.last_mut() {
            Some(last) if last.same_range(&block) => {
                if last.num_stmt != block.num_stmt {
                    return Err(parse_error(
                        line_no,
                        format!(
                            "inconsistent statement count: changed from {} to {}",
                            last.num_stmt, block.num_stmt
                        ),
                    ));
                }
                last.count = match mode {
                    Mode::Set => last.count | block.count,
                    Mode::Count | Mode::Atomic => last.count.saturating_add(block.count),
                };
            }
            _ => merged.push(block),
        }
    }
    Ok(merged)
}
