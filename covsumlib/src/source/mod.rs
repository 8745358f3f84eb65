//! Source handling: read profiles and decide which files to report.
//!
//! This module handles the first stage of the pipeline - turning a cover
//! profile into blocks and mapping raw file names to report names. It provides:
//!
//! - **Profile parsing**: Go cover profile text into per-file blocks
//! - **Path filtering**: Root stripping and prefix exclusion
//!
//! ## Example
//!
//! ```rust,ignore
//! use covsumlib::source::{parse_profiles, PathFilter};
//!
//! let profiles = parse_profiles("coverage.out")?;
//! let filter = PathFilter::new()
//!     .root("github.com/acme/widget")
//!     .exclude("internal/generated");
//! ```

pub mod paths;
pub mod profile;

pub use paths::PathFilter;
pub use profile::{parse_profiles, parse_profiles_str, Mode, Profile, ProfileBlock};
