//! Extractor: composes block location and name extraction over a build
//! configuration file. Distinguishes "no targets block" (a normal outcome,
//! reported as `None`) from "block present but empty" (`Some` of an empty
//! list) so callers can preserve the silent no-op behavior for missing
//! declarations.
//!
//! Typical usage:
//!
//! ```no_run
//! # fn main() -> Result<(), extract_targets::extract::ExtractError> {
//! if let Some(names) = extract_targets::extract::extract_from_path("build.config.zig")? {
//!     println!("{}", extract_targets::render::render_list(&names));
//! }
//! # Ok(())
//! # }
//! ```
use std::fs;
use std::path::Path;

use crate::block::find_targets_block;
use crate::names::extract_names;

/// Conventional build configuration filename read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "build.config.zig";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
}

/// Extract target names from configuration text already in memory.
pub fn extract_from_contents(contents: &str) -> Option<Vec<String>> {
    find_targets_block(contents).map(extract_names)
}

/// Read a configuration file and extract target names from it. The only
/// error path is an unreadable file; an absent block is `Ok(None)`.
pub fn extract_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, ExtractError> {
    let contents = fs::read_to_string(&path).map_err(|source| ExtractError::Unreadable {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    Ok(extract_from_contents(&contents))
}
