use std::fs;
use std::io;
use std::path::Path;

/// Prefix of a symbolic ref pointing at a local branch.
pub const REF_PREFIX: &str = "ref: refs/heads/";

/// Extracts the branch name from the contents of a HEAD marker.
///
/// Only the first line is considered. A line without [`REF_PREFIX`]
/// (detached HEAD) or with nothing after it yields `None`.
pub fn parse_branch(contents: &str) -> Option<String> {
    let first_line = contents.split('\n').next()?;
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    let start = first_line.find(REF_PREFIX)? + REF_PREFIX.len();
    let name = &first_line[start..];

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn read_marker(marker: &Path) -> io::Result<String> {
    fs::read_to_string(marker)
}

/// Reads `marker` and resolves the active branch.
///
/// Read errors are dropped here and never reach the prompt.
pub fn resolve_branch(marker: &Path) -> Option<String> {
    match read_marker(marker) {
        Ok(contents) => parse_branch(&contents),
        Err(e) => {
            log::debug!("ignoring unreadable marker {}: {}", marker.display(), e);
            None
        }
    }
}
