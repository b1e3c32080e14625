use std::path::{Path, PathBuf};

/// Marker file, relative to a working tree root, that records the checked-out ref.
pub const MARKER: &str = ".git/HEAD";

/// Walks from `start` up to the filesystem root looking for [`MARKER`].
///
/// Returns the full path of the first marker found. A directory sitting at
/// the marker path does not count. Visits at most `depth(start) + 1`
/// directories.
pub fn locate_marker(start: &Path) -> Option<PathBuf> {
    let found = start
        .ancestors()
        .map(|dir| dir.join(MARKER))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(marker) => log::trace!("found marker at {}", marker.display()),
        None => log::trace!("no marker above {}", start.display()),
    }
    found
}
