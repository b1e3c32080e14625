//! Version-control awareness for the prompt.
//!
//! Everything in here is best-effort: a missing repository, an unreadable
//! marker or a detached HEAD all collapse into "no branch".

mod branch;
mod locator;

pub use branch::{parse_branch, resolve_branch, REF_PREFIX};
pub use locator::{locate_marker, MARKER};

use std::path::Path;

/// Branch checked out in the repository enclosing `dir`, if any.
///
/// Recomputed on every call; callers must not cache the result across
/// prompt renders since both the directory and the repository can change.
pub fn current_branch(dir: &Path) -> Option<String> {
    let marker = locate_marker(dir)?;
    resolve_branch(&marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_current_branch_from_nested_dir() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join(".git")).unwrap();
        fs::write(root.path().join(MARKER), "ref: refs/heads/feature/prompt\n").unwrap();
        let nested = root.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            current_branch(&nested).as_deref(),
            Some("feature/prompt")
        );
    }

    #[test]
    fn test_current_branch_detached() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join(".git")).unwrap();
        fs::write(
            root.path().join(MARKER),
            "3f786850e387550fdab836ed7e6dc881de23001b\n",
        )
        .unwrap();

        assert_eq!(current_branch(root.path()), None);
    }
}
