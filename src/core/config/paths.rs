use super::ConfigError;
use std::path::{Path, PathBuf};

pub const RC_FILE: &str = ".mishellrc";
pub const HISTORY_FILE: &str = ".mishell_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    /// Paths under the home directory, with `custom_rc` taking over the rc file.
    ///
    /// A missing default rc file is fine; a missing custom one is an error.
    pub fn new(custom_rc: Option<&Path>) -> Result<Self, ConfigError> {
        let home = dirs::home_dir();
        Self::with_home(home.as_deref(), custom_rc)
    }

    pub fn with_home(home: Option<&Path>, custom_rc: Option<&Path>) -> Result<Self, ConfigError> {
        let rc_path = match custom_rc {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => return Err(ConfigError::ConfigFileNotFound(path.to_path_buf())),
            None => home.map(|h| h.join(RC_FILE)).filter(|p| p.is_file()),
        };

        Ok(ConfigPaths {
            rc_path,
            history_path: home.map(|h| h.join(HISTORY_FILE)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_paths() {
        let home = tempdir().unwrap();
        fs::write(home.path().join(RC_FILE), "").unwrap();

        let paths = ConfigPaths::with_home(Some(home.path()), None).unwrap();
        assert_eq!(paths.rc_path, Some(home.path().join(".mishellrc")));
        assert_eq!(paths.history_path, Some(home.path().join(".mishell_history")));
    }

    #[test]
    fn test_missing_default_rc_is_skipped() {
        let home = tempdir().unwrap();

        let paths = ConfigPaths::with_home(Some(home.path()), None).unwrap();
        assert_eq!(paths.rc_path, None);
    }

    #[test]
    fn test_missing_home() {
        let paths = ConfigPaths::with_home(None, None).unwrap();
        assert!(paths.rc_path.is_none());
        assert!(paths.history_path.is_none());
    }

    #[test]
    fn test_custom_rc() {
        let home = tempdir().unwrap();
        let custom = home.path().join("custom.rc");
        fs::write(&custom, "banner = false\n").unwrap();

        let paths = ConfigPaths::with_home(Some(home.path()), Some(&custom)).unwrap();
        assert_eq!(paths.rc_path, Some(custom));
    }

    #[test]
    fn test_missing_custom_rc() {
        let home = tempdir().unwrap();
        let result = ConfigPaths::with_home(Some(home.path()), Some(Path::new("/no/such/rc")));
        assert!(matches!(result, Err(ConfigError::ConfigFileNotFound(_))));
    }
}
