use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// State owned by the read-eval loop.
///
/// `cwd` mirrors the OS working directory; it is only ever written right
/// after the OS state changes, or refreshed from it.
#[derive(Debug, Clone)]
pub struct ShellState {
    cwd: PathBuf,
}

impl ShellState {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            cwd: env::current_dir()?,
        })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Changes the process working directory, then records it.
    pub fn change_dir(&mut self, target: &Path) -> io::Result<()> {
        env::set_current_dir(target)?;
        self.cwd = env::current_dir().unwrap_or_else(|_| self.cwd.join(target));
        log::debug!("working directory is now {}", self.cwd.display());
        Ok(())
    }

    /// Re-reads the working directory from the OS.
    ///
    /// Keeps the last known value if the directory has vanished.
    pub fn refresh(&mut self) {
        match env::current_dir() {
            Ok(dir) => self.cwd = dir,
            Err(e) => log::warn!("cannot read working directory: {}", e),
        }
    }
}
