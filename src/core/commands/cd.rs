use super::{tokenize, Command, CommandError, Flow};
use crate::core::state::ShellState;
use std::path::Path;

/// `cd <path>`. Without an argument it does nothing; there is no home fallback.
#[derive(Debug, Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, line: &str, state: &mut ShellState) -> Result<Flow, CommandError> {
        let args = tokenize(line);
        let Some(target) = args.get(1) else {
            return Ok(Flow::Continue);
        };

        let path = Path::new(target);
        state
            .change_dir(path)
            .map_err(|source| CommandError::ChangeDirectory {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cwd_lock;
    use std::env;

    #[test]
    fn test_cd_without_argument_is_noop() {
        let _guard = cwd_lock();
        let cmd = CdCommand::new();
        let mut state = ShellState::new().unwrap();
        let before = state.cwd().to_path_buf();

        assert_eq!(cmd.execute("cd", &mut state).unwrap(), Flow::Continue);
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_cd_temp() {
        let _guard = cwd_lock();
        let original = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().canonicalize().unwrap();

        let cmd = CdCommand::new();
        let mut state = ShellState::new().unwrap();
        let line = format!("cd {}", target.display());
        let result = cmd.execute(&line, &mut state);
        let now = env::current_dir().unwrap();
        env::set_current_dir(original).unwrap();

        assert!(result.is_ok());
        assert_eq!(now, target);
    }

    #[test]
    fn test_cd_into_file_fails() {
        let _guard = cwd_lock();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let cmd = CdCommand::new();
        let mut state = ShellState::new().unwrap();
        let before = state.cwd().to_path_buf();
        let line = format!("cd {}", file.display());

        assert!(cmd.execute(&line, &mut state).is_err());
        assert_eq!(state.cwd(), before.as_path());
    }

    #[test]
    fn test_cd_uses_only_first_argument() {
        let _guard = cwd_lock();
        let cmd = CdCommand::new();
        let mut state = ShellState::new().unwrap();

        let result = cmd.execute("cd /no/such/path /tmp", &mut state);
        assert!(matches!(
            result,
            Err(CommandError::ChangeDirectory { path, .. }) if path == Path::new("/no/such/path")
        ));
    }
}
