use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Launches external programs found through `PATH`.
///
/// The child shares this process's stdout and stderr. Its stdin is not
/// connected, so programs that read input see end-of-file.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with `args` and blocks until it exits.
    ///
    /// A non-zero exit or death by signal is returned as
    /// [`ProcessError::Failed`].
    pub fn run(&self, program: &str, args: &[&str]) -> Result<ExitStatus, ProcessError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ProcessError::CommandNotFound(program.to_string()),
                _ => ProcessError::Spawn {
                    program: program.to_string(),
                    source,
                },
            })?;

        log::debug!("spawned {} as pid {}", program, child.id());

        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: program.to_string(),
            source,
        })?;
        log::debug!("{} exited with {}", program, status);

        if status.success() {
            Ok(status)
        } else {
            Err(ProcessError::Failed {
                program: program.to_string(),
                status,
            })
        }
    }
}
