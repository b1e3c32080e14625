//! Built-in/external dispatch.
//!
//! Lines are split on single spaces only: no quoting, escaping or
//! expansion. Consecutive spaces produce empty arguments.

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

use std::path::PathBuf;

use crate::core::state::ShellState;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    ChangeDirectory { path: PathBuf, source: std::io::Error },
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::ChangeDirectory { path, source } => {
                write!(f, "cd: {}: {}", path.display(), source)
            }
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::ChangeDirectory { source, .. } => Some(source),
            CommandError::ProcessError(err) => Some(err),
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the loop should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// A built-in. Receives the whole input line and reparses it itself.
pub trait Command {
    fn execute(&self, line: &str, state: &mut ShellState) -> Result<Flow, CommandError>;
}

/// Classification of an input verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    ChangeDirectory,
    Exit,
    Help,
    External,
}

impl CommandType {
    pub fn classify(verb: &str) -> Self {
        match verb {
            "cd" => CommandType::ChangeDirectory,
            "exit" => CommandType::Exit,
            "help" => CommandType::Help,
            _ => CommandType::External,
        }
    }
}

/// Splits a line into verb and arguments on single spaces.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    cd: CdCommand,
    exit: ExitCommand,
    help: HelpCommand,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self {
            process_executor,
            ..Self::default()
        }
    }

    /// Runs one input line. Empty lines do nothing.
    pub fn dispatch(&self, line: &str, state: &mut ShellState) -> Result<Flow, CommandError> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let tokens = tokenize(line);
        let verb = tokens[0];
        let kind = CommandType::classify(verb);
        log::debug!("dispatching {:?} for '{}'", kind, verb);

        match kind {
            CommandType::ChangeDirectory => self.cd.execute(line, state),
            CommandType::Exit => self.exit.execute(line, state),
            CommandType::Help => self.help.execute(line, state),
            CommandType::External => {
                self.process_executor.run(verb, &tokens[1..])?;
                Ok(Flow::Continue)
            }
        }
    }
}
