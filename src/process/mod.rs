use std::fmt;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Spawn { program: String, source: std::io::Error },
    Wait { program: String, source: std::io::Error },
    Failed { program: String, status: ExitStatus },
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Spawn { program, source } => {
                write!(f, "{}: failed to start: {}", program, source)
            }
            ProcessError::Wait { program, source } => {
                write!(f, "{}: failed to wait: {}", program, source)
            }
            ProcessError::Failed { program, status } => write!(f, "{}: {}", program, status),
            ProcessError::SignalError(msg) => write!(f, "signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ctrlc::Error> for ProcessError {
    fn from(e: ctrlc::Error) -> Self {
        ProcessError::SignalError(e.to_string())
    }
}
