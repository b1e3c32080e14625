use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `exit`. Arguments are ignored; the status is always success.
#[derive(Debug, Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _line: &str, _state: &mut ShellState) -> Result<Flow, CommandError> {
        Ok(Flow::Exit(0))
    }
}
