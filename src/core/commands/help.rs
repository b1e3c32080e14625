use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

pub const HELP_TEXT: &str = "WIP";

#[derive(Debug, Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _line: &str, _state: &mut ShellState) -> Result<Flow, CommandError> {
        println!("{}", HELP_TEXT);
        Ok(Flow::Continue)
    }
}
