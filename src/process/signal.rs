use std::sync::OnceLock;

use crate::process::ProcessError;

static INSTALL: OnceLock<Result<(), String>> = OnceLock::new();

/// Keeps Ctrl-C from killing the shell while a child is running.
///
/// The terminal delivers the interrupt to the whole foreground group, so the
/// child still receives it; the shell just ignores its copy. At the prompt
/// the line reader sees the key itself and applies the interrupt policy.
/// The handler is installed at most once; later calls report the outcome
/// of the first attempt.
pub fn install_interrupt_guard() -> Result<(), ProcessError> {
    INSTALL
        .get_or_init(|| {
            ctrlc::set_handler(|| log::debug!("interrupt received")).map_err(|e| e.to_string())
        })
        .clone()
        .map_err(ProcessError::SignalError)
}
