use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::core::config::Config;
use crate::error::ShellError;

#[derive(Debug)]
pub enum ReadError {
    Interrupted,
    Eof,
    Io(String),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Interrupted => write!(f, "interrupted"),
            ReadError::Eof => write!(f, "EOF"),
            ReadError::Io(msg) => write!(f, "read error: {}", msg),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<ReadlineError> for ReadError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted => ReadError::Interrupted,
            ReadlineError::Eof => ReadError::Eof,
            other => ReadError::Io(other.to_string()),
        }
    }
}

/// Source of input lines for the loop.
pub trait LineReader {
    /// Shows `prompt` and blocks for one line, without its newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError>;

    /// Offers an accepted line to history, if the reader keeps one.
    fn remember(&mut self, _line: &str) {}
}

/// Line reader backed by rustyline, with optional persistent history.
pub struct EditorReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)?
            .history_ignore_dups(true)?
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(editor_config)?;

        if let Some(path) = &config.history_file {
            if let Err(e) = editor.load_history(path) {
                log::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(EditorReader {
            editor,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        // rustyline only draws the prompt on a terminal.
        if io::stdin().is_terminal() {
            return Ok(self.editor.readline(prompt)?);
        }

        let mut stdout = io::stdout();
        stdout
            .write_all(prompt.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| ReadError::Io(e.to_string()))?;
        Ok(self.editor.readline("")?)
    }

    fn remember(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if let Err(e) = self.editor.add_history_entry(line) {
            log::warn!("couldn't add to history: {}", e);
            return;
        }
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readline_error_mapping() {
        assert!(matches!(
            ReadError::from(ReadlineError::Interrupted),
            ReadError::Interrupted
        ));
        assert!(matches!(ReadError::from(ReadlineError::Eof), ReadError::Eof));
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(matches!(
            ReadError::from(ReadlineError::Io(io)),
            ReadError::Io(_)
        ));
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(ReadError::Eof.to_string(), "EOF");
        assert_eq!(
            ReadError::Io("closed".to_string()).to_string(),
            "read error: closed"
        );
    }
}
