mod reader;

pub use reader::{EditorReader, LineReader, ReadError};

use std::path::Path;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        config::{Config, ConfigPaths, InterruptPolicy},
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    highlight::{ColorMode, Decorator},
    process::{signal, ProcessExecutor},
    prompt::PromptRenderer,
};

pub const EXIT_ABORT: i32 = 1;

/// The read-eval loop: render prompt, read a line, dispatch, repeat.
pub struct Shell<R: LineReader> {
    reader: R,
    state: ShellState,
    prompt: PromptRenderer,
    executor: CommandExecutor,
    decorator: Decorator,
    interrupt: InterruptPolicy,
    banner: bool,
}

impl Shell<EditorReader> {
    /// Interactive shell on the terminal, configured from flags and the rc file.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let custom_rc = flags.get_value("config").map(Path::new);
        let paths = ConfigPaths::new(custom_rc)?;
        let mut config = Config::load(&paths)?;

        if flags.is_set("no-color") {
            config.color = ColorMode::Never;
        }
        if flags.is_set("quiet") {
            config.banner = false;
        }
        log::debug!("effective config: {:?}", config);

        signal::install_interrupt_guard()?;

        let reader = EditorReader::new(&config)?;
        Shell::with_reader(reader, &config)
    }
}

impl<R: LineReader> Shell<R> {
    pub fn with_reader(reader: R, config: &Config) -> Result<Self, ShellError> {
        let decorator = Decorator::new(config.color);

        Ok(Shell {
            reader,
            state: ShellState::new()?,
            prompt: PromptRenderer::new(decorator),
            executor: CommandExecutor::new(ProcessExecutor::new()),
            decorator,
            interrupt: config.interrupt,
            banner: config.banner,
        })
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `exit` or a fatal read error. Returns the process exit status.
    pub fn run(&mut self) -> i32 {
        if self.banner {
            println!("Welcome to Mishell {}\n", env!("CARGO_PKG_VERSION"));
        }

        loop {
            self.state.refresh();
            let prompt = self.prompt.render(self.state.cwd());

            let line = match self.reader.read_line(&prompt) {
                Ok(line) => line,
                Err(ReadError::Interrupted) if self.interrupt == InterruptPolicy::Redraw => {
                    log::debug!("input interrupted, redrawing prompt");
                    continue;
                }
                Err(e) => return self.abort(&e),
            };

            let line = line.trim();
            self.reader.remember(line);

            match self.executor.dispatch(line, &mut self.state) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit(code)) => return code,
                Err(e) => self.report(&e),
            }
        }
    }

    fn report(&self, err: &dyn std::error::Error) {
        eprintln!("{}", self.decorator.error(&format!("mishell: {}", err)));
    }

    fn abort(&self, err: &ReadError) -> i32 {
        log::debug!("aborting on read error: {:?}", err);
        self.report(err);
        EXIT_ABORT
    }
}
