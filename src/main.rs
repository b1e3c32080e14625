use mishell::flags::Flags;
use mishell::shell::Shell;
use std::env;

fn init_logging(flags: &Flags) {
    let default_level = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<(), mishell::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Mishell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let mut shell = Shell::new(&flags)?;
    let status = shell.run();
    std::process::exit(status);
}
