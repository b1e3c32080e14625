use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(
        name: &'static str,
        short: &'static str,
        long: &'static str,
        description: &'static str,
    ) -> Self {
        Flag {
            name,
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            Flag::switch("help", "-h", "--help", "Print this help message"),
            Flag::switch("version", "-v", "--version", "Show version information"),
            Flag {
                takes_value: true,
                ..Flag::switch(
                    "config",
                    "-c",
                    "--config",
                    "Read settings from this file instead of ~/.mishellrc",
                )
            },
            Flag::switch("quiet", "-q", "--quiet", "Skip the welcome banner"),
            Flag::switch("debug", "-d", "--debug", "Enable debug logging"),
            Flag::switch("no-color", "-n", "--no-color", "Disable colored output"),
        ];

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .iter_mut()
                .find(|f| arg == f.short || arg == f.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: mishell [OPTIONS]");
        println!("\nOptions:");
        for flag in &self.flags {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<18} {}", flag.short, long, flag.description);
        }
    }
}
