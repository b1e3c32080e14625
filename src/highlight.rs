use inksac::prelude::*;
use std::str::FromStr;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("expected auto, always or never, got '{}'", other)),
        }
    }
}

/// Cosmetic styling for prompt pieces and diagnostics.
///
/// Every method returns its input unchanged when color is disabled, so the
/// text content never depends on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Decorator {
    enabled: bool,
}

impl Decorator {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !matches!(
                check_color_support().unwrap_or(ColorSupport::NoColor),
                ColorSupport::NoColor
            ),
        };
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let style = if bold {
            Style::builder().foreground(color).bold().build()
        } else {
            Style::builder().foreground(color).build()
        };
        text.style(style).to_string()
    }

    pub fn arrow(&self, text: &str) -> String {
        self.paint(text, Color::Yellow, false)
    }

    pub fn directory(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, true)
    }

    pub fn branch_delimiter(&self, text: &str) -> String {
        self.paint(text, Color::Blue, true)
    }

    pub fn branch_name(&self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }
}
