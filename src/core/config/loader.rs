use std::{fs, path::Path, str::FromStr};

use super::{Config, ConfigError};

/// Reads `key = value` lines from an rc file.
pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        log::debug!("loading config from {}", self.path.display());
        let content = fs::read_to_string(self.path)?;
        apply(&content, config)
    }
}

fn apply(content: &str, config: &mut Config) -> Result<(), ConfigError> {
    for (idx, raw) in content.lines().enumerate() {
        process_line(idx + 1, raw, config)?;
    }
    Ok(())
}

fn process_line(line_no: usize, raw: &str, config: &mut Config) -> Result<(), ConfigError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    let (key, value) = line
        .split_once('=')
        .ok_or(ConfigError::MalformedLine(line_no))?;
    let key = key.trim();
    let value = unquote(value.trim());

    match key {
        "interrupt" => config.interrupt = parse_value(line_no, key, value)?,
        "color" => config.color = parse_value(line_no, key, value)?,
        "history_file" => config.history_file = Some(value.into()),
        "history_size" => {
            config.history_size = parse_value(line_no, key, value)?;
        }
        "banner" => config.banner = parse_value(line_no, key, value)?,
        _ => log::warn!("line {}: unknown config key '{}'", line_no, key),
    }
    Ok(())
}

fn parse_value<T>(line: usize, key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        line,
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
