//! Config command implementation.

use crate::models::config::{Config, ConfigSource};
use anyhow::Result;
use colored::Colorize;

/// Print the effective configuration.
pub fn show_config(config: &Config, source: &ConfigSource) -> Result<()> {
    let note = match source {
        ConfigSource::File(_) => String::new(),
        ConfigSource::Missing(_) => " (not found, using defaults)".to_string(),
        ConfigSource::Invalid(_, e) => format!(" (invalid: {}, using defaults)", e),
    };

    println!("{} {}{}", "# Config file:".dimmed(), source.path().display(), note);
    print!("{}", config.to_toml()?);
    Ok(())
}
