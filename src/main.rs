//! CLI entry point for chromastate.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use serde::Serialize;

use chromastate::cli::{Cli, Command, parse_input};
use chromastate::config::{AppConfig, OutputFormat};
use chromastate::hex::is_valid_hex;
use chromastate::logging::init_logging;
use chromastate::normalize::to_state;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "chromastate", &mut io::stdout());
        return Ok(());
    }

    let log_guard = cli
        .log_file
        .as_deref()
        .map(|path| init_logging(path, &cli.log_level));

    let loaded = AppConfig::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;
    let config = cli.apply_overrides(loaded);
    tracing::debug!(?config, "Effective configuration");

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    let Some(command) = cli.command else {
        if cli.save_config.is_some() {
            return Ok(());
        }
        bail!("No command given (try --help)");
    };

    match command {
        Command::Convert { input, .. } => {
            let value = parse_input(&input);
            let state = to_state(Some(&value), config.old_hue)
                .wrap_err_with(|| format!("Cannot convert '{}'", input))?;
            print_value(&state, config.format)?;
        }
        Command::CheckHex { input } => {
            if is_valid_hex(&parse_input(&input)) {
                println!("valid");
            } else {
                println!("invalid");
                drop(log_guard);
                std::process::exit(1);
            }
        }
        Command::Presets { select: None, .. } => {
            if config.presets.is_hidden() {
                eprintln!("No presets configured");
            }
            for swatch in config.presets.swatches() {
                println!("{}", swatch.key);
            }
        }
        Command::Presets {
            select: Some(color),
            ..
        } => {
            let change = config
                .presets
                .select(&color)
                .ok_or_else(|| eyre!("'{}' is not a configured preset", color))?;
            print_value(&change.to_state(config.old_hue), config.format)?;
        }
    }

    Ok(())
}

/// Print a serializable value in the requested format.
fn print_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).wrap_err("Failed to serialize to YAML")?,
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(value).wrap_err("Failed to serialize to JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{text}");
    Ok(())
}
