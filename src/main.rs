// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Client Treatment Organizer
//!
//! Prints the startup banner, then shows the welcome window or waits at the
//! console when no GUI is available.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use client_treatment_organizer::banner;
use client_treatment_organizer::config::{AppConfig, InterfaceMode};
use client_treatment_organizer::shell::{GuiCapability, PresentationShell};
use client_treatment_organizer::{APP_NAME, VERSION};

/// Client Treatment Organizer - organize client treatment files
#[derive(Parser, Debug)]
#[command(name = "client-treatment-organizer")]
#[command(author = "DrDisc")]
#[command(version)]
#[command(about = "File manager integration tool for organizing client treatment files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Suppress non-essential log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Never open a window; wait at the console instead
    #[arg(long)]
    console: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration file
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    // stdout carries the banner; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Config { action }) => run_config_command(action, &cli.config),
        None => {
            run_default(&cli.config, cli.console);
            Ok(())
        }
    }
}

/// Banner, then the presentation shell. Never fails the process.
fn run_default(config_path: &Path, force_console: bool) {
    banner::print_banner();

    info!("{} v{}", APP_NAME, VERSION);
    let config = AppConfig::load_or_default(config_path);

    let mode = if force_console {
        InterfaceMode::Console
    } else {
        config.interface.mode
    };

    let capability = GuiCapability::probe(mode);
    let shell = PresentationShell::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = shell.run(capability, &mut stdin.lock(), &mut stdout.lock());
    info!("Exiting after {:?}", outcome);
}

/// Run config commands
fn run_config_command(action: ConfigCommands, config_path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = AppConfig::load(config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Generate { output, force } => {
            if output.exists() && !force {
                bail!("{} already exists. Use --force to overwrite", output.display());
            }
            AppConfig::default()
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            if !config_path.exists() {
                bail!("No configuration file at {}", config_path.display());
            }
            let config = AppConfig::load(config_path)
                .with_context(|| format!("validating {}", config_path.display()))?;
            println!("Configuration at {:?} is valid", config_path);
            println!("  Interface mode: {}", config.interface.mode);
            println!(
                "  Window size: {}x{}",
                config.interface.window_width, config.interface.window_height
            );
        }
    }

    Ok(())
}
