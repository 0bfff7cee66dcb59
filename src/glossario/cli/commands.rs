//! # CLI Layer
//!
//! One possible client of the glossario library, and the only place that
//! touches the terminal or the exit code.
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `load_config()`: config file plus command-line overrides
//! - `handle_*()`: call the API, print the `CmdResult`

use super::print::{print_message, print_messages, print_reports};
use super::setup::{Cli, Commands};
use clap::Parser;
use glossario::api::GlossarioApi;
use glossario::config::{GlossarioConfig, CONFIG_FILENAME};
use glossario::error::Result;
use glossario::store::fs::DirStore;
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Commands::Generate) {
        // Init must work even when the existing config file is broken.
        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
            handle_init(&path, force)
        }
        command => {
            let config = load_config(&cli)?;
            let api = GlossarioApi::new(DirStore::new(config.source_dir.clone()), config);
            match command {
                Commands::Check => handle_check(&api, cli.verbose),
                Commands::Config => handle_config(&api),
                _ => handle_generate(&api, cli.verbose),
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<GlossarioConfig> {
    let mut config = match &cli.config {
        Some(path) => GlossarioConfig::load(path)?,
        None => GlossarioConfig::load_or_default(CONFIG_FILENAME)?,
    };

    if let Some(dir) = &cli.source_dir {
        config = config.with_source_dir(dir.clone());
    }
    if let Some(output) = &cli.output {
        config = config.with_output_path(output.clone());
    }
    Ok(config)
}

fn handle_generate(api: &GlossarioApi<DirStore>, verbose: bool) -> Result<()> {
    // Streamed, so progress is visible even when a source fails to read.
    let result = api.generate_with(print_message)?;
    if verbose {
        print_reports(&result.reports);
    }
    Ok(())
}

fn handle_check(api: &GlossarioApi<DirStore>, verbose: bool) -> Result<()> {
    let result = api.check_with(print_message)?;
    if verbose {
        print_reports(&result.reports);
    }
    if result.issue_count() > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_config(api: &GlossarioApi<DirStore>) -> Result<()> {
    let result = api.config()?;
    if let Some(config) = &result.config {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(path: &Path, force: bool) -> Result<()> {
    let api = GlossarioApi::new(DirStore::new("."), GlossarioConfig::default());
    let result = api.init(path, force)?;
    print_messages(&result.messages);
    Ok(())
}
