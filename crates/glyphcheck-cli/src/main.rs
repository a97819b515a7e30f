//! glyphcheck CLI - validate and fix lesson corpus input codes.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use glyphcheck::{AnnotationSyntax, CheckerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = build_config(&cli).and_then(|config| match cli.command {
        Commands::Lookup { characters } => commands::lookup::run(config, characters, cli.verbose),

        Commands::Validate { json } => commands::validate::run(config, json, cli.verbose),

        Commands::Fix {
            dry_run,
            backup,
            json,
        } => commands::fix::run(config, dry_run, backup, json, cli.verbose),
    });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn build_config(cli: &Cli) -> Result<CheckerConfig, Box<dyn std::error::Error>> {
    let syntax = AnnotationSyntax::default()
        .with_marker(cli.marker.clone())?
        .with_group_suffix(cli.group_suffix.clone())?;

    Ok(CheckerConfig::default()
        .with_reference_path(cli.reference.clone())
        .with_corpus_path(cli.corpus.clone())
        .with_syntax(syntax))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
