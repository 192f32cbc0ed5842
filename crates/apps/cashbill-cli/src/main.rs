//! CashBill CLI binary entry point.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cashbill_cli::{
    cli::{Cli, Commands, OutputFormatArg},
    commands,
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::OutputFormat,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let mut filter = EnvFilter::from_default_env();
        if cli.verbose {
            if let Ok(directive) = "cashbill=debug".parse() {
                filter = filter.add_directive(directive);
            }
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message with recovery hint.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);

    if let Some(suggestion) = e.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let output = match cli.command {
        // init writes the file the other commands read, so it never loads it.
        Commands::Init { force } => {
            let format = cli.format.map(Into::into).unwrap_or_default();
            commands::init(&config_path, format, force)?
        }

        Commands::Channels { lang } => {
            let (config, format) = load(&config_path, cli.format)?;
            let client = commands::connect(&config, false)?;
            commands::channels(&client, format, lang.into()).await?
        }

        Commands::Register(args) => {
            let (config, format) = load(&config_path, cli.format)?;
            let client = commands::connect(&config, true)?;
            commands::register(&client, format, args).await?
        }

        Commands::Payment { id } => {
            let (config, format) = load(&config_path, cli.format)?;
            let client = commands::connect(&config, true)?;
            commands::payment(&client, format, &id).await?
        }

        Commands::Sign { parts } => {
            let (config, format) = load(&config_path, cli.format)?;
            commands::sign(&config, format, &parts)?
        }

        Commands::Serve { listen } => {
            let (config, format) = load(&config_path, cli.format)?;
            commands::serve(config, format, listen).await?
        }
    };

    println!("{}", output);

    Ok(())
}

/// Load the configuration and settle the output format.
fn load(path: &Path, format: Option<OutputFormatArg>) -> CliResult<(CliConfig, OutputFormat)> {
    let config = CliConfig::load(path)?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    let format = match format {
        Some(format) => format.into(),
        None => config.default_format()?,
    };

    Ok((config, format))
}
