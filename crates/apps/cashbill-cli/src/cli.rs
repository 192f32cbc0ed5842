//! CLI argument definitions using clap.

use cashbill_types::Language;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CashBill payment API CLI.
#[derive(Parser, Debug)]
#[command(name = "cashbill")]
#[command(author = "CashBill Rust Contributors")]
#[command(version)]
#[command(about = "Command-line interface for the CashBill payment API")]
#[command(
    long_about = "Register payments, look them up and receive CashBill notifications.\n\nRun 'cashbill init' to get started."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json). Defaults to [display] default_format.
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Language argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LanguageArg {
    /// Polish.
    #[default]
    Pl,
    /// English.
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Pl => Language::Pl,
            LanguageArg::En => Language::En,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// List payment channels available to the shop.
    Channels {
        /// Language of channel names and descriptions.
        #[arg(short, long, default_value = "pl")]
        lang: LanguageArg,
    },

    /// Register a payment and print the redirect URL.
    Register(RegisterArgs),

    /// Fetch a payment from the provider.
    Payment {
        /// Provider payment id.
        id: String,
    },

    /// Sign values with the shop token.
    ///
    /// Values are concatenated in the order given, e.g.
    /// `cashbill sign transactionStatusChanged abc123`.
    Sign {
        /// Values to sign.
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Run the webhook server and log payment events.
    Serve {
        /// Listen address (overrides [webhook] listen).
        #[arg(short, long)]
        listen: Option<String>,
    },
}

/// Payment fields for `cashbill register`.
#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Payment title.
    #[arg(short, long)]
    pub title: String,

    /// Amount, e.g. 10.00.
    #[arg(short, long)]
    pub amount: String,

    /// Currency code (defaults to the configured one).
    #[arg(long)]
    pub currency: Option<String>,

    /// Payment description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Payer email.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Where the payer lands after a successful payment.
    #[arg(long)]
    pub return_url: Option<String>,

    /// Where the payer lands after a failed payment.
    #[arg(long)]
    pub negative_return_url: Option<String>,

    /// Payment channel id (see `cashbill channels`).
    #[arg(long)]
    pub channel: Option<String>,

    /// Payment page language code.
    #[arg(long)]
    pub language: Option<String>,

    /// Any other attribute, as name=value. May be repeated.
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    pub attrs: Vec<String>,
}
