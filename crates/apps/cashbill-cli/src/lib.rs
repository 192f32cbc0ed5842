//! Command-line interface for the CashBill payment API.
//!
//! This crate provides the `cashbill` binary. It includes commands for:
//!
//! - **Setup**: Write a default configuration file
//! - **Payments**: Register a payment, fetch its current record
//! - **Channels**: List payment channels available to the shop
//! - **Signing**: Compute signatures by hand when debugging notifications
//! - **Webhook**: Serve the notification route and log payment events
//!
//! # Quick Start
//!
//! ```bash
//! # Write ~/.cashbill/config.toml, then fill in shop_id and token
//! cashbill init
//!
//! # Register a payment
//! cashbill register --title "Order #1" --amount 10.00 --return-url https://shop/thanks
//!
//! # Check on it
//! cashbill payment TEST_abc123
//!
//! # Receive notifications
//! cashbill serve --listen 0.0.0.0:8080
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `~/.cashbill/config.toml`. Override with
//! `--config`, or with `CASHBILL_MODE`, `CASHBILL_SHOP_ID`,
//! `CASHBILL_TOKEN` and `CASHBILL_CURRENCY_CODE`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, LanguageArg, OutputFormatArg, RegisterArgs};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
