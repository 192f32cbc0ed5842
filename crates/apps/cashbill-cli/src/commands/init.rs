//! Write a default configuration file.

use std::path::Path;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{InitOutput, OutputFormat, Render};

/// Execute the init command.
pub fn init(config_path: &Path, format: OutputFormat, force: bool) -> CliResult<String> {
    if config_path.exists() && !force {
        return Err(CliError::ConfigExists(
            config_path.to_string_lossy().to_string(),
        ));
    }

    let config = CliConfig::default();
    config.save(config_path)?;

    let output = InitOutput {
        config_path: config_path.to_string_lossy().to_string(),
        mode: config.cashbill.mode.to_string(),
    };

    Ok(output.render(format))
}
