//! Sign values with the shop token.

use cashbill_crypto::Signer;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, SignOutput};

/// Execute the sign command.
pub fn sign(config: &CliConfig, format: OutputFormat, parts: &[String]) -> CliResult<String> {
    if config.cashbill.token.is_empty() {
        return Err(CliError::config(
            "token is empty. Set token in the config or CASHBILL_TOKEN",
        ));
    }

    let signer = Signer::new(config.cashbill.token.clone());
    let output = SignOutput {
        payload: parts.concat(),
        signature: signer.sign_parts(parts),
    };

    Ok(output.render(format))
}
