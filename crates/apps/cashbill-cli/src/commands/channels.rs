//! List payment channels.

use cashbill_client::CashBill;
use cashbill_types::Language;

use crate::error::CliResult;
use crate::output::{ChannelsOutput, OutputFormat, Render};

/// Execute the channels command.
pub async fn channels(client: &CashBill, format: OutputFormat, lang: Language) -> CliResult<String> {
    let channels = client.payment_channels(lang).await?;

    let output = ChannelsOutput {
        language: lang.to_string(),
        channels,
    };

    Ok(output.render(format))
}
