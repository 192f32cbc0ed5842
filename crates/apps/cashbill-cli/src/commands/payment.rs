//! Fetch a payment.

use cashbill_client::CashBill;

use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, PaymentOutput, Render};

/// Execute the payment command.
pub async fn payment(client: &CashBill, format: OutputFormat, id: &str) -> CliResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CliError::user("Payment id must not be empty"));
    }

    let payment = client.payment(id).await?;

    Ok(PaymentOutput { payment }.render(format))
}
