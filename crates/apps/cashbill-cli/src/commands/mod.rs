//! CLI command implementations.

pub mod channels;
pub mod init;
pub mod payment;
pub mod register;
pub mod serve;
pub mod sign;

pub use channels::channels;
pub use init::init;
pub use payment::payment;
pub use register::register;
pub use serve::serve;
pub use sign::sign;

use cashbill_client::{CashBill, ClientError, ENV_SHOP_ID};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Build a provider client from the configuration.
///
/// The shop id is always required; the token only for signed requests.
pub fn connect(config: &CliConfig, signed: bool) -> CliResult<CashBill> {
    if signed {
        config.cashbill.require_credentials()?;
    } else if config.cashbill.shop_id.trim().is_empty() {
        return Err(ClientError::config(format!(
            "shop id is empty. Set shop_id in the config or {}",
            ENV_SHOP_ID
        ))
        .into());
    }

    Ok(CashBill::new(config.cashbill.clone())?)
}
