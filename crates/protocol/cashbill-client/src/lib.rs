//! REST client for the CashBill payment API.
//!
//! # Flow
//!
//! ```text
//! ┌─────────────┐  POST payment/{shop}    ┌──────────────┐
//! │  Merchant   │ ──────────────────────→ │  CashBill    │
//! │  backend    │ ←────────────────────── │  REST API    │
//! │             │   { id, redirectUrl }   │              │
//! │             │                         │              │
//! │             │  GET payment/{shop}/{id}│              │
//! │             │      ?sign=sha1(id+tok) │              │
//! │             │ ──────────────────────→ │              │
//! │             │ ←────────────────────── │              │
//! │             │      payment record     │              │
//! └─────────────┘                         └──────────────┘
//! ```
//!
//! # Components
//!
//! - **[`client`]**: The [`CashBill`] client (register, fetch, channel list)
//! - **[`config`]**: Mode, shop credentials and payment defaults
//! - **[`transport`]**: The [`HttpTransport`] seam and its reqwest implementation
//! - **[`response`]**: Typed provider responses
//! - **[`error`]**: Error types with recovery suggestions
//!
//! # Usage
//!
//! ```rust,no_run
//! use cashbill_client::{CashBill, CashBillConfig};
//! use cashbill_types::{Attribute, Payment};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cashbill = CashBill::new(CashBillConfig::sandbox("shop.example.com", "token"))?;
//!
//! let mut payment = Payment::new();
//! payment
//!     .set(Attribute::Title, "Order #42")?
//!     .set(Attribute::Amount, "19.99")?
//!     .set(Attribute::ReturnUrl, "https://shop.example.com/thanks")?;
//!
//! let redirect = cashbill.redirect(payment).await?;
//! println!("Send the payer to {}", redirect.location);
//!
//! let record = cashbill.payment(&redirect.payment_id).await?;
//! println!("Status: {}", record.status());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod transport;

pub use client::CashBill;
pub use config::{
    CashBillConfig, DEFAULT_TIMEOUT_SECS, ENV_CURRENCY_CODE, ENV_MODE, ENV_SHOP_ID, ENV_TOKEN,
};
pub use error::{ClientError, ClientResult};
pub use response::{PaymentChannel, Redirect, RegisteredPayment};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
