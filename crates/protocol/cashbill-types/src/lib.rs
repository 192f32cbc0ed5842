//! Data structures for the CashBill payment API.
//!
//! This crate contains the records exchanged with the provider and nothing
//! that talks to the network:
//!
//! - [`payment`] - Outbound payment registration ([`Payment`], [`Attribute`])
//! - [`payment_data`] - Payment records fetched from the provider
//!   ([`PaymentData`], [`PaymentStatus`])
//! - [`notification`] - Inbound webhook notifications ([`NotificationRequest`])
//! - [`enums`] - Endpoint mode, language and notification command
//! - [`constants`] - Provider constants
//! - [`error`] - The error type shared by all of the above
//!
//! # Example
//!
//! ```
//! use cashbill_types::{Attribute, Payment};
//!
//! let mut payment = Payment::new();
//! payment.set_attribute("title", "Order #1").unwrap();
//! payment.set_attribute("amount", "10.00").unwrap();
//!
//! assert_eq!(payment.get(Attribute::Title), "Order #1");
//! assert_eq!(payment.signable_data(), "Order #110.00");
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod enums;
pub mod error;
pub mod notification;
pub mod payment;
pub mod payment_data;

pub use constants::*;
pub use enums::{Language, Mode, NotificationCommand};
pub use error::{TypesError, TypesResult};
pub use notification::NotificationRequest;
pub use payment::{Attribute, Payment};
pub use payment_data::{Amount, PaymentData, PaymentStatus, PersonalData};
