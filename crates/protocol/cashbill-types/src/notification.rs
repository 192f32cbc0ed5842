//! Inbound webhook notifications.
//!
//! The provider reports payment events by calling the shop's webhook with
//! three fields:
//!
//! ```text
//! cmd  = transactionStatusChanged | verificationFinished
//! args = <payment id>[,<more>...]
//! sign = hex(SHA1(cmd || args || token))
//! ```
//!
//! Nothing in the payload is trusted until `sign` has been checked, and even
//! then only the payment id is used.

use serde::{Deserialize, Serialize};

use crate::constants::NOTIFICATION_ARGS_SEPARATOR;
use crate::enums::NotificationCommand;
use crate::error::{TypesError, TypesResult};

/// Raw notification fields, as received.
///
/// Missing fields deserialize to empty strings so validation can report
/// them precisely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationRequest {
    pub cmd: String,
    pub args: String,
    pub sign: String,
}

impl NotificationRequest {
    /// Create a request from raw field values.
    pub fn new(cmd: impl Into<String>, args: impl Into<String>, sign: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            args: args.into(),
            sign: sign.into(),
        }
    }

    /// Check that all three fields are present.
    pub fn validate(&self) -> TypesResult<()> {
        if self.cmd.is_empty() {
            return Err(TypesError::MissingField("cmd"));
        }
        if self.args.is_empty() {
            return Err(TypesError::MissingField("args"));
        }
        if self.sign.is_empty() {
            return Err(TypesError::MissingField("sign"));
        }
        Ok(())
    }

    /// Parse the command.
    pub fn command(&self) -> TypesResult<NotificationCommand> {
        self.cmd.parse()
    }

    /// Check if this notifies a status change.
    pub fn is_status_change(&self) -> bool {
        self.cmd == NotificationCommand::TransactionStatusChanged.as_str()
    }

    /// Check if this notifies a finished verification.
    pub fn is_verification_finished(&self) -> bool {
        self.cmd == NotificationCommand::VerificationFinished.as_str()
    }

    /// Values covered by `sign`, in signing order.
    pub fn signable_parts(&self) -> [&str; 2] {
        [self.cmd.as_str(), self.args.as_str()]
    }

    /// Split `args` into its values.
    pub fn arguments(&self) -> Vec<&str> {
        self.args.split(NOTIFICATION_ARGS_SEPARATOR).collect()
    }

    /// The payment id (first argument).
    pub fn payment_id(&self) -> TypesResult<&str> {
        self.args
            .split(NOTIFICATION_ARGS_SEPARATOR)
            .next()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(TypesError::MissingPaymentId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments() {
        let req = NotificationRequest::new("transactionStatusChanged", "abc,1,x", "s");
        assert_eq!(req.arguments(), vec!["abc", "1", "x"]);
        assert_eq!(req.payment_id().unwrap(), "abc");
    }

    #[test]
    fn test_single_argument() {
        let req = NotificationRequest::new("verificationFinished", "abc123", "s");
        assert_eq!(req.payment_id().unwrap(), "abc123");
        assert!(req.is_verification_finished());
        assert!(!req.is_status_change());
    }

    #[test]
    fn test_missing_payment_id() {
        let req = NotificationRequest::new("transactionStatusChanged", "", "s");
        assert_eq!(req.payment_id().unwrap_err(), TypesError::MissingPaymentId);

        let req = NotificationRequest::new("transactionStatusChanged", ",1", "s");
        assert_eq!(req.payment_id().unwrap_err(), TypesError::MissingPaymentId);
    }

    #[test]
    fn test_validate() {
        assert!(NotificationRequest::new("a", "b", "c").validate().is_ok());
        assert_eq!(
            NotificationRequest::new("", "b", "c").validate().unwrap_err(),
            TypesError::MissingField("cmd")
        );
        assert_eq!(
            NotificationRequest::new("a", "", "c").validate().unwrap_err(),
            TypesError::MissingField("args")
        );
        assert_eq!(
            NotificationRequest::new("a", "b", "").validate().unwrap_err(),
            TypesError::MissingField("sign")
        );
    }

    #[test]
    fn test_command() {
        let req = NotificationRequest::new("transactionStatusChanged", "a", "s");
        assert_eq!(
            req.command().unwrap(),
            NotificationCommand::TransactionStatusChanged
        );
        assert!(req.is_status_change());

        let req = NotificationRequest::new("refund", "a", "s");
        assert!(matches!(req.command(), Err(TypesError::UnknownCommand(_))));
    }

    #[test]
    fn test_signable_parts_use_raw_args() {
        let req = NotificationRequest::new("verificationFinished", "abc123,1,2", "s");
        assert_eq!(req.signable_parts(), ["verificationFinished", "abc123,1,2"]);
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let req: NotificationRequest = serde_json::from_str(r#"{"cmd":"x"}"#).unwrap();
        assert_eq!(req.cmd, "x");
        assert!(req.args.is_empty());
        assert!(req.validate().is_err());
    }
}
