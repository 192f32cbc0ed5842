//! Provider constants.

/// Production REST endpoint.
pub const ENDPOINT_LIVE: &str = "https://pay.cashbill.pl/ws/rest";

/// Sandbox REST endpoint.
pub const ENDPOINT_SANDBOX: &str = "https://pay.cashbill.pl/testws/rest";

/// Currency applied to payments that do not set one.
pub const DEFAULT_CURRENCY_CODE: &str = "PLN";

/// Separator between the values of a notification's `args` field.
pub const NOTIFICATION_ARGS_SEPARATOR: char = ',';

/// Body returned to the provider once a notification has been handled.
pub const NOTIFICATION_ACK: &str = "OK";
