//! Register a payment.

use cashbill_client::CashBill;
use cashbill_types::{Attribute, Payment};
use tracing::debug;

use crate::cli::RegisterArgs;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, RegisterOutput};

/// Execute the register command.
pub async fn register(client: &CashBill, format: OutputFormat, args: RegisterArgs) -> CliResult<String> {
    let payment = build_payment(args)?;
    debug!(attributes = payment.len(), "Registering payment");

    let registered = client.register(payment).await?;

    Ok(RegisterOutput::from(registered).render(format))
}

/// Turn command-line arguments into a payment.
///
/// `--attr` pairs are applied last, so they win over the dedicated flags.
pub fn build_payment(args: RegisterArgs) -> CliResult<Payment> {
    let mut payment = Payment::new();
    payment
        .set(Attribute::Title, args.title)?
        .set(Attribute::Amount, args.amount)?;

    let optional = [
        (Attribute::CurrencyCode, args.currency),
        (Attribute::Description, args.description),
        (Attribute::Email, args.email),
        (Attribute::ReturnUrl, args.return_url),
        (Attribute::NegativeReturnUrl, args.negative_return_url),
        (Attribute::PaymentChannel, args.channel),
        (Attribute::LanguageCode, args.language),
    ];
    for (attribute, value) in optional {
        if let Some(value) = value {
            payment.set(attribute, value)?;
        }
    }

    for pair in &args.attrs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::user(format!("Expected NAME=VALUE, got '{}'", pair)))?;
        if name.trim() == Attribute::Sign.name() {
            return Err(CliError::user("The signature is computed automatically"));
        }
        payment.set_attribute(name.trim(), value)?;
    }

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbill_client::{HttpMethod, HttpResponse};
    use cashbill_test_utils::{create_test_client, registered_payment_json, test_config};
    use cashbill_types::TypesError;

    fn args() -> RegisterArgs {
        RegisterArgs {
            title: "Order #1".into(),
            amount: "10.00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_payment_flags() {
        let payment = build_payment(RegisterArgs {
            currency: Some("eur".into()),
            email: Some("jan@example.com".into()),
            attrs: vec!["city=Katowice".into(), "first_name=Jan".into()],
            ..args()
        })
        .unwrap();

        assert_eq!(payment.get(Attribute::Title), "Order #1");
        assert_eq!(payment.get(Attribute::CurrencyCode), "EUR");
        assert_eq!(payment.get(Attribute::Email), "jan@example.com");
        assert_eq!(payment.get(Attribute::City), "Katowice");
        assert_eq!(payment.get(Attribute::FirstName), "Jan");
    }

    #[test]
    fn test_build_payment_rejects_bad_attr() {
        let result = build_payment(RegisterArgs {
            attrs: vec!["colour=red".into()],
            ..args()
        });
        assert!(matches!(
            result,
            Err(CliError::Types(TypesError::UnknownAttribute(_)))
        ));

        let result = build_payment(RegisterArgs {
            attrs: vec!["no-equals".into()],
            ..args()
        });
        assert!(matches!(result, Err(CliError::User(_))));

        let result = build_payment(RegisterArgs {
            attrs: vec!["sign=forged".into()],
            ..args()
        });
        assert!(matches!(result, Err(CliError::User(_))));
    }

    #[test]
    fn test_build_payment_bad_amount() {
        let result = build_payment(RegisterArgs {
            amount: "10,00".into(),
            ..args()
        });
        assert!(matches!(
            result,
            Err(CliError::Types(TypesError::InvalidAmount(_)))
        ));
    }

    #[tokio::test]
    async fn test_register_posts_payment() {
        let (client, transport) = create_test_client(test_config());
        transport.push_response(HttpResponse::ok(registered_payment_json("TEST_9").to_string()));

        let output = register(&client, OutputFormat::Json, args()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], "TEST_9");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.param("amount.currencyCode"), Some("PLN"));
        assert!(request.param("sign").is_some());
    }
}
