//! CashBill REST client.
//!
//! Wraps the three provider endpoints the integration needs:
//! - `GET  paymentMethods/{shopId}/{lang}` for available channels
//! - `POST payment/{shopId}` to register a payment
//! - `GET  payment/{shopId}/{id}?sign=...` to fetch a payment record

use std::collections::BTreeMap;
use std::sync::Arc;

use cashbill_crypto::Signer;
use cashbill_types::{Language, Mode, Payment, PaymentData};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::CashBillConfig;
use crate::error::{ClientError, ClientResult};
use crate::response::{PaymentChannel, Redirect, RegisteredPayment};
use crate::transport::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Client for the CashBill payment API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct CashBill {
    mode: Mode,
    shop_id: String,
    signer: Signer,
    payment_defaults: BTreeMap<String, String>,
    transport: Arc<dyn HttpTransport>,
}

impl CashBill {
    /// Create a client that talks to the provider over reqwest.
    pub fn new(config: CashBillConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(
        config: CashBillConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> ClientResult<Self> {
        config.validate()?;

        if config.token.is_empty() {
            warn!("CashBill token is empty; signatures will not be accepted by the provider");
        }

        debug!(
            mode = %config.mode,
            shop_id = %config.shop_id,
            "Created CashBill client"
        );

        Ok(Self {
            mode: config.mode,
            shop_id: config.shop_id,
            signer: Signer::new(config.token.clone()),
            payment_defaults: config.payment_defaults,
            transport,
        })
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current endpoint mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        self.mode == Mode::Live
    }

    pub fn is_sandbox(&self) -> bool {
        !self.is_live()
    }

    /// Shop identifier used in URIs.
    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    /// Defaults applied by [`CashBill::prepare`].
    pub fn payment_defaults(&self) -> &BTreeMap<String, String> {
        &self.payment_defaults
    }

    /// Base URL of the REST API for the current mode.
    pub fn endpoint_url(&self) -> &'static str {
        self.mode.endpoint_url()
    }

    /// URI of the payment channel list, relative to the endpoint.
    pub fn payment_methods_uri(&self, lang: Language) -> String {
        format!("paymentMethods/{}/{}", encode_segment(&self.shop_id), lang)
    }

    /// URI of the payment resource, relative to the endpoint.
    pub fn payment_uri(&self) -> String {
        format!("payment/{}", encode_segment(&self.shop_id))
    }

    // =========================================================================
    // Signing
    // =========================================================================

    /// The signer holding the shop token.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Sign an ordered list of values with the shop token.
    pub fn sign<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.signer.sign_parts(parts)
    }

    /// Apply payment defaults and sign the payment.
    ///
    /// Call once per send, after every other attribute has been set. A
    /// previous signature is replaced.
    pub fn prepare(&self, payment: &mut Payment) -> ClientResult<()> {
        payment.set_default_attributes(&self.payment_defaults)?;

        let sign = self.signer.sign(&payment.signable_data());
        payment.set_sign(sign);

        Ok(())
    }

    // =========================================================================
    // API
    // =========================================================================

    /// List payment channels available to the shop.
    pub async fn payment_channels(&self, lang: Language) -> ClientResult<Vec<PaymentChannel>> {
        let value = self
            .request(HttpMethod::Get, &self.payment_methods_uri(lang), Vec::new())
            .await?;

        let channels: Vec<PaymentChannel> = serde_json::from_value(value)?;
        debug!(count = channels.len(), "Fetched payment channels");

        Ok(channels)
    }

    /// Register a payment.
    ///
    /// Applies defaults, signs, and posts every populated attribute as a
    /// form body.
    pub async fn register(&self, mut payment: Payment) -> ClientResult<RegisteredPayment> {
        self.prepare(&mut payment)?;

        let params = payment
            .attributes()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let value = self
            .request(HttpMethod::Post, &self.payment_uri(), params)
            .await?;

        let registered: RegisteredPayment = serde_json::from_value(value)?;
        info!(payment_id = %registered.id, "Payment registered");

        Ok(registered)
    }

    /// Register a payment built from `(friendly name, value)` pairs.
    pub async fn register_attributes<I, K, V>(&self, attributes: I) -> ClientResult<RegisteredPayment>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let payment = Payment::from_attributes(attributes)?;
        self.register(payment).await
    }

    /// Register a payment and return where to send the payer.
    pub async fn redirect(&self, payment: Payment) -> ClientResult<Redirect> {
        let registered = self.register(payment).await?;
        Ok(Redirect::from(registered))
    }

    /// Register a payment built from `(friendly name, value)` pairs and
    /// return where to send the payer.
    pub async fn redirect_attributes<I, K, V>(&self, attributes: I) -> ClientResult<Redirect>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let payment = Payment::from_attributes(attributes)?;
        self.redirect(payment).await
    }

    /// Fetch the provider's record of a payment.
    ///
    /// This is the source of truth for payment status; notification
    /// payloads only tell which payment to fetch.
    pub async fn payment(&self, id: &str) -> ClientResult<PaymentData> {
        let sign = self.signer.sign(id);
        let uri = format!("{}/{}", self.payment_uri(), encode_segment(id));

        let value = self
            .request(HttpMethod::Get, &uri, vec![("sign".to_string(), sign)])
            .await?;

        let payment = PaymentData::try_from(value)?;
        debug!(
            payment_id = %payment.id(),
            status = %payment.status(),
            "Fetched payment"
        );

        Ok(payment)
    }

    /// Send a request and decode the JSON body.
    ///
    /// GET parameters go into the query string, POST parameters into a
    /// form body. Any status other than 200 is an error carrying the body.
    async fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        params: Vec<(String, String)>,
    ) -> ClientResult<Value> {
        let url = format!("{}/{}", self.endpoint_url(), uri);
        debug!(method = %method, url = %url, "Sending CashBill request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                params,
            })
            .await?;

        if response.status != 200 {
            warn!(
                method = %method,
                uri = %uri,
                status = response.status,
                "CashBill request failed"
            );
            return Err(ClientError::Response {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

impl std::fmt::Debug for CashBill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashBill")
            .field("mode", &self.mode)
            .field("shop_id", &self.shop_id)
            .finish()
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
