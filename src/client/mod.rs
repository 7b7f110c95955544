//! Payment client for the bfinancial API
//!
//! This module provides the asynchronous client that submits payment requests
//! to `<base>/payment/create` and decodes the typed result.
//!
//! # Examples
//!
//! ## Pix payment
//!
//! ```no_run
//! use bfinancial::client::PaymentClient;
//! use bfinancial::types::PixPayment;
//!
//! # async fn example() -> bfinancial::Result<()> {
//! let client = PaymentClient::configure("https://pay.example.com/api", "my-token")?;
//!
//! let result = client
//!     .submit_pix(PixPayment::new(1500, "payer@example.com", "08789662938"))
//!     .await?;
//! println!("Pix copy-and-paste code: {}", result.data.qr_code.literal);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling failures
//!
//! ```no_run
//! use bfinancial::client::PaymentClient;
//! use bfinancial::types::{PaymentRequest, PixPayment};
//! use bfinancial::ErrorKind;
//!
//! # async fn example() -> bfinancial::Result<()> {
//! let client = PaymentClient::login("my-token")?;
//! let request = PaymentRequest::from(PixPayment::new(1500, "payer@example.com", "08789662938"));
//!
//! match client.submit(&request).await {
//!     Ok(result) => println!("payment {}", result.payment_id()),
//!     Err(e) if e.kind() == ErrorKind::TransportFailure => eprintln!("retry later: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::types::{
    CardPayment, CardPaymentResult, CheckoutPayment, CheckoutPaymentResult, ClientConfig,
    PaymentMethod, PaymentRequest, PaymentResult, PixPayment, PixPaymentResult,
};
use crate::{wire, BfinancialError, Result};


/// Anything that can submit a payment request
///
/// Implemented by [`PaymentClient`]; code that takes a `&dyn PaymentGateway`
/// can be exercised with an in-memory fake.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submit a payment and wait for its result
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResult>;
}

/// Client for the payment creation API
#[derive(Clone)]
pub struct PaymentClient {
    /// Client configuration
    config: ClientConfig,
    /// Full URL of the payment creation endpoint
    endpoint: String,
    /// HTTP client
    client: Client,
}

impl std::fmt::Debug for PaymentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentClient")
            .field("endpoint", &self.endpoint)
            .field("config", &self.config)
            .finish()
    }
}

impl PaymentClient {
    /// Create a new payment client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers()?)
            .build()
            .map_err(|e| BfinancialError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.create_payment_url(),
            config,
            client,
        })
    }

    /// Create a client for an endpoint and credential
    pub fn configure(base_url: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url, auth_token))
    }

    /// Create a client for the default endpoint
    pub fn login(auth_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::login(auth_token))
    }

    /// Submit a payment request
    pub async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let body = wire::encode(request)?;
        trace_request(&self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| transport_failure(request.method(), &self.endpoint, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_failure(request.method(), &self.endpoint, e))?;

        decode_response(request.method(), status, &text)
    }

    /// Submit a Pix payment
    pub async fn submit_pix(&self, pix: PixPayment) -> Result<PixPaymentResult> {
        self.submit(&pix.into()).await?.into_pix()
    }

    /// Submit a card payment
    pub async fn submit_card(&self, card: CardPayment) -> Result<CardPaymentResult> {
        self.submit(&card.into()).await?.into_card()
    }

    /// Submit a checkout payment
    pub async fn submit_checkout(&self, checkout: CheckoutPayment) -> Result<CheckoutPaymentResult> {
        self.submit(&checkout.into()).await?.into_checkout()
    }

    /// Get the payment creation endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl PaymentGateway for PaymentClient {
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        PaymentClient::submit(self, request).await
    }
}

pub(crate) fn trace_request(endpoint: &str, request: &PaymentRequest) {
    tracing::debug!("Sending {} payment to: {}", request.method(), endpoint);
    tracing::debug!(
        "Payment request body: {}",
        serde_json::to_string_pretty(&wire::redacted(request)).unwrap_or_default()
    );
}

pub(crate) fn transport_failure(
    method: PaymentMethod,
    endpoint: &str,
    error: reqwest::Error,
) -> BfinancialError {
    tracing::warn!("{} payment could not reach {}: {}", method, endpoint, error);
    BfinancialError::from(error)
}

pub(crate) fn decode_response(
    method: PaymentMethod,
    status: StatusCode,
    text: &str,
) -> Result<PaymentResult> {
    tracing::debug!("Payment response ({}): {}", status, text);

    wire::decode(method, status.as_u16(), text).inspect_err(|e| {
        tracing::error!("{} payment failed with status: {}. {}", method, status, e);
    })
}
