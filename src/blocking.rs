//! Synchronous payment client
//!
//! Same surface as [`crate::client::PaymentClient`], built on
//! `reqwest::blocking`. Each call blocks the current thread for at most the
//! configured timeout. Must not be used from inside an async runtime.
//!
//! ```no_run
//! use bfinancial::blocking::PaymentClient;
//! use bfinancial::types::PixPayment;
//!
//! # fn example() -> bfinancial::Result<()> {
//! let client = PaymentClient::login("my-token")?;
//! let result = client.submit_pix(PixPayment::new(1500, "payer@example.com", "08789662938"))?;
//! println!("payment {}", result.data.payment_id);
//! # Ok(())
//! # }
//! ```

use reqwest::blocking::Client;

use crate::client::{decode_response, trace_request, transport_failure};
use crate::types::{
    CardPayment, CardPaymentResult, CheckoutPayment, CheckoutPaymentResult, ClientConfig,
    PaymentRequest, PaymentResult, PixPayment, PixPaymentResult,
};
use crate::{wire, BfinancialError, Result};

/// Blocking client for the payment creation API
#[derive(Clone)]
pub struct PaymentClient {
    config: ClientConfig,
    endpoint: String,
    client: Client,
}

impl std::fmt::Debug for PaymentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::PaymentClient")
            .field("endpoint", &self.endpoint)
            .field("config", &self.config)
            .finish()
    }
}

impl PaymentClient {
    /// Create a new blocking payment client
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
    pub fn submit(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let body = wire::encode(request)?;
        trace_request(&self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .body(body)
            .send()
            .map_err(|e| transport_failure(request.method(), &self.endpoint, e))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| transport_failure(request.method(), &self.endpoint, e))?;

        decode_response(request.method(), status, &text)
    }

    /// Submit a Pix payment
    pub fn submit_pix(&self, pix: PixPayment) -> Result<PixPaymentResult> {
        self.submit(&pix.into())?.into_pix()
    }

    /// Submit a card payment
    pub fn submit_card(&self, card: CardPayment) -> Result<CardPaymentResult> {
        self.submit(&card.into())?.into_card()
    }

    /// Submit a checkout payment
    pub fn submit_checkout(&self, checkout: CheckoutPayment) -> Result<CheckoutPaymentResult> {
        self.submit(&checkout.into())?.into_checkout()
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
