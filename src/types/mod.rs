//! Core types for the payment API
//!
//! Requests, results and configuration used by the payment clients.
//!
//! # Architecture
//!
//! - [`payment`] - Payment requests (Pix, card, checkout)
//! - [`response`] - Typed payment results
//! - [`config`] - Client configuration
//! - [`constants`] - Endpoints, defaults and environment variable names
//!
//! # Examples
//!
//! ## Building a checkout paid by card
//!
//! ```
//! use bfinancial::types::{CardPayment, CheckoutPayment, PaymentRequest};
//! use rust_decimal::Decimal;
//!
//! let card = CardPayment::new(
//!     "4111111111111111",
//!     Decimal::new(15075, 2),
//!     "123",
//!     "payer@example.com",
//!     "Maria Silva",
//!     "08789662938",
//!     2030,
//!     12,
//! );
//!
//! let request = PaymentRequest::from(CheckoutPayment::new("chk_123", card));
//! let envelope = serde_json::to_value(&request).unwrap();
//! assert_eq!(envelope["method"], "Checkout");
//! assert_eq!(envelope["payment_type"]["method"], "Card");
//! ```
//!
//! ## Configuration
//!
//! ```
//! use bfinancial::types::ClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> bfinancial::Result<()> {
//! let config = ClientConfig::new("https://pay.example.com/api", "my-token")
//!     .with_timeout(Duration::from_secs(10));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod payment;
pub mod response;

// Re-export commonly used types
pub use config::ClientConfig;
pub use constants::{api, env};
pub use payment::{
    CardPayment, CheckoutMethod, CheckoutPayment, PaymentMethod, PaymentRequest, PixPayment,
};
pub use response::{
    CardPaymentData, CardPaymentResult, CheckoutPaymentData, CheckoutPaymentResult,
    PaymentResponse, PaymentResult, PixPaymentData, PixPaymentResult, QrCode,
};
