//! # bfinancial
//!
//! A **type-safe** Rust client for the bfinancial payment API.
//!
//! ## Features
//!
//! - **Pix**: Instant bank transfers returning a QR code
//! - **Card**: Credit card payments returning the charged total and surcharge
//! - **Checkout**: A checkout identifier wrapping exactly one Pix or card payment
//! - **Typed errors**: Every failure is a recoverable [`BfinancialError`] with an [`ErrorKind`]
//! - **Async and blocking**: [`client::PaymentClient`] on tokio, [`blocking::PaymentClient`] for synchronous callers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bfinancial::{client::PaymentClient, types::PixPayment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PaymentClient::configure("http://127.0.0.1:8080/api", "my-token")?;
//!
//!     let result = client
//!         .submit_pix(PixPayment::new(1500, "payer@example.com", "08789662938"))
//!         .await?;
//!
//!     println!("Payment {} created", result.data.payment_id);
//!     println!("Pay with: {}", result.data.qr_code.literal);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Requests, results and configuration
//! - **`client`**: Async HTTP client
//! - **`blocking`**: Synchronous HTTP client (feature-gated, on by default)
//! - **`wire`**: Envelope encoding and response decoding shared by both clients
//! - **`error`**: Error taxonomy
//!
//! ## Wire format
//!
//! Every request is a single `POST <base>/payment/create` whose JSON body is
//! the request's envelope, tagged by `method` (`"Pix"`, `"Card"` or
//! `"Checkout"`). A checkout carries the inner envelope under `payment_type`.

pub mod client;
pub mod error;
pub mod types;
pub mod wire;

#[cfg(feature = "blocking")]
pub mod blocking;

// Re-exports for convenience
pub use client::{PaymentClient, PaymentGateway};
pub use error::{BfinancialError, ErrorKind, Result};
pub use types::*;

/// Current version of the bfinancial library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_pix_envelope_fields() {
        let request = PaymentRequest::from(PixPayment::new(0, "", ""));
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        for field in ["amount", "payer_email", "payer_cpf", "method"] {
            assert!(obj.contains_key(field), "missing {}", field);
        }
        assert_eq!(value["method"], "Pix");
    }

    #[test]
    fn test_request_and_result_round_trip() {
        let card = CardPayment::new(
            "5555444433331111",
            Decimal::new(9_999_999_99, 2),
            "0042",
            "payer@example.com",
            "João Souza",
            "52998224725",
            2031,
            1,
        );
        let request = PaymentRequest::from(card.clone());
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(PaymentRequest::from_json(&json).unwrap(), request);

        let body = serde_json::json!({
            "code": 201,
            "data": {
                "payment_id": 9_007_199_254_740_993u64,
                "total_amount": 1_000_000_029i64,
                "increase": 30
            }
        })
        .to_string();
        let result = wire::decode(request.method(), 201, &body).unwrap();
        let card_result = result.as_card().unwrap();

        assert_eq!(card_result.code, 201);
        assert_eq!(card_result.data.payment_id, 9_007_199_254_740_993);
        assert_eq!(card_result.data.total_amount, 1_000_000_029);
        assert_eq!(card_result.data.increase, 30);
        assert_eq!(card.cvv, "0042");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(PaymentMethod::Pix.to_string(), "Pix");
        assert_eq!(PaymentMethod::Card.to_string(), "Card");
        assert_eq!(PaymentMethod::Checkout.as_str(), "Checkout");
    }
}
