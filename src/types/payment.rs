//! Payment request types

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{BfinancialError, Result};

/// Wire tag identifying a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Instant bank transfer
    Pix,
    /// Credit card
    Card,
    /// Checkout wrapping either of the above
    Checkout,
}

impl PaymentMethod {
    /// Tag as sent in the `method` field
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Card => "Card",
            PaymentMethod::Checkout => "Checkout",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instant transfer (Pix) payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixPayment {
    /// Amount in the smallest currency unit
    pub amount: u64,
    /// Payer's e-mail address
    pub payer_email: String,
    /// Payer's CPF (national tax id)
    pub payer_cpf: String,
}

impl PixPayment {
    /// Create a new Pix payment
    pub fn new(amount: u64, payer_email: impl Into<String>, payer_cpf: impl Into<String>) -> Self {
        Self {
            amount,
            payer_email: payer_email.into(),
            payer_cpf: payer_cpf.into(),
        }
    }
}

/// Card payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayment {
    /// Card number as printed on the card
    pub number: String,
    /// Amount in currency units, sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Card verification value
    pub cvv: String,
    /// Payer's e-mail address
    pub payer_email: String,
    /// Cardholder name
    pub payer_name: String,
    /// Payer's CPF (national tax id)
    pub payer_cpf: String,
    /// Expiration year (e.g. 2030)
    pub expiration_year: u64,
    /// Expiration month, 1-12
    pub expiration_month: u64,
}

impl CardPayment {
    /// Create a new card payment
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: impl Into<String>,
        amount: Decimal,
        cvv: impl Into<String>,
        payer_email: impl Into<String>,
        payer_name: impl Into<String>,
        payer_cpf: impl Into<String>,
        expiration_year: u64,
        expiration_month: u64,
    ) -> Self {
        Self {
            number: number.into(),
            amount,
            cvv: cvv.into(),
            payer_email: payer_email.into(),
            payer_name: payer_name.into(),
            payer_cpf: payer_cpf.into(),
            expiration_year,
            expiration_month,
        }
    }

    /// Last four digits of the card number, for display and logs
    pub fn last_four(&self) -> &str {
        let digits = self.number.trim();
        let mut start = digits.len().saturating_sub(4);
        while !digits.is_char_boundary(start) {
            start -= 1;
        }
        &digits[start..]
    }

    /// Card number with everything but the last four digits masked
    pub fn masked_number(&self) -> String {
        let last_four = self.last_four();
        let hidden = self.number.trim().chars().count() - last_four.chars().count();
        format!("{}{}", "*".repeat(hidden), last_four)
    }

    /// Ensure the amount survives the trip through a JSON float unchanged
    pub fn check_wire_amount(&self) -> Result<()> {
        let exact = self
            .amount
            .to_f64()
            .and_then(|f| Decimal::from_str(&f.to_string()).ok())
            .is_some_and(|back| back == self.amount);

        if !exact {
            return Err(BfinancialError::invalid_request(format!(
                "card amount {} cannot be sent as a JSON number without losing precision",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Payment method embedded in a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum CheckoutMethod {
    Pix(PixPayment),
    Card(CardPayment),
}

impl CheckoutMethod {
    /// Wire tag of the embedded method
    pub fn method(&self) -> PaymentMethod {
        match self {
            CheckoutMethod::Pix(_) => PaymentMethod::Pix,
            CheckoutMethod::Card(_) => PaymentMethod::Card,
        }
    }
}

impl From<PixPayment> for CheckoutMethod {
    fn from(pix: PixPayment) -> Self {
        CheckoutMethod::Pix(pix)
    }
}

impl From<CardPayment> for CheckoutMethod {
    fn from(card: CardPayment) -> Self {
        CheckoutMethod::Card(card)
    }
}

/// Checkout payment wrapping exactly one underlying method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPayment {
    /// Checkout identifier issued by the payment service
    pub checkout_id: String,
    /// The single payment method used for this checkout
    pub payment_type: CheckoutMethod,
}

impl CheckoutPayment {
    /// Create a checkout for the given method
    pub fn new(checkout_id: impl Into<String>, payment_type: impl Into<CheckoutMethod>) -> Self {
        Self {
            checkout_id: checkout_id.into(),
            payment_type: payment_type.into(),
        }
    }

    /// Build a checkout from optional payloads, exactly one of which must be set
    pub fn from_parts(
        checkout_id: impl Into<String>,
        pix: Option<PixPayment>,
        card: Option<CardPayment>,
    ) -> Result<Self> {
        let payment_type = match (pix, card) {
            (Some(pix), None) => CheckoutMethod::Pix(pix),
            (None, Some(card)) => CheckoutMethod::Card(card),
            (Some(_), Some(_)) => {
                return Err(BfinancialError::invalid_request(
                    "checkout must embed exactly one payment method, got both Pix and Card",
                ))
            }
            (None, None) => {
                return Err(BfinancialError::invalid_request(
                    "checkout must embed exactly one payment method, got none",
                ))
            }
        };

        Ok(Self {
            checkout_id: checkout_id.into(),
            payment_type,
        })
    }
}

/// A payment request; its serialized form is the wire envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum PaymentRequest {
    Pix(PixPayment),
    Card(CardPayment),
    Checkout(CheckoutPayment),
}

impl PaymentRequest {
    /// Wire tag of this request
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentRequest::Pix(_) => PaymentMethod::Pix,
            PaymentRequest::Card(_) => PaymentMethod::Card,
            PaymentRequest::Checkout(_) => PaymentMethod::Checkout,
        }
    }

    /// Card payload of a card request or card-backed checkout
    pub fn card(&self) -> Option<&CardPayment> {
        match self {
            PaymentRequest::Card(card) => Some(card),
            PaymentRequest::Checkout(CheckoutPayment {
                payment_type: CheckoutMethod::Card(card),
                ..
            }) => Some(card),
            _ => None,
        }
    }

    /// Parse a request from its envelope JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse a request from envelope JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| BfinancialError::invalid_request(format!("malformed payment request: {}", e)))
    }
}

impl From<PixPayment> for PaymentRequest {
    fn from(pix: PixPayment) -> Self {
        PaymentRequest::Pix(pix)
    }
}

impl From<CardPayment> for PaymentRequest {
    fn from(card: CardPayment) -> Self {
        PaymentRequest::Card(card)
    }
}

impl From<CheckoutPayment> for PaymentRequest {
    fn from(checkout: CheckoutPayment) -> Self {
        PaymentRequest::Checkout(checkout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;
    use std::str::FromStr;

    fn pix() -> PixPayment {
        PixPayment::new(1500, "payer@example.com", "08789662938")
    }

    fn card() -> CardPayment {
        CardPayment::new(
            "4111111111111111",
            Decimal::from_str("150.75").unwrap(),
            "123",
            "payer@example.com",
            "Maria Silva",
            "08789662938",
            2030,
            12,
        )
    }

    #[test]
    fn test_pix_envelope() {
        let value = serde_json::to_value(PaymentRequest::from(pix())).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "Pix",
                "amount": 1500,
                "payer_email": "payer@example.com",
                "payer_cpf": "08789662938"
            })
        );
    }

    #[test]
    fn test_card_envelope_types() {
        let value = serde_json::to_value(PaymentRequest::from(card())).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 9);
        assert_eq!(value["method"], "Card");
        assert_eq!(value["amount"].as_f64(), Some(150.75));
        assert!(value["amount"].is_f64());
        assert_eq!(value["cvv"], json!("123"));
        assert_eq!(value["number"], "4111111111111111");
        assert_eq!(value["expiration_year"], 2030);
        assert_eq!(value["expiration_month"], 12);
        assert_eq!(value["payer_name"], "Maria Silva");
    }

    #[test]
    fn test_checkout_envelope_selects_inner_method() {
        let with_card = PaymentRequest::from(CheckoutPayment::new("chk_1", card()));
        let value = serde_json::to_value(&with_card).unwrap();
        assert_eq!(value["method"], "Checkout");
        assert_eq!(value["checkout_id"], "chk_1");
        assert_eq!(value["payment_type"]["method"], "Card");
        assert_eq!(value["payment_type"]["number"], "4111111111111111");

        let with_pix = PaymentRequest::from(CheckoutPayment::new("chk_2", pix()));
        let value = serde_json::to_value(&with_pix).unwrap();
        assert_eq!(value["payment_type"]["method"], "Pix");
        assert_eq!(value["payment_type"]["amount"], 1500);
    }

    #[test]
    fn test_checkout_from_parts() {
        let checkout = CheckoutPayment::from_parts("chk", Some(pix()), None).unwrap();
        assert_eq!(checkout.payment_type.method(), PaymentMethod::Pix);

        let checkout = CheckoutPayment::from_parts("chk", None, Some(card())).unwrap();
        assert_eq!(checkout.payment_type.method(), PaymentMethod::Card);

        let both = CheckoutPayment::from_parts("chk", Some(pix()), Some(card())).unwrap_err();
        assert_eq!(both.kind(), ErrorKind::InvalidRequest);

        let neither = CheckoutPayment::from_parts("chk", None, None).unwrap_err();
        assert_eq!(neither.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_zero_amount_pix_checkout_is_still_pix() {
        let checkout = CheckoutPayment::from_parts(
            "chk",
            Some(PixPayment::new(0, "payer@example.com", "08789662938")),
            None,
        )
        .unwrap();
        assert_eq!(checkout.payment_type.method(), PaymentMethod::Pix);
    }

    #[test]
    fn test_request_from_json() {
        let request = PaymentRequest::from_json(
            r#"{
                "checkout_id": "aaa",
                "payment_type": {
                    "payer_email": "aaaa@gmail.com",
                    "payer_cpf": "08789662938",
                    "amount": 1,
                    "method": "Pix"
                },
                "method": "Checkout"
            }"#,
        )
        .unwrap();

        assert_eq!(request.method(), PaymentMethod::Checkout);
        match request {
            PaymentRequest::Checkout(checkout) => {
                assert_eq!(checkout.checkout_id, "aaa");
                assert_eq!(
                    checkout.payment_type,
                    CheckoutMethod::Pix(PixPayment::new(1, "aaaa@gmail.com", "08789662938"))
                );
            }
            other => panic!("expected checkout, got {:?}", other),
        }
    }

    #[test]
    fn test_request_from_json_rejects_unknown_method() {
        let err = PaymentRequest::from_json(r#"{"method":"Boleto","amount":1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);

        let nested = r#"{
            "method": "Checkout",
            "checkout_id": "x",
            "payment_type": {"method": "Checkout", "checkout_id": "y"}
        }"#;
        let err = PaymentRequest::from_json(nested).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_card_amount_survives_round_trip() {
        let request = PaymentRequest::from(card());
        let json = serde_json::to_string(&request).unwrap();
        let parsed = PaymentRequest::from_json(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_wire_amount_precision() {
        for amount in ["150.75", "9999999.99", "0.1", "0"] {
            let mut exact = card();
            exact.amount = Decimal::from_str(amount).unwrap();
            assert!(exact.check_wire_amount().is_ok(), "amount {}", amount);
        }

        let mut too_precise = card();
        too_precise.amount = Decimal::from_str("12345678901234567.89").unwrap();
        let err = too_precise.check_wire_amount().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("12345678901234567.89"));
    }

    #[test]
    fn test_last_four() {
        assert_eq!(card().last_four(), "1111");
        assert_eq!(card().masked_number(), "************1111");
        let mut short = card();
        short.number = "12".to_string();
        assert_eq!(short.last_four(), "12");
        assert_eq!(short.masked_number(), "12");
    }

    #[test]
    fn test_request_card_accessor() {
        assert!(PaymentRequest::from(card()).card().is_some());
        assert!(PaymentRequest::from(CheckoutPayment::new("chk", card())).card().is_some());
        assert!(PaymentRequest::from(CheckoutPayment::new("chk", pix())).card().is_none());
        assert!(PaymentRequest::from(pix()).card().is_none());
    }
}
