//! Payment result types

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};

use super::payment::PaymentMethod;

/// Response body returned by `/payment/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse<D> {
    /// Status code reported by the service
    pub code: u64,
    /// Method-specific payload
    pub data: D,
}

/// QR code for an instant transfer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCode {
    /// PNG image, base64 encoded
    pub base64: String,
    /// "Copy and paste" payload
    pub literal: String,
}

impl QrCode {
    /// Decode the QR code image
    pub fn image_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(general_purpose::STANDARD.decode(self.base64.trim())?)
    }

    /// Whether the service sent an empty QR code
    pub fn is_empty(&self) -> bool {
        self.base64.is_empty() && self.literal.is_empty()
    }
}

/// Data returned for a Pix payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixPaymentData {
    /// Error reported by the service
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    pub payment_id: u64,
    pub qr_code: QrCode,
}

/// Data returned for a card payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPaymentData {
    /// Error reported by the service
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    pub payment_id: u64,
    /// Total charged, in the smallest currency unit
    pub total_amount: i64,
    /// Surcharge applied on top of the requested amount
    pub increase: i64,
}

/// Data returned for a checkout payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPaymentData {
    /// Present when the checkout was paid with Pix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<QrCode>,
    /// Error reported by the service
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    pub payment_id: u64,
    #[serde(default)]
    pub total_amount: i64,
    #[serde(default)]
    pub increase: i64,
}

pub type PixPaymentResult = PaymentResponse<PixPaymentData>;
pub type CardPaymentResult = PaymentResponse<CardPaymentData>;
pub type CheckoutPaymentResult = PaymentResponse<CheckoutPaymentData>;

/// Outcome of a payment submission, shaped by the request kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "result")]
pub enum PaymentResult {
    Pix(PixPaymentResult),
    Card(CardPaymentResult),
    Checkout(CheckoutPaymentResult),
}

impl PaymentResult {
    /// Method of the request that produced this result
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentResult::Pix(_) => PaymentMethod::Pix,
            PaymentResult::Card(_) => PaymentMethod::Card,
            PaymentResult::Checkout(_) => PaymentMethod::Checkout,
        }
    }

    /// Status code reported by the service
    pub fn code(&self) -> u64 {
        match self {
            PaymentResult::Pix(r) => r.code,
            PaymentResult::Card(r) => r.code,
            PaymentResult::Checkout(r) => r.code,
        }
    }

    /// Identifier of the created payment
    pub fn payment_id(&self) -> u64 {
        match self {
            PaymentResult::Pix(r) => r.data.payment_id,
            PaymentResult::Card(r) => r.data.payment_id,
            PaymentResult::Checkout(r) => r.data.payment_id,
        }
    }

    /// Error message reported by the service, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            PaymentResult::Pix(r) => r.data.error.as_deref(),
            PaymentResult::Card(r) => r.data.error.as_deref(),
            PaymentResult::Checkout(r) => r.data.error.as_deref(),
        }
    }

    /// QR code to show the payer, for Pix and Pix-backed checkouts
    pub fn qr_code(&self) -> Option<&QrCode> {
        match self {
            PaymentResult::Pix(r) => Some(&r.data.qr_code),
            PaymentResult::Card(_) => None,
            PaymentResult::Checkout(r) => r.data.qr_code.as_ref().filter(|qr| !qr.is_empty()),
        }
    }

    pub fn as_pix(&self) -> Option<&PixPaymentResult> {
        match self {
            PaymentResult::Pix(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_card(&self) -> Option<&CardPaymentResult> {
        match self {
            PaymentResult::Card(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_checkout(&self) -> Option<&CheckoutPaymentResult> {
        match self {
            PaymentResult::Checkout(r) => Some(r),
            _ => None,
        }
    }

    /// Unwrap a Pix result
    pub fn into_pix(self) -> crate::Result<PixPaymentResult> {
        match self {
            PaymentResult::Pix(r) => Ok(r),
            other => Err(other.mismatch(PaymentMethod::Pix)),
        }
    }

    /// Unwrap a card result
    pub fn into_card(self) -> crate::Result<CardPaymentResult> {
        match self {
            PaymentResult::Card(r) => Ok(r),
            other => Err(other.mismatch(PaymentMethod::Card)),
        }
    }

    /// Unwrap a checkout result
    pub fn into_checkout(self) -> crate::Result<CheckoutPaymentResult> {
        match self {
            PaymentResult::Checkout(r) => Ok(r),
            other => Err(other.mismatch(PaymentMethod::Checkout)),
        }
    }

    fn mismatch(&self, expected: PaymentMethod) -> crate::BfinancialError {
        crate::BfinancialError::invalid_request(format!(
            "expected a {} result, got {}",
            expected,
            self.method()
        ))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
