//! Envelope encoding and response decoding shared by the async and blocking clients

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::{CardPayment, PaymentMethod, PaymentRequest, PaymentResult};
use crate::{BfinancialError, Result};

/// Serialize a request into its wire envelope
pub fn encode(request: &PaymentRequest) -> Result<Vec<u8>> {
    if let Some(card) = request.card() {
        card.check_wire_amount()?;
    }

    serde_json::to_vec(request).map_err(|e| {
        BfinancialError::invalid_request(format!("cannot encode {} request: {}", request.method(), e))
    })
}

/// Envelope with card secrets masked, for logging
pub fn redacted(request: &PaymentRequest) -> Value {
    let mut value = serde_json::to_value(request).unwrap_or(Value::Null);

    if let Some(card) = request.card() {
        let obj = match request.method() {
            PaymentMethod::Checkout => value.get_mut("payment_type"),
            _ => Some(&mut value),
        };
        if let Some(obj) = obj.and_then(Value::as_object_mut) {
            redact_card(obj, card);
        }
    }

    value
}

fn redact_card(obj: &mut Map<String, Value>, card: &CardPayment) {
    obj.insert("number".to_string(), Value::String(card.masked_number()));
    obj.insert("cvv".to_string(), Value::String("***".to_string()));
}

/// Turn an HTTP status and body into the result matching `method`
pub fn decode(method: PaymentMethod, status: u16, body: &str) -> Result<PaymentResult> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(payload_error);
        return Err(BfinancialError::remote_rejected(status, message, body));
    }

    let value: Value = serde_json::from_str(body).map_err(|e| BfinancialError::decode(e, body))?;

    if let Some(message) = payload_error(&value) {
        return Err(BfinancialError::remote_rejected(status, Some(message), body));
    }

    Ok(match method {
        PaymentMethod::Pix => PaymentResult::Pix(typed(value, body)?),
        PaymentMethod::Card => PaymentResult::Card(typed(value, body)?),
        PaymentMethod::Checkout => PaymentResult::Checkout(typed(value, body)?),
    })
}

fn typed<T: DeserializeOwned>(value: Value, body: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| BfinancialError::decode(e, body))
}

/// Non-empty `data.error` of a response body
fn payload_error(value: &Value) -> Option<String> {
    value
        .get("data")
        .and_then(|data| data.get("error"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
