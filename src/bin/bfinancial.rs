//! bfinancial command line client
//!
//! Submits one payment request envelope and prints the typed result.
//!
//! ```text
//! BFINANCIAL_API_KEY=... bfinancial request.json
//! echo '{"method":"Pix","amount":1500,"payer_email":"a@b.com","payer_cpf":"08789662938"}' | bfinancial
//! ```
//!
//! ## Environment
//!
//! - `BFINANCIAL_API_KEY` - Bearer credential (required)
//! - `BFINANCIAL_API_URL` - API base URL (default: http://127.0.0.1:8080/api)
//! - `BFINANCIAL_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::env;
use std::io::Read;

use bfinancial::{client::PaymentClient, types::ClientConfig, PaymentRequest};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let raw = match env::args().nth(1).as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let request = PaymentRequest::from_json(&raw)?;
    let client = PaymentClient::new(ClientConfig::from_env()?)?;

    tracing::info!("Submitting {} payment to {}", request.method(), client.endpoint());

    let result = client.submit(&request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
