//! Common constants for the payment API

/// API endpoints and defaults
pub mod api {
    /// Endpoint used when logging in without an explicit base URL
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
    /// Path of the payment creation endpoint, relative to the base URL
    pub const CREATE_PAYMENT_PATH: &str = "/payment/create";
    /// Header carrying the bearer credential
    pub const DEFAULT_AUTH_HEADER: &str = "Authorization-key";
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build the payment creation URL for a base URL
    pub fn create_payment_url(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), CREATE_PAYMENT_PATH)
    }
}

/// Environment variables read by [`crate::types::ClientConfig::from_env`]
pub mod env {
    /// Base URL of the payment API
    pub const API_URL: &str = "BFINANCIAL_API_URL";
    /// Bearer credential
    pub const API_KEY: &str = "BFINANCIAL_API_KEY";
    /// Request timeout in seconds
    pub const TIMEOUT_SECS: &str = "BFINANCIAL_TIMEOUT_SECS";
}

#[cfg(test)]
mod tests {
    use super::api;

    #[test]
    fn test_create_payment_url() {
        assert_eq!(
            api::create_payment_url("http://127.0.0.1:8080/api"),
            "http://127.0.0.1:8080/api/payment/create"
        );
        assert_eq!(
            api::create_payment_url("https://pay.example.com/api/"),
            "https://pay.example.com/api/payment/create"
        );
    }
}
