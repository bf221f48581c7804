use thiserror::Error;

use crate::domain::entities::vendor_environment::VendorEnvironment;

/// Failure to get a usable answer out of Apple's verifyReceipt service.
///
/// The `Display` text is returned to callers as the `error` field of a
/// transport failure response, so it must never contain the receipt or the
/// shared secret.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("callout to {environment} verifyReceipt endpoint failed to send: {source}")]
    Send {
        environment: VendorEnvironment,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {environment} verifyReceipt response: {source}")]
    Receive {
        environment: VendorEnvironment,
        #[source]
        source: reqwest::Error,
    },

    #[error("{environment} verifyReceipt endpoint returned non-success HTTP status {status}")]
    HttpStatus {
        environment: VendorEnvironment,
        status: u16,
    },

    #[error("failed to parse {environment} verifyReceipt response: {source}")]
    Decode {
        environment: VendorEnvironment,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    pub fn environment(&self) -> VendorEnvironment {
        match self {
            TransportError::Send { environment, .. }
            | TransportError::Receive { environment, .. }
            | TransportError::HttpStatus { environment, .. }
            | TransportError::Decode { environment, .. } => *environment,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {environment} endpoint URL '{url}': {reason}")]
    InvalidEndpoint {
        environment: VendorEnvironment,
        url: String,
        reason: String,
    },

    #[error("vendor timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
