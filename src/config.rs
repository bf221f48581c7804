use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::{
    constants::{
        DEFAULT_PORT, DEFAULT_VENDOR_TIMEOUT, PRODUCTION_VERIFY_RECEIPT_URL,
        SANDBOX_VERIFY_RECEIPT_URL,
    },
    domain::entities::vendor_environment::VendorEnvironment,
    errors::ConfigError,
};

/// The verifyReceipt URL for each [`VendorEnvironment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorEndpoints {
    production: String,
    sandbox: String,
}

impl VendorEndpoints {
    pub fn new(
        production: impl Into<String>,
        sandbox: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            production: validate_endpoint(VendorEnvironment::Production, production.into())?,
            sandbox: validate_endpoint(VendorEnvironment::Sandbox, sandbox.into())?,
        })
    }

    pub fn url(&self, environment: VendorEnvironment) -> &str {
        match environment {
            VendorEnvironment::Production => &self.production,
            VendorEnvironment::Sandbox => &self.sandbox,
        }
    }
}

impl Default for VendorEndpoints {
    fn default() -> Self {
        Self {
            production: PRODUCTION_VERIFY_RECEIPT_URL.to_owned(),
            sandbox: SANDBOX_VERIFY_RECEIPT_URL.to_owned(),
        }
    }
}

fn validate_endpoint(environment: VendorEnvironment, url: String) -> Result<String, ConfigError> {
    let reason = match Url::parse(&url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => return Ok(url),
        Ok(parsed) => format!("unsupported scheme '{}'", parsed.scheme()),
        Err(e) => e.to_string(),
    };
    Err(ConfigError::InvalidEndpoint {
        environment,
        url,
        reason,
    })
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub endpoints: VendorEndpoints,

    /// Upper bound for a single outbound verifyReceipt call. A request that
    /// falls back to sandbox may take up to twice this long.
    pub vendor_timeout: Duration,
}

impl RelayConfig {
    pub fn new(endpoints: VendorEndpoints, vendor_timeout: Duration) -> Result<Self, ConfigError> {
        if vendor_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            endpoints,
            vendor_timeout,
            ..Self::default()
        })
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: DEFAULT_PORT,
            endpoints: VendorEndpoints::default(),
            vendor_timeout: DEFAULT_VENDOR_TIMEOUT,
        }
    }
}

/// Command line / environment settings for the relay server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RelayArgs {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on.
    /// Defaults to 3000.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    /// verifyReceipt endpoint for production receipts.
    #[arg(long, default_value = PRODUCTION_VERIFY_RECEIPT_URL, env = "IAP_PRODUCTION_URL")]
    pub production_url: String,

    /// verifyReceipt endpoint for sandbox receipts.
    #[arg(long, default_value = SANDBOX_VERIFY_RECEIPT_URL, env = "IAP_SANDBOX_URL")]
    pub sandbox_url: String,

    /// Timeout in seconds for each call to Apple.
    /// Defaults to 10.
    #[arg(long, default_value_t = DEFAULT_VENDOR_TIMEOUT.as_secs(), env = "IAP_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

impl RelayArgs {
    pub fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let endpoints = VendorEndpoints::new(self.production_url, self.sandbox_url)?;
        let config = RelayConfig::new(endpoints, Duration::from_secs(self.timeout_secs))?;
        Ok(RelayConfig {
            host: self.host,
            port: self.port,
            ..config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_point_at_apple() {
        let endpoints = VendorEndpoints::default();
        assert_eq!(
            endpoints.url(VendorEnvironment::Production),
            "https://buy.itunes.apple.com/verifyReceipt"
        );
        assert_eq!(
            endpoints.url(VendorEnvironment::Sandbox),
            "https://sandbox.itunes.apple.com/verifyReceipt"
        );
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let err = VendorEndpoints::new("not a url", SANDBOX_VERIFY_RECEIPT_URL).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEndpoint {
                environment: VendorEnvironment::Production,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = VendorEndpoints::new(PRODUCTION_VERIFY_RECEIPT_URL, "ftp://example.com/verify")
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = RelayConfig::new(VendorEndpoints::default(), Duration::ZERO).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn args_build_config() {
        let config = RelayArgs::try_parse_from([
            "iap-receipt-relay",
            "--host",
            "127.0.0.1",
            "--port",
            "8081",
            "--production-url",
            "http://localhost:9000/production",
            "--sandbox-url",
            "http://localhost:9000/sandbox",
            "--timeout-secs",
            "3",
        ])
        .unwrap()
        .into_config()
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(
            config.endpoints.url(VendorEnvironment::Sandbox),
            "http://localhost:9000/sandbox"
        );
        assert_eq!(config.vendor_timeout, Duration::from_secs(3));
    }

    #[test]
    fn host_falls_back_to_environment() {
        std::env::set_var("HOST", "127.0.0.2");
        let from_env = RelayArgs::try_parse_from(["iap-receipt-relay"])
            .unwrap()
            .into_config()
            .unwrap();
        let from_flag = RelayArgs::try_parse_from(["iap-receipt-relay", "--host", "127.0.0.3"])
            .unwrap()
            .into_config()
            .unwrap();
        std::env::remove_var("HOST");
        assert_eq!(from_env.host, "127.0.0.2");
        assert_eq!(from_flag.host, "127.0.0.3");
    }

    #[test]
    fn args_reject_zero_timeout() {
        let result = RelayArgs::try_parse_from(["iap-receipt-relay", "--timeout-secs", "0"])
            .unwrap()
            .into_config();
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }
}
