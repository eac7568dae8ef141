//! PayPal Configuration
//!
//! Endpoints and client credentials, read once from a JSON file or the
//! environment and immutable afterwards.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// PayPal endpoints and credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalConfig {
    /// OAuth2 token endpoint, e.g. `https://api-m.sandbox.paypal.com/v1/oauth2/token`
    #[serde(rename = "oauth-api", default)]
    pub oauth_api: String,

    /// Orders endpoint, e.g. `https://api-m.sandbox.paypal.com/v2/checkout/orders`
    #[serde(rename = "order-api", default)]
    pub order_api: String,

    #[serde(rename = "client-id", default)]
    pub client_id: String,

    #[serde(default)]
    pub secret: String,
}

impl PaypalConfig {
    /// Build a config in code. Validation happens when a client is built.
    pub fn new(
        oauth_api: impl Into<String>,
        order_api: impl Into<String>,
        client_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            oauth_api: oauth_api.into(),
            order_api: order_api.into(),
            client_id: client_id.into(),
            secret: secret.into(),
        }
    }

    /// Load a JSON config file.
    ///
    /// If the file doesn't exist, an empty placeholder is written (mode 0600
    /// on Unix) so an operator can fill it in, and
    /// [`PaymentError::ConfigCreated`] is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Self::create_placeholder(path));
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self =
            serde_json::from_slice(&data).map_err(|source| PaymentError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded PayPal config");
        Ok(config)
    }

    /// Create from environment variables
    ///
    /// Reads `PAYPAL_OAUTH_API`, `PAYPAL_ORDER_API`, `PAYPAL_CLIENT_ID` and
    /// `PAYPAL_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, secrets store, test map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            oauth_api: lookup("PAYPAL_OAUTH_API").unwrap_or_default(),
            order_api: lookup("PAYPAL_ORDER_API").unwrap_or_default(),
            client_id: lookup("PAYPAL_CLIENT_ID").unwrap_or_default(),
            secret: lookup("PAYPAL_SECRET").unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that all four fields are present
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("oauth-api", &self.oauth_api),
            ("order-api", &self.order_api),
            ("client-id", &self.client_id),
            ("secret", &self.secret),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PaymentError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Write an all-empty config file and return the error to surface.
    fn create_placeholder(path: &Path) -> PaymentError {
        match Self::write_placeholder(path) {
            Ok(()) => {
                tracing::warn!(path = %path.display(), "PayPal config missing, wrote empty placeholder");
                PaymentError::ConfigCreated {
                    path: path.to_path_buf(),
                }
            }
            Err(e) => e,
        }
    }

    fn write_placeholder(path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&Self::default()).map_err(std::io::Error::from)?;

        // Owner-only from the moment the file exists; never clobber one
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl fmt::Debug for PaypalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaypalConfig")
            .field("oauth_api", &self.oauth_api)
            .field("order_api", &self.order_api)
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
