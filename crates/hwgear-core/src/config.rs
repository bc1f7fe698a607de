// ── Runtime device configuration ──
//
// Describes *how* to reach one appliance. Carries credential data and
// connection tuning, but never touches disk; the embedding application
// (scheduler, bridge, setup flow) constructs a `DeviceConfig` and hands
// it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use hwgear_api::{DEFAULT_TIMEOUT, Error, TransportConfig};

/// Port the embedded HTTP server listens on out of the box.
pub const DEFAULT_PORT: u16 = 80;

/// Configuration for one appliance.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Hostname or IP address, without scheme or port.
    pub host: String,
    /// HTTP port (the devices do not speak TLS).
    pub port: u16,
    /// Basic-auth user, when the device has auth enabled.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<SecretString>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl DeviceConfig {
    /// Config for a device at `host` with default port and timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Attach basic-auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Base URL all endpoint paths are joined against.
    pub fn base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&format!("http://{}:{}/", self.host, self.port))?)
    }

    /// Project the transport-level slice of this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
