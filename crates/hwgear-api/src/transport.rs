// HTTP transport configuration.
//
// The appliances speak plain HTTP/1.1 with optional basic auth and no
// sessions, so the transport layer is a configured reqwest client plus a
// helper that attaches credentials per request.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Default whole-request timeout. The devices answer in well under a second
/// on a healthy LAN; ten seconds covers congested links and waking modems.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection tuning and credentials for one device.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Bound on the entire request, connect through body.
    pub timeout: Duration,
    /// Basic-auth user. `None` disables authentication entirely.
    pub username: Option<String>,
    /// Basic-auth password. Ignored unless `username` is set.
    pub password: Option<SecretString>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            username: None,
            password: None,
        }
    }
}

impl TransportConfig {
    /// Build the underlying HTTP client for this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("hwgear/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Connection {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
            })
    }

    /// Whether requests will carry an `Authorization` header.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some()
    }

    /// Attach basic auth to a request when credentials are configured.
    pub(crate) fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.username {
            Some(user) => request.basic_auth(
                user,
                self.password.as_ref().map(ExposeSecret::expose_secret),
            ),
            None => request,
        }
    }
}
