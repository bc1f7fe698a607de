// Device HTTP client.
//
// Every operation is one GET against the device's tiny embedded HTTP
// server: `/values.xml` for telemetry (and, with query parameters, SMS and
// call commands), `/status.xml` for the gateway's modem page, and
// `/output.xml` for relay control. There are no sessions; credentials ride
// on each request as basic auth.

use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

const VALUES_PATH: &str = "values.xml";
const STATUS_PATH: &str = "status.xml";
const OUTPUT_PATH: &str = "output.xml";

/// Body marker a gateway writes when it accepted an SMS or call command.
/// HTTP 200 alone is not acceptance: the gateway answers 200 with a failure
/// body when the queue is full or the number is malformed.
pub const RESULT_OK_MARKER: &str = "<Rslt>1</Rslt>";

/// True when a command response body reports acceptance.
pub fn command_accepted(body: &str) -> bool {
    body.contains(RESULT_OK_MARKER)
}

/// HTTP client for one appliance.
///
/// Thread-safe by way of the inner `reqwest::Client`; hold one per device
/// for its whole lifetime.
pub struct DeviceClient {
    http: reqwest::Client,
    base_url: Url,
    transport: TransportConfig,
}

impl DeviceClient {
    /// Build a client from a base URL (e.g. `http://192.168.1.25:80/`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            transport: transport.clone(),
        })
    }

    /// Wrap an existing HTTP client. Useful for tests and for embedders that
    /// share one connection pool across many devices.
    pub fn with_client(http: reqwest::Client, base_url: Url, transport: TransportConfig) -> Self {
        Self {
            http,
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Poll endpoints ──────────────────────────────────────────────

    /// Fetch the raw `/values.xml` telemetry document.
    pub async fn fetch_values(&self) -> Result<String, Error> {
        self.fetch_document(self.endpoint(VALUES_PATH)?).await
    }

    /// Fetch the raw `/status.xml` modem document (gateways only).
    pub async fn fetch_status(&self) -> Result<String, Error> {
        self.fetch_document(self.endpoint(STATUS_PATH)?).await
    }

    async fn fetch_document(&self, url: Url) -> Result<String, Error> {
        debug!("GET {url}");
        let response = self.transport.apply_auth(self.http.get(url)).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Auth);
        }
        if !status.is_success() {
            return Err(Error::Connection {
                message: format!("device answered HTTP {status}"),
                status: Some(status.as_u16()),
            });
        }
        Ok(response.text().await?)
    }

    // ── Command endpoints ───────────────────────────────────────────
    //
    // Commands report success as a plain bool: `Err` is reserved for
    // transport failures, and any unexpected HTTP status, 401 included,
    // is `Ok(false)`. Query values are percent-encoded with spaces as
    // `%20`: the firmware decodes percent escapes but not the form `+`,
    // which would reach the modem as a literal plus sign.

    /// Switch a relay output. Success is the device answering HTTP 200.
    pub async fn set_output(&self, id: &str, on: bool) -> Result<bool, Error> {
        let mut url = self.endpoint(OUTPUT_PATH)?;
        let state = if on { "1" } else { "0" };
        url.set_query(Some(&format!(
            "id={}&state={state}",
            urlencoding::encode(id)
        )));

        let (status, _body) = self.execute_command(url).await?;
        if status != StatusCode::OK {
            warn!(id, %status, "output command rejected");
            return Ok(false);
        }
        Ok(true)
    }

    /// Queue an SMS on a gateway. Success requires HTTP 200 *and* the
    /// acceptance marker in the response body.
    pub async fn send_sms(&self, number: &str, text: &str) -> Result<bool, Error> {
        let mut url = self.endpoint(VALUES_PATH)?;
        url.set_query(Some(&format!(
            "Cmd=SMS&Nmr={}&Text={}",
            urlencoding::encode(number),
            urlencoding::encode(text)
        )));

        let (status, body) = self.execute_command(url).await?;
        if status != StatusCode::OK {
            warn!(%status, "SMS command rejected");
            return Ok(false);
        }
        let accepted = command_accepted(&body);
        if !accepted {
            warn!(body = %body, "gateway refused SMS");
        }
        Ok(accepted)
    }

    /// Trigger a ring-only alarm call on a gateway. Same acceptance rules
    /// as [`send_sms`](Self::send_sms).
    pub async fn place_call(&self, number: &str) -> Result<bool, Error> {
        let mut url = self.endpoint(VALUES_PATH)?;
        url.set_query(Some(&format!("Cmd=Call&Nmr={}", urlencoding::encode(number))));

        let (status, body) = self.execute_command(url).await?;
        if status != StatusCode::OK {
            warn!(%status, "call command rejected");
            return Ok(false);
        }
        let accepted = command_accepted(&body);
        if !accepted {
            warn!(body = %body, "gateway refused call");
        }
        Ok(accepted)
    }

    async fn execute_command(&self, url: Url) -> Result<(StatusCode, String), Error> {
        debug!("GET {url}");
        let response = self.transport.apply_auth(self.http.get(url)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}
