// ── Monitor facade ──
//
// One `Monitor` per appliance. `poll()` is a pure request/response cycle
// with no internal timers, retries or caching; scheduling belongs to the
// embedding application. Commands pass straight through to the client.

use tracing::{debug, warn};

use hwgear_api::{DeviceClient, Error, parse_modem_status, parse_status};

use crate::config::DeviceConfig;
use crate::convert;
use crate::gateway;
use crate::model::PollResult;

/// Facade over one device: polling plus commands.
pub struct Monitor {
    client: DeviceClient,
    config: DeviceConfig,
}

impl Monitor {
    /// Build a monitor from a device config.
    pub fn new(config: DeviceConfig) -> Result<Self, Error> {
        let client = DeviceClient::new(config.base_url()?, &config.transport())?;
        Ok(Self { client, config })
    }

    /// Wrap an existing client (tests, shared connection pools).
    pub fn with_client(client: DeviceClient, config: DeviceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Run one full poll cycle: fetch the values document, normalize it,
    /// and for gateways fold in the derived modem readings.
    pub async fn poll(&self) -> Result<PollResult, Error> {
        let body = self.client.fetch_values().await?;
        let raw = parse_status(&body)?;
        let mut result = convert::poll_result_from_status(&raw);

        if result.identity.family.is_gateway() {
            self.merge_modem_status(&mut result).await;
        }

        debug!(
            family = %result.identity.family,
            readings = result.readings.len(),
            binary_inputs = result.binary_inputs.len(),
            outputs = result.outputs.len(),
            "poll complete"
        );
        Ok(result)
    }

    /// Fetch and fold in the gateway's secondary document. Failures of any
    /// kind are swallowed: a broken modem page never fails the primary poll.
    async fn merge_modem_status(&self, result: &mut PollResult) {
        let body = match self.client.fetch_status().await {
            Ok(body) => body,
            Err(err) => {
                debug!(%err, "modem status fetch failed, continuing without it");
                return;
            }
        };
        match parse_modem_status(&body) {
            Ok(modem) => {
                for reading in gateway::derive_modem_readings(&modem) {
                    if result.reading(&reading.id).is_some() {
                        debug!(id = %reading.id, "derived reading id already present, dropped");
                        continue;
                    }
                    result.readings.push(reading);
                }
            }
            Err(err) => debug!(%err, "modem status unparseable, continuing without it"),
        }
    }

    /// Switch a relay output. `Ok(false)` means the device refused.
    pub async fn set_output(&self, id: &str, on: bool) -> Result<bool, Error> {
        self.client.set_output(id, on).await
    }

    /// Queue an SMS on a gateway. `Ok(false)` means the gateway refused.
    pub async fn send_sms(&self, number: &str, text: &str) -> Result<bool, Error> {
        self.client.send_sms(number, text).await
    }

    /// Trigger a ring-only alarm call on a gateway.
    pub async fn place_call(&self, number: &str) -> Result<bool, Error> {
        self.client.place_call(number).await
    }

    /// One probing poll collapsed to a yes/no, for setup flows.
    pub async fn verify_connection(&self) -> bool {
        match self.poll().await {
            Ok(_) => true,
            Err(err) => {
                warn!(host = %self.config.host, %err, "connection check failed");
                false
            }
        }
    }
}
