use baltic_domain::value_objects::cargo::CargoRecord;
use baltic_domain::value_objects::trade::TradeRecord;
use reqwest::blocking::Client;
use serde::Serialize;

/// Submits trade and cargo records to the trade-cargo service. A failed
/// submission is reported to the caller, never retried here.
pub struct MovementClient {
    client: Client,
    trades_url: String,
    movements_url: String,
}

impl MovementClient {
    pub fn new(client: Client, trades_url: String, movements_url: String) -> Self {
        Self {
            client,
            trades_url,
            movements_url,
        }
    }

    pub fn submit_trade(&self, token: &str, trade: &TradeRecord) -> Result<(), String> {
        self.post_json(&self.trades_url, token, trade, "trade")
    }

    pub fn submit_cargo(&self, token: &str, cargo: &CargoRecord) -> Result<(), String> {
        self.post_json(&self.movements_url, token, cargo, "cargo")
    }

    fn post_json<T: Serialize>(
        &self,
        url: &str,
        token: &str,
        body: &T,
        kind: &'static str,
    ) -> Result<(), String> {
        metrics::counter!("baltic.infra.movements.requests_total", "kind" => kind).increment(1);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .map_err(|err| format!("{kind} submission failed: {err}"))?;

        if !response.status().is_success() {
            metrics::counter!("baltic.infra.movements.failures_total", "kind" => kind).increment(1);
            return Err(format!(
                "{kind} submission failed with status {}",
                response.status()
            ));
        }

        Ok(())
    }
}
