use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Profile {
    company: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Counterparty {
    static_id: String,
    #[serde(default)]
    is_financial_institution: bool,
}

/// Reads the caller's platform context: its own company id and the
/// counterparties it may trade with.
pub struct RegistryClient {
    client: Client,
    profile_url: String,
    counterparties_url: String,
}

impl RegistryClient {
    pub fn new(client: Client, profile_url: String, counterparties_url: String) -> Self {
        Self {
            client,
            profile_url,
            counterparties_url,
        }
    }

    pub fn own_company(&self, token: &str) -> Result<String, String> {
        let response = self
            .client
            .get(&self.profile_url)
            .bearer_auth(token)
            .send()
            .map_err(|err| format!("profile request failed: {err}"))?;

        if !response.status().is_success() {
            return Err(format!(
                "profile request failed with status {}",
                response.status()
            ));
        }

        let payload: Profile = response
            .json()
            .map_err(|err| format!("profile response parse failed: {err}"))?;
        Ok(payload.company)
    }

    /// Counterparty search with an empty query, filtered to companies a
    /// trade can be booked against (financial institutions excluded).
    pub fn trading_counterparties(&self, token: &str) -> Result<Vec<String>, String> {
        let response = self
            .client
            .get(&self.counterparties_url)
            .query(&[("query", "")])
            .bearer_auth(token)
            .send()
            .map_err(|err| format!("counterparty request failed: {err}"))?;

        if !response.status().is_success() {
            return Err(format!(
                "counterparty request failed with status {}",
                response.status()
            ));
        }

        let payload: Vec<Counterparty> = response
            .json()
            .map_err(|err| format!("counterparty response parse failed: {err}"))?;

        Ok(payload
            .into_iter()
            .filter(|counterparty| !counterparty.is_financial_institution)
            .map(|counterparty| counterparty.static_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Counterparty;

    #[test]
    fn counterparty_deserializes_platform_fields() {
        let parsed: Vec<Counterparty> = serde_json::from_str(
            r#"[
                {"staticId": "CP-1", "isFinancialInstitution": false, "x500Name": {"CN": "One"}},
                {"staticId": "BANK-1", "isFinancialInstitution": true}
            ]"#,
        )
        .expect("parse counterparties");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].static_id, "CP-1");
        assert!(!parsed[0].is_financial_institution);
        assert!(parsed[1].is_financial_institution);
    }
}
