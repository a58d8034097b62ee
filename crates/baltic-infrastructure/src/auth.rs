use reqwest::blocking::Client;
use serde::Deserialize;

/// Password-grant credentials for the identity provider.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub client_id: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct TokenClient {
    client: Client,
    token_url: String,
}

impl TokenClient {
    pub fn new(client: Client, token_url: String) -> Self {
        Self { client, token_url }
    }

    /// Exchanges the credentials for a bearer access token. The token
    /// request is the only form-urlencoded call the seeder makes.
    pub fn fetch_token(&self, credentials: &Credentials) -> Result<String, String> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("client_id", credentials.client_id.as_str()),
            ])
            .send()
            .map_err(|err| format!("token request failed: {err}"))?;

        if !response.status().is_success() {
            return Err(format!(
                "token request failed with status {}",
                response.status()
            ));
        }

        let payload: TokenResponse = response
            .json()
            .map_err(|err| format!("token response parse failed: {err}"))?;
        tracing::debug!("access token acquired");
        Ok(payload.access_token)
    }
}
