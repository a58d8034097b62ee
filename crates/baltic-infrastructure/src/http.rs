use reqwest::blocking::Client;
use std::time::Duration;

/// Shared blocking client for every adapter. Certificate verification is
/// on unless the caller explicitly opts out for local development.
pub fn build_client(timeout_secs: u64, accept_invalid_certs: bool) -> Result<Client, String> {
    if accept_invalid_certs {
        tracing::warn!("TLS certificate verification disabled");
    }
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_idle_timeout(Duration::from_secs(90))
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|err| format!("failed to build http client: {err}"))
}
