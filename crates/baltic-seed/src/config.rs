use baltic_infrastructure::auth::Credentials;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const ENV_USERNAME: &str = "BALTIC_USERNAME";
pub const ENV_PASSWORD: &str = "BALTIC_PASSWORD";
pub const ENV_CLIENT_ID: &str = "BALTIC_CLIENT_ID";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub client_id: String,
}

pub fn load_config(path: &Path) -> Result<Config, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
    toml::from_str(&contents)
        .map_err(|err| format!("failed to parse TOML {}: {}", path.display(), err))
}

/// Environment variables win over the config file; all three must be set
/// to take effect. Credentials are never compiled in.
pub fn resolve_credentials(config_path: Option<&Path>) -> Result<Credentials, String> {
    if let Some(credentials) = credentials_from_env() {
        return Ok(credentials);
    }

    let Some(path) = config_path else {
        return Err(format!(
            "no credentials: set {ENV_USERNAME}/{ENV_PASSWORD}/{ENV_CLIENT_ID} or pass --config"
        ));
    };

    let config = load_config(path)?;
    Ok(Credentials {
        username: config.auth.username,
        password: config.auth.password,
        client_id: config.auth.client_id,
    })
}

fn credentials_from_env() -> Option<Credentials> {
    let username = std::env::var(ENV_USERNAME).ok()?;
    let password = std::env::var(ENV_PASSWORD).ok()?;
    let client_id = std::env::var(ENV_CLIENT_ID).ok()?;
    Some(Credentials {
        username,
        password,
        client_id,
    })
}

#[cfg(test)]
mod tests {
    use super::{load_config, Config};
    use std::path::Path;

    #[test]
    fn parse_minimal_config() {
        let toml_str = r#"
[auth]
username = "seeder"
password = "hunter2"
client_id = "baltic-web"
"#;
        let config: Config = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(config.auth.username, "seeder");
        assert_eq!(config.auth.client_id, "baltic-web");
    }

    #[test]
    fn load_config_missing_file_returns_error() {
        let path = Path::new("/tmp/baltic-seed-missing-config.toml");
        let err = load_config(path).expect_err("expected load to fail");
        assert!(err.contains("failed to read config"));
    }

    #[test]
    fn load_config_rejects_incomplete_auth_table() {
        let toml_str = r#"
[auth]
username = "seeder"
"#;
        let err = toml::from_str::<Config>(toml_str).expect_err("expected parse to fail");
        assert!(err.to_string().contains("password"));
    }
}
