//! Maps an environment name onto the five service URLs the seeder talks
//! to. No existence check is made; a typo yields an unreachable URL.

const LOCAL_KEYCLOAK_PORT: u16 = 8070;
const LOCAL_USERS_PORT: u16 = 3102;
const LOCAL_COVERAGE_PORT: u16 = 3103;
const LOCAL_TRADE_CARGO_PORT: u16 = 3104;

const TOKEN_PATH: &str = "/auth/realms/BALTIC/protocol/openid-connect/token";
const PROFILE_PATH: &str = "/v0/profile";
const COUNTERPARTIES_PATH: &str = "/v0/counterparties";
const TRADES_PATH: &str = "/v0/trades";
const MOVEMENTS_PATH: &str = "/v0/movements";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub profile_url: String,
    pub counterparties_url: String,
    pub trades_url: String,
    pub movements_url: String,
}

impl Endpoints {
    /// All five URLs on one host. Integration tests point this at a mock
    /// server; the local environment is a multi-port variant of the same
    /// paths.
    pub fn single_host(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{base}{TOKEN_PATH}"),
            profile_url: format!("{base}{PROFILE_PATH}"),
            counterparties_url: format!("{base}{COUNTERPARTIES_PATH}"),
            trades_url: format!("{base}{TRADES_PATH}"),
            movements_url: format!("{base}{MOVEMENTS_PATH}"),
        }
    }
}

pub fn resolve(env: &str) -> Endpoints {
    if env == "local" || env == "localhost" {
        return Endpoints {
            token_url: format!("http://localhost:{LOCAL_KEYCLOAK_PORT}{TOKEN_PATH}"),
            profile_url: format!("http://localhost:{LOCAL_USERS_PORT}{PROFILE_PATH}"),
            counterparties_url: format!(
                "http://localhost:{LOCAL_COVERAGE_PORT}{COUNTERPARTIES_PATH}"
            ),
            trades_url: format!("http://localhost:{LOCAL_TRADE_CARGO_PORT}{TRADES_PATH}"),
            movements_url: format!("http://localhost:{LOCAL_TRADE_CARGO_PORT}{MOVEMENTS_PATH}"),
        };
    }

    Endpoints {
        token_url: format!("https://keycloak.{env}.baltic.trade{TOKEN_PATH}"),
        profile_url: format!("https://api-users.{env}.baltic.trade{PROFILE_PATH}"),
        counterparties_url: format!("https://api-coverage.{env}.baltic.trade{COUNTERPARTIES_PATH}"),
        trades_url: format!("https://api-trade-cargo.{env}.baltic.trade{TRADES_PATH}"),
        movements_url: format!("https://api-trade-cargo.{env}.baltic.trade{MOVEMENTS_PATH}"),
    }
}
