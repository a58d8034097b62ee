use crate::endpoints::Endpoints;
use baltic_domain::services::generator::PairGenerator;
use baltic_domain::value_objects::role::Role;
use baltic_infrastructure::auth::{Credentials, TokenClient};
use baltic_infrastructure::http::build_client;
use baltic_infrastructure::movements::MovementClient;
use baltic_infrastructure::registry::RegistryClient;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SeedOptions {
    pub role: Role,
    pub n_trades: u32,
    pub endpoints: Endpoints,
    pub credentials: Credentials,
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,
    /// Fixed RNG seed for reproducible datasets; entropy-seeded when None.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub trades_submitted: u32,
    pub cargoes_submitted: u32,
    pub failures: u32,
}

/// Runs the whole pipeline: token, platform context, then the
/// generate-and-submit loop. Submission failures are logged and counted
/// but never abort the loop; an empty counterparty set ends the run
/// before it starts, with nothing submitted.
pub fn run_seed(options: &SeedOptions) -> Result<SeedReport, String> {
    let client = build_client(options.timeout_secs, options.accept_invalid_certs)?;
    let tokens = TokenClient::new(client.clone(), options.endpoints.token_url.clone());
    let registry = RegistryClient::new(
        client.clone(),
        options.endpoints.profile_url.clone(),
        options.endpoints.counterparties_url.clone(),
    );
    let movements = MovementClient::new(
        client,
        options.endpoints.trades_url.clone(),
        options.endpoints.movements_url.clone(),
    );

    let token = tokens.fetch_token(&options.credentials)?;
    let company_id = registry.own_company(&token)?;
    let counterparty_ids = registry.trading_counterparties(&token)?;
    tracing::info!(
        company_id = %company_id,
        counterparties = counterparty_ids.len(),
        "platform context loaded"
    );

    if counterparty_ids.is_empty() {
        println!("no trading counterparties available, nothing to seed");
        return Ok(SeedReport::default());
    }

    let generator = PairGenerator::new(options.role, company_id, counterparty_ids)?;
    let mut rng: StdRng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = SeedReport::default();
    for iteration in 1..=options.n_trades {
        let (trade, cargo) = generator.next_pair(&mut rng);

        match movements.submit_trade(&token, &trade) {
            Ok(()) => report.trades_submitted += 1,
            Err(err) => {
                report.failures += 1;
                tracing::warn!(vakt_id = %trade.vakt_id, "{err}");
            }
        }
        match movements.submit_cargo(&token, &cargo) {
            Ok(()) => report.cargoes_submitted += 1,
            Err(err) => {
                report.failures += 1;
                tracing::warn!(vakt_id = %cargo.vakt_id, "{err}");
            }
        }

        println!(
            "seed iteration={} vakt_id={} price={} quantity={}",
            iteration, trade.vakt_id, trade.price, trade.quantity
        );
    }

    println!(
        "seed complete: role={} trades={} cargoes={} failures={}",
        generator.role().as_str(),
        report.trades_submitted,
        report.cargoes_submitted,
        report.failures
    );
    Ok(report)
}
