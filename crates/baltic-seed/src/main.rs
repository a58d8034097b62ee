use baltic_domain::value_objects::role::Role;
use baltic_seed::seed::{run_seed, SeedOptions};
use baltic_seed::{config, endpoints, obs};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "baltic-seed")]
#[command(
    about = "Seed randomized trades and cargo movements into a test environment.",
    version
)]
#[command(
    after_help = "Examples:\n  baltic-seed local 10\n  baltic-seed --role seller --config seed.toml uat 25\n"
)]
struct Cli {
    /// Side of each trade filled with the caller's own company id.
    #[arg(long, short, value_enum, default_value_t = RoleArg::Buyer)]
    role: RoleArg,
    /// Target environment name, or "local"/"localhost".
    env: String,
    /// Number of trade/cargo pairs to submit.
    n_trades: u32,
    /// TOML file with an [auth] table (username, password, client_id).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Disable TLS certificate verification (local development only).
    #[arg(long, default_value_t = false)]
    insecure: bool,
    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Fixed RNG seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Log output format: text or json.
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoleArg {
    Buyer,
    Seller,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Buyer => Role::Buyer,
            RoleArg::Seller => Role::Seller,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    obs::init_tracing(&cli.log_level, &cli.log_format)?;

    let credentials = config::resolve_credentials(cli.config.as_deref())?;
    let endpoints = endpoints::resolve(&cli.env);
    tracing::info!(env = %cli.env, role = ?cli.role, n_trades = cli.n_trades, "seeding environment");

    let options = SeedOptions {
        role: cli.role.into(),
        n_trades: cli.n_trades,
        endpoints,
        credentials,
        timeout_secs: cli.timeout_secs,
        accept_invalid_certs: cli.insecure,
        rng_seed: cli.seed,
    };
    run_seed(&options).map(|_| ())
}
