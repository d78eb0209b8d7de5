use anyhow::{Context, Result};
use bank_sim::bin_utils::{Service, SimulationConfig};
use bank_sim::generator::GeneratorConfig;
use bank_sim::processor::TransactionProcessError;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    // optional seed argument; an entropy seed keeps runs varied, and
    // logging it keeps them reproducible
    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Expected an integer seed, got `{arg}`"))?,
        None => rand::random(),
    };
    tracing::info!(seed, "starting simulation");

    let service = Service {
        config: SimulationConfig {
            seed,
            today: Utc::now().date_naive(),
            account_count: 5,
            transactions_per_account: 10,
            generator: GeneratorConfig::default(),
        },
        output: &mut std::io::stdout(),
        error_printer: Box::new(|step, err| {
            match err {
                TransactionProcessError::AccountErr(err) => {
                    // rejected operations are expected in a randomized run
                    tracing::debug!(step, %err, "operation rejected");
                }
                err => eprintln!("Error at step {step}: {err}"),
            }
        }),
    };
    service.run()
}
