//! Drives a whole simulation run against the processor and renders the
//! final report. Kept in the library so the integration tests can run it
//! against an in-memory output.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::account::Account;
use crate::generator::{AccountGenerator, GeneratorConfig};
use crate::processor::{
    TransactionProcessError, TransactionProcessor,
    in_memory_processor::InMemoryTransactionProcessor,
};
use csv_printer::{AccountSummary, print_accounts};
pub mod csv_printer;

/// Bounds for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub seed: u64,
    /// Current date. Opening dates are generated relative to it and
    /// validated against it.
    pub today: NaiveDate,
    pub account_count: u32,
    pub transactions_per_account: u32,
    pub generator: GeneratorConfig,
}

pub struct Service<'w, W: 'w> {
    pub config: SimulationConfig,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, TransactionProcessError)>,
}

impl<'w, W> Service<'w, W>
where
    W: Write + 'w,
{
    /// Runs the whole simulation: open accounts, apply random
    /// transactions, run pairwise transfers, print the final report.
    ///
    /// Rejected operations go through `error_printer` with their step
    /// number; a rejection never aborts the run.
    pub fn run(mut self) -> Result<()> {
        let mut generator = AccountGenerator::new(
            self.config.seed,
            self.config.today,
            self.config.generator.clone(),
        );
        let mut processor = InMemoryTransactionProcessor::new(self.config.today);
        let mut step = 0u64;

        info!(accounts = self.config.account_count, "opening accounts");
        for profile in generator.generate_profiles(self.config.account_count) {
            step += 1;
            if let Err(err) = processor.open_account(
                profile.id,
                profile.holder_name,
                profile.kind,
                profile.opened_on,
                profile.initial_balance,
            ) {
                (self.error_printer)(step, err);
            }
        }

        let mut ids: Vec<_> = processor.accounts.keys().copied().collect();
        ids.sort_unstable();

        info!(
            per_account = self.config.transactions_per_account,
            "applying random transactions"
        );
        for &id in &ids {
            for _ in 0..self.config.transactions_per_account {
                step += 1;
                let (action, amount) = generator.random_transaction();
                if let Err(err) = processor.process_transaction(id, action, amount) {
                    (self.error_printer)(step, err);
                }
            }
        }

        info!("running pairwise transfers");
        for &from in &ids {
            for &to in &ids {
                if from == to {
                    continue;
                }
                step += 1;
                let balance = processor
                    .accounts
                    .get(&from)
                    .map(Account::balance)
                    .unwrap_or_default();
                let amount = generator.random_amount_up_to(balance);
                if let Err(err) = processor.process_transfer(from, to, amount) {
                    (self.error_printer)(step, err);
                }
            }
        }

        let mut accounts: Vec<_> = processor.accounts.values().collect();
        accounts.sort_unstable_by_key(|acc| acc.id());
        print_accounts(
            self.output,
            accounts.into_iter().map(|acc| AccountSummary {
                id: acc.id(),
                holder: acc.holder_name().to_owned(),
                kind: acc.kind(),
                opened: acc.opened_on(),
                balance: acc.balance(),
            }),
        )
    }
}
