//! Synthetic account and transaction generation.

use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::account::{AccountId, AccountKind, MONEY_SCALE};
use crate::command::TransactionAction;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Grace", "Edsger", "Barbara", "Donald", "Margaret", "John", "Radia", "Niklaus",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Hopper", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Backus",
    "Perlman", "Wirth",
];

/// Bounds for the generated data.
///
/// Monetary bounds are expressed in cents, so every drawn amount is exact
/// at two decimals.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Upper bound for generated opening balances, in cents.
    pub max_initial_balance_cents: i64,
    /// Upper bound for generated credit/debit amounts, in cents.
    pub max_transaction_amount_cents: i64,
    /// How far in the past an account may have been opened, in days.
    pub history_days: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_initial_balance_cents: 1_000_000,
            max_transaction_amount_cents: 50_000,
            history_days: 3_650,
        }
    }
}

/// Raw construction data for one account, as drawn by [`AccountGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub id: AccountId,
    pub holder_name: String,
    pub kind: AccountKind,
    pub opened_on: NaiveDate,
    pub initial_balance: Decimal,
}

/// Generator for synthetic accounts and transaction amounts.
///
/// All randomness comes from a single seeded rng, so two generators built
/// with the same seed and `today` produce identical data.
pub struct AccountGenerator {
    rng: SmallRng,
    config: GeneratorConfig,
    today: NaiveDate,
    next_id: AccountId,
}

impl AccountGenerator {
    pub fn new(seed: u64, today: NaiveDate, config: GeneratorConfig) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            config,
            today,
            next_id: 1,
        }
    }

    pub fn generate_profiles(&mut self, count: u32) -> Vec<AccountProfile> {
        (0..count).map(|_| self.generate_profile()).collect()
    }

    pub fn generate_profile(&mut self) -> AccountProfile {
        let id = self.next_id;
        self.next_id += 1;

        let holder_name = format!(
            "{} {}",
            FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())],
        );

        // kind distribution: 60% checking, 30% savings, 10% business
        let roll: f32 = self.rng.r#gen();
        let kind = if roll < 0.60 {
            AccountKind::Checking
        } else if roll < 0.90 {
            AccountKind::Savings
        } else {
            AccountKind::Business
        };

        // opened some random day within the configured window, never in
        // the future
        let back = self.rng.gen_range(0..=self.config.history_days);
        let opened_on = self
            .today
            .checked_sub_days(Days::new(back))
            .unwrap_or(self.today);

        AccountProfile {
            id,
            holder_name,
            kind,
            opened_on,
            initial_balance: self.random_cents(self.config.max_initial_balance_cents),
        }
    }

    /// Draws a credit or debit with an amount within the configured bound.
    pub fn random_transaction(&mut self) -> (TransactionAction, Decimal) {
        let action = if self.rng.r#gen::<bool>() {
            TransactionAction::Credit
        } else {
            TransactionAction::Debit
        };
        (
            action,
            self.random_cents(self.config.max_transaction_amount_cents),
        )
    }

    /// Uniform two-decimal amount in `[0, limit]`, used for transfer
    /// amounts so transfers of exactly 0 and of the whole balance occur.
    pub fn random_amount_up_to(&mut self, limit: Decimal) -> Decimal {
        let limit_cents = (limit * Decimal::from(100)).to_i64().unwrap_or(0);
        self.random_cents(limit_cents)
    }

    fn random_cents(&mut self, max_cents: i64) -> Decimal {
        Decimal::new(self.rng.gen_range(0..=max_cents.max(0)), MONEY_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn same_seed_same_accounts() {
        let mut a = AccountGenerator::new(42, today(), GeneratorConfig::default());
        let mut b = AccountGenerator::new(42, today(), GeneratorConfig::default());
        assert_eq!(a.generate_profiles(20), b.generate_profiles(20));
    }

    #[test]
    fn profiles_respect_configured_bounds() {
        let config = GeneratorConfig::default();
        let oldest = today()
            .checked_sub_days(Days::new(config.history_days))
            .unwrap();
        let max_balance = Decimal::new(config.max_initial_balance_cents, MONEY_SCALE);

        let mut generator = AccountGenerator::new(7, today(), config);
        for (i, profile) in generator.generate_profiles(200).iter().enumerate() {
            assert_eq!(profile.id, (i + 1) as AccountId);
            assert!(!profile.holder_name.trim().is_empty());
            assert!(profile.opened_on <= today());
            assert!(profile.opened_on >= oldest);
            assert!(profile.initial_balance >= Decimal::ZERO);
            assert!(profile.initial_balance <= max_balance);
            assert!(profile.initial_balance.scale() <= MONEY_SCALE);
        }
    }

    #[test]
    fn transfer_amounts_never_exceed_the_limit() {
        let mut generator = AccountGenerator::new(3, today(), GeneratorConfig::default());
        let limit = Decimal::new(12_345, MONEY_SCALE);
        for _ in 0..500 {
            let amount = generator.random_amount_up_to(limit);
            assert!(amount >= Decimal::ZERO);
            assert!(amount <= limit);
            assert!(amount.scale() <= MONEY_SCALE);
        }
    }

    #[test]
    fn kinds_are_distributed() {
        let mut generator = AccountGenerator::new(42, today(), GeneratorConfig::default());
        let profiles = generator.generate_profiles(300);
        let checking = profiles
            .iter()
            .filter(|p| p.kind == AccountKind::Checking)
            .count();
        // should be the majority kind
        assert!(checking > 100);
    }
}
