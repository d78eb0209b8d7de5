use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{AccountId, AccountKind, MONEY_SCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Credit,
    Debit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Amount must not be negative for {action:?} (got {amount})")]
    NegativeAmount {
        action: TransactionAction,
        amount: Decimal,
    },
    #[error("Initial balance must not be negative (got {amount})")]
    NegativeInitialBalance { amount: Decimal },
    #[error("Holder name must not be empty")]
    EmptyHolderName,
    #[error("Opened date {date} lies in the future")]
    FutureOpenedDate { date: NaiveDate },
    #[error("Transfer source and destination are the same account ({account})")]
    SelfTransfer { account: AccountId },
}

#[derive(Debug, Clone)]
pub struct OpenAccountCommand {
    pub id: AccountId,
    pub holder_name: String,
    pub kind: AccountKind,
    pub opened_on: NaiveDate,
    pub initial_balance: Decimal,
}

impl OpenAccountCommand {
    /// `today` is supplied by the caller, so validation never reads the
    /// system clock.
    pub fn new(
        id: AccountId,
        holder_name: String,
        kind: AccountKind,
        opened_on: NaiveDate,
        initial_balance: Decimal,
        today: NaiveDate,
    ) -> Result<Self, CommandError> {
        if holder_name.trim().is_empty() {
            return Err(CommandError::EmptyHolderName);
        }
        if opened_on > today {
            return Err(CommandError::FutureOpenedDate { date: opened_on });
        }
        let initial_balance = initial_balance.round_dp(MONEY_SCALE);
        if initial_balance < Decimal::ZERO {
            return Err(CommandError::NegativeInitialBalance {
                amount: initial_balance,
            });
        }
        Ok(Self {
            id,
            holder_name,
            kind,
            opened_on,
            initial_balance,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TransactionCommand {
    pub action: TransactionAction,
    pub amount: Decimal,
}

impl TransactionCommand {
    pub fn new(action: TransactionAction, amount: Decimal) -> Result<Self, CommandError> {
        // amounts are compared at two decimals, so round before validating
        let amount = amount.round_dp(MONEY_SCALE);
        if amount < Decimal::ZERO {
            return Err(CommandError::NegativeAmount { action, amount });
        }
        Ok(Self { action, amount })
    }

    pub fn credit(amount: Decimal) -> Result<Self, CommandError> {
        Self::new(TransactionAction::Credit, amount)
    }

    pub fn debit(amount: Decimal) -> Result<Self, CommandError> {
        Self::new(TransactionAction::Debit, amount)
    }
}

#[derive(Debug, Clone)]
pub struct TransferCommand {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Decimal,
}

impl TransferCommand {
    pub fn new(from: AccountId, to: AccountId, amount: Decimal) -> Result<Self, CommandError> {
        if from == to {
            return Err(CommandError::SelfTransfer { account: from });
        }
        let amount = amount.round_dp(MONEY_SCALE);
        if amount < Decimal::ZERO {
            // a transfer is enacted as a debit on the source
            return Err(CommandError::NegativeAmount {
                action: TransactionAction::Debit,
                amount,
            });
        }
        Ok(Self { from, to, amount })
    }
}
