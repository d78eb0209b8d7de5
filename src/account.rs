use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::command::{OpenAccountCommand, TransactionAction, TransactionCommand};

pub type AccountId = u32;

/// Decimal places every monetary amount is kept at.
pub const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Business,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "checking"),
            AccountKind::Savings => write!(f, "savings"),
            AccountKind::Business => write!(f, "business"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Credited,
    Debited,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds: tried to debit {requested}, only {available} available")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    kind: AccountKind,
    opened_on: NaiveDate,
    balance: Decimal,
}

impl Account {
    /// Opens an account from an already validated command.
    pub fn open(command: OpenAccountCommand) -> Self {
        Self {
            id: command.id,
            holder_name: command.holder_name,
            kind: command.kind,
            opened_on: command.opened_on,
            balance: command.initial_balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
        }
    }

    /// Validates a credit or debit against the current balance.
    /// Does not mutate; the returned event is applied with [`Self::apply`].
    pub fn handle_transaction(
        &self,
        command: TransactionCommand,
    ) -> Result<AccountEvent, AccountError> {
        match command.action {
            TransactionAction::Credit => Ok(AccountEvent {
                amount: command.amount,
                kind: AccountEventKind::Credited,
            }),
            TransactionAction::Debit => {
                if self.balance >= command.amount {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Debited,
                    })
                } else {
                    Err(AccountError::InsufficientFunds {
                        requested: command.amount,
                        available: self.balance,
                    })
                }
            }
        }
    }
}
