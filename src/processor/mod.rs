use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountId, AccountKind},
    command::{CommandError, TransactionAction},
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum TransactionProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("No account with id {0}")]
    UnknownAccount(AccountId),
    #[error("An account with id {0} already exists")]
    DuplicateAccount(AccountId),
}

pub trait TransactionProcessor {
    fn open_account(
        &mut self,
        id: AccountId,
        holder_name: String,
        kind: AccountKind,
        opened_on: NaiveDate,
        initial_balance: Decimal,
    ) -> Result<(), TransactionProcessError>;

    fn process_transaction(
        &mut self,
        account_id: AccountId,
        action: TransactionAction,
        amount: Decimal,
    ) -> Result<(), TransactionProcessError>;

    fn process_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), TransactionProcessError>;
}
