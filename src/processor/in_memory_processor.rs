use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId, AccountKind},
    command::{OpenAccountCommand, TransactionAction, TransactionCommand, TransferCommand},
};

use super::{TransactionProcessError, TransactionProcessor};

pub struct InMemoryTransactionProcessor {
    today: NaiveDate,
    pub accounts: HashMap<AccountId, Account>,
}

impl InMemoryTransactionProcessor {
    /// `today` bounds account opening dates. It is injected rather than
    /// read from the system clock, so runs stay reproducible under test.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            accounts: HashMap::new(),
        }
    }
}

impl TransactionProcessor for InMemoryTransactionProcessor {
    fn open_account(
        &mut self,
        id: AccountId,
        holder_name: String,
        kind: AccountKind,
        opened_on: NaiveDate,
        initial_balance: Decimal,
    ) -> Result<(), TransactionProcessError> {
        let command =
            OpenAccountCommand::new(id, holder_name, kind, opened_on, initial_balance, self.today)?;
        if self.accounts.contains_key(&id) {
            return Err(TransactionProcessError::DuplicateAccount(id));
        }
        self.accounts.insert(id, Account::open(command));
        Ok(())
    }

    fn process_transaction(
        &mut self,
        account_id: AccountId,
        action: TransactionAction,
        amount: Decimal,
    ) -> Result<(), TransactionProcessError> {
        let command = TransactionCommand::new(action, amount)?;
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(TransactionProcessError::UnknownAccount(account_id))?;
        let event = account.handle_transaction(command)?;
        account.apply(&event);
        Ok(())
    }

    fn process_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), TransactionProcessError> {
        let command = TransferCommand::new(from, to, amount)?;
        // self transfers were rejected above, so the keys are disjoint
        let [source, destination] = self.accounts.get_disjoint_mut([&command.from, &command.to]);
        let source = source.ok_or(TransactionProcessError::UnknownAccount(command.from))?;
        let destination = destination.ok_or(TransactionProcessError::UnknownAccount(command.to))?;

        // produce both events before applying either one, so a rejected
        // debit leaves the destination untouched
        let debit = source.handle_transaction(TransactionCommand::debit(command.amount)?)?;
        let credit = destination.handle_transaction(TransactionCommand::credit(command.amount)?)?;
        source.apply(&debit);
        destination.apply(&credit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::account::AccountError;
    use crate::command::CommandError;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn processor_with_accounts() -> InMemoryTransactionProcessor {
        let mut processor = InMemoryTransactionProcessor::new(today());
        processor
            .open_account(
                1,
                "Grace Hopper".to_string(),
                AccountKind::Checking,
                NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(),
                dec!(100.00),
            )
            .unwrap();
        processor
            .open_account(
                2,
                "Alan Turing".to_string(),
                AccountKind::Savings,
                NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
                dec!(20.00),
            )
            .unwrap();
        processor
    }

    #[test]
    fn open_and_transact() {
        let mut processor = processor_with_accounts();
        assert_eq!(processor.accounts.len(), 2);

        processor
            .process_transaction(1, TransactionAction::Credit, dec!(25.50))
            .unwrap();
        processor
            .process_transaction(1, TransactionAction::Debit, dec!(5.50))
            .unwrap();
        assert_eq!(processor.accounts[&1].balance(), dec!(120.00));
        // the other account is untouched
        assert_eq!(processor.accounts[&2].balance(), dec!(20.00));
    }

    #[test]
    fn rejects_duplicate_and_unknown_accounts() {
        let mut processor = processor_with_accounts();

        let err = processor
            .open_account(
                1,
                "Grace Hopper".to_string(),
                AccountKind::Business,
                today(),
                dec!(0),
            )
            .unwrap_err();
        assert!(matches!(err, TransactionProcessError::DuplicateAccount(1)));
        assert_eq!(processor.accounts.len(), 2);

        let err = processor
            .process_transaction(7, TransactionAction::Credit, dec!(1.00))
            .unwrap_err();
        assert!(matches!(err, TransactionProcessError::UnknownAccount(7)));

        let err = processor.process_transfer(1, 7, dec!(1.00)).unwrap_err();
        assert!(matches!(err, TransactionProcessError::UnknownAccount(7)));
        // the known source is untouched by the failed transfer
        assert_eq!(processor.accounts[&1].balance(), dec!(100.00));
    }

    #[test]
    fn transfer_moves_funds_between_accounts() {
        let mut processor = processor_with_accounts();
        processor.process_transfer(1, 2, dec!(40.00)).unwrap();
        assert_eq!(processor.accounts[&1].balance(), dec!(60.00));
        assert_eq!(processor.accounts[&2].balance(), dec!(60.00));
    }

    #[test]
    fn transfer_conserves_total_balance() {
        let mut processor = processor_with_accounts();
        let total_before: Decimal = processor.accounts.values().map(Account::balance).sum();
        processor.process_transfer(2, 1, dec!(19.99)).unwrap();
        let total_after: Decimal = processor.accounts.values().map(Account::balance).sum();
        assert_eq!(total_before, total_after);
    }

    #[test]
    fn rejected_transfer_leaves_both_balances_unchanged() {
        let mut processor = processor_with_accounts();

        // insufficient funds on the source
        let err = processor.process_transfer(2, 1, dec!(150.00)).unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::AccountErr(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(processor.accounts[&1].balance(), dec!(100.00));
        assert_eq!(processor.accounts[&2].balance(), dec!(20.00));

        // self transfer
        let err = processor.process_transfer(1, 1, dec!(10.00)).unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::CommandErr(CommandError::SelfTransfer { account: 1 })
        ));
        assert_eq!(processor.accounts[&1].balance(), dec!(100.00));

        // negative amount
        let err = processor.process_transfer(1, 2, dec!(-1.00)).unwrap_err();
        assert!(matches!(
            err,
            TransactionProcessError::CommandErr(CommandError::NegativeAmount { .. })
        ));
        assert_eq!(processor.accounts[&1].balance(), dec!(100.00));
        assert_eq!(processor.accounts[&2].balance(), dec!(20.00));
    }

    #[test]
    fn zero_amount_transfer_is_valid() {
        let mut processor = processor_with_accounts();
        processor.process_transfer(1, 2, Decimal::ZERO).unwrap();
        assert_eq!(processor.accounts[&1].balance(), dec!(100.00));
        assert_eq!(processor.accounts[&2].balance(), dec!(20.00));
    }

    #[test]
    fn transfer_of_entire_balance_empties_the_source() {
        let mut processor = processor_with_accounts();
        processor.process_transfer(2, 1, dec!(20.00)).unwrap();
        assert_eq!(processor.accounts[&2].balance(), Decimal::ZERO);
        assert_eq!(processor.accounts[&1].balance(), dec!(120.00));
    }
}
