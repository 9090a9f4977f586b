use std::collections::BTreeMap;

use crate::core::{Account, AccountId, Ledger};
use crate::error::LedgerResult;

/// Trusted back-office view over a [`Ledger`]. Holds no data of its own.
pub struct Admin<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> Admin<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    pub fn create_account(
        &mut self,
        name: &str,
        email: &str,
        address: &str,
        account_type: &str,
    ) -> LedgerResult<AccountId> {
        self.ledger
            .create_account(name, email, address, account_type)
    }

    /// Deletes the account permanently.
    ///
    /// The bank-wide totals are left as they were: removing a record is an
    /// administrative action, not a financial one.
    pub fn delete_account(&mut self, id: AccountId) -> LedgerResult<Account> {
        self.ledger.remove_account(id)
    }

    /// Full, unredacted copy of every account keyed by id.
    pub fn list_accounts(&self) -> BTreeMap<AccountId, Account> {
        self.ledger
            .accounts()
            .map(|account| (account.id, account.clone()))
            .collect()
    }

    pub fn total_balance(&self) -> i64 {
        self.ledger.total_balance()
    }

    pub fn total_loan_amount(&self) -> i64 {
        self.ledger.total_loan_amount()
    }

    pub fn set_loan_feature_enabled(&mut self, enabled: bool) {
        self.ledger.set_loan_feature_enabled(enabled);
    }
}
