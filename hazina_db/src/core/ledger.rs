use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::account::{Account, AccountId, AccountType};
use super::event::TransactionEvent;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};

/// In-memory bank ledger: every account plus the bank-wide counters.
///
/// Each operation validates first and mutates last, so a failed call leaves
/// the ledger exactly as it was.
#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: BTreeMap<AccountId, Account>,
    next_account_id: u64,
    total_balance: i64,
    total_loan_amount: i64,
    config: LedgerConfig,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_account_id: 1,
            total_balance: 0,
            total_loan_amount: 0,
            config,
        }
    }

    pub fn loan_feature_enabled(&self) -> bool {
        self.config.loan_feature_enabled
    }

    pub fn set_loan_feature_enabled(&mut self, enabled: bool) {
        info!(enabled, "loan feature toggled");
        self.config.loan_feature_enabled = enabled;
    }

    pub fn create_account(
        &mut self,
        name: &str,
        email: &str,
        address: &str,
        account_type: &str,
    ) -> LedgerResult<AccountId> {
        let account_type = match account_type.parse::<AccountType>() {
            Ok(account_type) => account_type,
            Err(e) => return reject("create_account", e),
        };

        let id = AccountId::new(self.next_account_id);
        self.next_account_id += 1;

        self.accounts
            .insert(id, Account::new(id, name, email, address, account_type));

        info!(account = %id, %account_type, "account created");
        Ok(id)
    }

    pub fn deposit(&mut self, id: AccountId, amount: i64) -> LedgerResult<()> {
        let account = match self.accounts.get_mut(&id) {
            Some(account) => account,
            None => return reject("deposit", LedgerError::AccountNotFound(id)),
        };

        if amount <= 0 {
            return reject("deposit", LedgerError::InvalidAmount(amount));
        }

        let (Some(balance), Some(total)) = (
            account.balance.checked_add(amount),
            self.total_balance.checked_add(amount),
        ) else {
            return reject("deposit", LedgerError::InvalidAmount(amount));
        };

        account.balance = balance;
        account.history.push(TransactionEvent::Deposited { amount });
        self.total_balance = total;

        info!(account = %id, amount, balance, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, id: AccountId, amount: i64) -> LedgerResult<()> {
        let account = match self.accounts.get_mut(&id) {
            Some(account) => account,
            None => return reject("withdraw", LedgerError::AccountNotFound(id)),
        };

        if amount <= 0 {
            return reject("withdraw", LedgerError::InvalidAmount(amount));
        }

        if account.balance < amount {
            return reject(
                "withdraw",
                LedgerError::InsufficientFunds {
                    available: account.balance,
                    requested: amount,
                },
            );
        }

        let Some(total) = self.total_balance.checked_sub(amount) else {
            return reject("withdraw", LedgerError::InvalidAmount(amount));
        };

        account.balance -= amount;
        account.history.push(TransactionEvent::Withdrew { amount });
        self.total_balance = total;

        info!(account = %id, amount, balance = account.balance, "withdrawal applied");
        Ok(())
    }

    pub fn check_balance(&self, id: AccountId) -> LedgerResult<i64> {
        let account = self.get(id, "check_balance")?;
        debug!(account = %id, balance = account.balance, "balance inquiry");
        Ok(account.balance)
    }

    /// Returns a copy of the account's history, oldest entry first.
    pub fn view_history(&self, id: AccountId) -> LedgerResult<Vec<TransactionEvent>> {
        let account = self.get(id, "view_history")?;
        debug!(account = %id, entries = account.history.len(), "history inquiry");
        Ok(account.history.clone())
    }

    /// Grants a loan. The limit is checked before the feature switch, and the
    /// amount itself is not validated.
    pub fn apply_for_loan(&mut self, id: AccountId, amount: i64) -> LedgerResult<()> {
        let limit = self.config.max_loans_per_account;
        let enabled = self.config.loan_feature_enabled;

        let account = match self.accounts.get_mut(&id) {
            Some(account) => account,
            None => return reject("apply_for_loan", LedgerError::AccountNotFound(id)),
        };

        if account.loans_taken >= limit {
            return reject("apply_for_loan", LedgerError::LoanLimitReached { limit });
        }

        if !enabled {
            return reject("apply_for_loan", LedgerError::LoanFeatureDisabled);
        }

        let (Some(balance), Some(total)) = (
            account.balance.checked_add(amount),
            self.total_loan_amount.checked_add(amount),
        ) else {
            return reject("apply_for_loan", LedgerError::InvalidAmount(amount));
        };

        account.balance = balance;
        account.history.push(TransactionEvent::LoanTaken { amount });
        account.loans_taken += 1;
        self.total_loan_amount = total;

        info!(
            account = %id,
            amount,
            loans_taken = account.loans_taken,
            "loan granted"
        );
        Ok(())
    }

    /// Moves `amount` from `sender` to `receiver`. The bank-wide balance does
    /// not change. Sending to the same account is accepted and only adds the
    /// two history entries.
    pub fn transfer(
        &mut self,
        sender: AccountId,
        receiver: AccountId,
        amount: i64,
    ) -> LedgerResult<()> {
        let sender_balance = self.get(sender, "transfer")?.balance;
        let receiver_balance = self.get(receiver, "transfer")?.balance;

        if amount <= 0 {
            return reject("transfer", LedgerError::InvalidAmount(amount));
        }

        if sender_balance < amount {
            return reject(
                "transfer",
                LedgerError::InsufficientFunds {
                    available: sender_balance,
                    requested: amount,
                },
            );
        }

        if sender != receiver && receiver_balance.checked_add(amount).is_none() {
            return reject("transfer", LedgerError::InvalidAmount(amount));
        }

        self.get_mut(sender)?.balance -= amount;
        self.get_mut(receiver)?.balance += amount;

        self.get_mut(sender)?
            .history
            .push(TransactionEvent::TransferredOut { amount, to: receiver });
        self.get_mut(receiver)?
            .history
            .push(TransactionEvent::TransferredIn { amount, from: sender });

        info!(from = %sender, to = %receiver, amount, "transfer applied");
        Ok(())
    }

    /// Removes the account record. The id is never handed out again and the
    /// bank-wide counters keep the removed account's contribution.
    pub(crate) fn remove_account(&mut self, id: AccountId) -> LedgerResult<Account> {
        match self.accounts.remove(&id) {
            Some(account) => {
                info!(account = %id, balance = account.balance, "account deleted");
                Ok(account)
            }
            None => reject("delete_account", LedgerError::AccountNotFound(id)),
        }
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Accounts in ascending id order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn total_balance(&self) -> i64 {
        self.total_balance
    }

    pub fn total_loan_amount(&self) -> i64 {
        self.total_loan_amount
    }

    fn get(&self, id: AccountId, operation: &str) -> LedgerResult<&Account> {
        match self.accounts.get(&id) {
            Some(account) => Ok(account),
            None => reject(operation, LedgerError::AccountNotFound(id)),
        }
    }

    fn get_mut(&mut self, id: AccountId) -> LedgerResult<&mut Account> {
        self.accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn reject<T>(operation: &str, error: LedgerError) -> LedgerResult<T> {
    warn!(operation, %error, "operation rejected");
    Err(error)
}
