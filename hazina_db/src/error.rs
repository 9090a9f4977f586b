use thiserror::Error;

use crate::core::AccountId;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {0} does not exist")]
    AccountNotFound(AccountId),

    #[error("Invalid account type '{0}', expected Savings or Current")]
    InvalidAccountType(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { available: i64, requested: i64 },

    #[error("Loan limit of {limit} reached")]
    LoanLimitReached { limit: u32 },

    #[error("Loan feature is currently disabled")]
    LoanFeatureDisabled,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_loans_per_account must be at least 1, got {0}")]
    InvalidLoanLimit(u32),
}
