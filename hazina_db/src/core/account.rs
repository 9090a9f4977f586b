use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::event::TransactionEvent;
use crate::error::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Savings,
    Current,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Exact match only, "savings" is rejected.
impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Savings" => Ok(AccountType::Savings),
            "Current" => Ok(AccountType::Current),
            other => Err(LedgerError::InvalidAccountType(other.to_string())),
        }
    }
}

/// A customer account as held by the [`Ledger`](crate::Ledger).
///
/// Callers only ever see shared references or clones, so the stored balance
/// and history can only change through ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub account_type: AccountType,
    pub balance: i64,
    pub history: Vec<TransactionEvent>,
    pub loans_taken: u32,
}

impl Account {
    pub fn new(
        id: AccountId,
        name: &str,
        email: &str,
        address: &str,
        account_type: AccountType,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            address: address.to_owned(),
            account_type,
            balance: 0,
            history: Vec::new(),
            loans_taken: 0,
        }
    }

    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }
}
