use std::fmt;

use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// One entry of an account's transaction history.
///
/// Kept structured so the ledger never formats text itself; `Display` gives
/// the human readable line shown to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionEvent {
    Deposited { amount: i64 },
    Withdrew { amount: i64 },
    LoanTaken { amount: i64 },
    TransferredOut { amount: i64, to: AccountId },
    TransferredIn { amount: i64, from: AccountId },
}

impl TransactionEvent {
    pub fn amount(&self) -> i64 {
        match self {
            TransactionEvent::Deposited { amount }
            | TransactionEvent::Withdrew { amount }
            | TransactionEvent::LoanTaken { amount }
            | TransactionEvent::TransferredOut { amount, .. }
            | TransactionEvent::TransferredIn { amount, .. } => *amount,
        }
    }

    pub fn counterparty(&self) -> Option<AccountId> {
        match self {
            TransactionEvent::TransferredOut { to, .. } => Some(*to),
            TransactionEvent::TransferredIn { from, .. } => Some(*from),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionEvent::Deposited { amount } => write!(f, "Deposited {}", amount),
            TransactionEvent::Withdrew { amount } => write!(f, "Withdrew {}", amount),
            TransactionEvent::LoanTaken { amount } => write!(f, "Loan taken: {}", amount),
            TransactionEvent::TransferredOut { amount, to } => {
                write!(f, "Transferred {} to account {}", amount, to)
            }
            TransactionEvent::TransferredIn { amount, from } => {
                write!(f, "Received {} from account {}", amount, from)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines() {
        let to = AccountId::new(2);
        let from = AccountId::new(1);

        assert_eq!(
            TransactionEvent::Deposited { amount: 100 }.to_string(),
            "Deposited 100"
        );
        assert_eq!(
            TransactionEvent::Withdrew { amount: 40 }.to_string(),
            "Withdrew 40"
        );
        assert_eq!(
            TransactionEvent::LoanTaken { amount: 500 }.to_string(),
            "Loan taken: 500"
        );
        assert_eq!(
            TransactionEvent::TransferredOut { amount: 600, to }.to_string(),
            "Transferred 600 to account 2"
        );
        assert_eq!(
            TransactionEvent::TransferredIn { amount: 600, from }.to_string(),
            "Received 600 from account 1"
        );
    }

    #[test]
    fn test_counterparty() {
        let event = TransactionEvent::TransferredIn {
            amount: 5,
            from: AccountId::new(3),
        };
        assert_eq!(event.counterparty(), Some(AccountId::new(3)));
        assert_eq!(event.amount(), 5);
        assert_eq!(TransactionEvent::Deposited { amount: 1 }.counterparty(), None);
    }
}
