//! Customer-facing text for ledger outcomes.

use hazina_db::{AccountId, LedgerError, TransactionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewHistory,
    Loan,
    Transfer,
    DeleteAccount,
}

pub fn failure(operation: Operation, error: &LedgerError) -> String {
    match error {
        LedgerError::AccountNotFound(_) => "Account does not exist.".to_string(),
        LedgerError::InvalidAccountType(_) => {
            "Invalid account type. Choose either Savings or Current.".to_string()
        }
        LedgerError::InvalidAmount(_) => match operation {
            Operation::Deposit => "Invalid deposit amount.".to_string(),
            Operation::Withdraw => "Invalid withdrawal amount.".to_string(),
            Operation::Transfer => "Invalid transfer amount.".to_string(),
            Operation::Loan => "Invalid loan amount.".to_string(),
            _ => error.to_string(),
        },
        LedgerError::InsufficientFunds { .. } => match operation {
            Operation::Transfer => "Insufficient balance for the transfer.".to_string(),
            _ => "Withdrawal amount exceeded.".to_string(),
        },
        LedgerError::LoanLimitReached { .. } => {
            "You have already taken the maximum number of loans.".to_string()
        }
        LedgerError::LoanFeatureDisabled => "Loan feature is currently disabled.".to_string(),
    }
}

pub fn account_created(id: AccountId) -> String {
    format!("Account created successfully. Your account number is {}", id)
}

pub fn deposited(amount: i64) -> String {
    format!("Deposit of {} was successful.", amount)
}

pub fn withdrew(amount: i64) -> String {
    format!("Withdrawal of {} was successful.", amount)
}

pub fn balance(balance: i64) -> String {
    format!("Available balance: {}", balance)
}

pub fn loan_granted(amount: i64) -> String {
    format!("Loan of {} was granted.", amount)
}

pub fn transferred(amount: i64) -> String {
    format!("Transfer of {} was successful.", amount)
}

pub fn deleted(id: AccountId) -> String {
    format!("Account {} Deleted.", id)
}

pub fn total_balance(total: i64) -> String {
    format!("Total bank balance: {}", total)
}

pub fn total_loan_amount(total: i64) -> String {
    format!("Total loan amount: {}", total)
}

/// `['Deposited 100', 'Withdrew 40']`
pub fn history(events: &[TransactionEvent]) -> String {
    let entries = events
        .iter()
        .map(|event| format!("'{}'", event))
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{}]", entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_failures_depend_on_operation() {
        let err = LedgerError::InvalidAmount(0);
        assert_eq!(failure(Operation::Deposit, &err), "Invalid deposit amount.");
        assert_eq!(
            failure(Operation::Withdraw, &err),
            "Invalid withdrawal amount."
        );
        assert_eq!(failure(Operation::Transfer, &err), "Invalid transfer amount.");

        let err = LedgerError::InsufficientFunds {
            available: 1,
            requested: 2,
        };
        assert_eq!(
            failure(Operation::Withdraw, &err),
            "Withdrawal amount exceeded."
        );
        assert_eq!(
            failure(Operation::Transfer, &err),
            "Insufficient balance for the transfer."
        );
    }

    #[test]
    fn test_history() {
        assert_eq!(history(&[]), "[]");
        assert_eq!(
            history(&[
                TransactionEvent::Deposited { amount: 100 },
                TransactionEvent::TransferredOut {
                    amount: 20,
                    to: AccountId::new(2)
                },
            ]),
            "['Deposited 100', 'Transferred 20 to account 2']"
        );
    }
}
