use anyhow::{Context, Result};
use hazina_db::{AccountId, Admin, Ledger};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::render::{self, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

enum Answer<T> {
    Value(T),
    Invalid,
    Closed,
}

/// Reads a number or leaves the current action early.
macro_rules! ask {
    ($menu:expr, $prompt:expr) => {
        match $menu.number($prompt)? {
            Answer::Value(value) => value,
            Answer::Invalid => {
                $menu.say("Invalid number.")?;
                return Ok(Flow::Continue);
            }
            Answer::Closed => return Ok(Flow::Exit),
        }
    };
}

macro_rules! ask_text {
    ($menu:expr, $prompt:expr) => {
        match $menu.line($prompt)? {
            Some(text) => text,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Account numbers are read as signed integers; anything below 1 can never
/// match an account, so it is looked up as id 0 and reported as missing.
fn account_number(raw: i64) -> AccountId {
    AccountId::new(u64::try_from(raw).unwrap_or(0))
}

/// Interactive User/Admin menu over any line source.
pub struct Menu<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, ledger: Ledger) -> Self {
        Self {
            input,
            output,
            ledger,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.say("Select an option:")?;
            self.say("1. User Options")?;
            self.say("2. Admin Options")?;
            self.say("3. Exit")?;

            let Some(choice) = self.line("Enter your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.user_options()?,
                "2" => self.admin_options()?,
                "3" => Flow::Exit,
                _ => {
                    self.say("Invalid choice. Please select again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        tracing::debug!(accounts = self.ledger.len(), "menu closed");
        Ok(())
    }

    fn user_options(&mut self) -> Result<Flow> {
        self.say("\nUser Options:")?;
        self.say("1. Create Account")?;
        self.say("2. Make a Deposit")?;
        self.say("3. Make a Withdrawal")?;
        self.say("4. Check Balance")?;
        self.say("5. View Transaction History")?;
        self.say("6. Apply for a Loan")?;
        self.say("7. Transfer Money")?;
        self.say("8. Exit")?;

        let choice = ask_text!(self, "Enter your choice: ");

        match choice.as_str() {
            "1" => {
                let name = ask_text!(self, "Enter your name: ");
                let email = ask_text!(self, "Enter your email: ");
                let address = ask_text!(self, "Enter your address: ");
                let account_type = ask_text!(self, "Enter account type (Savings or Current): ");
                let result = self
                    .ledger
                    .create_account(&name, &email, &address, &account_type);
                self.report(Operation::CreateAccount, result.map(render::account_created))?;
            }
            "2" => {
                let id = account_number(ask!(self, "Enter your account number: "));
                let amount: i64 = ask!(self, "Enter the amount to deposit: ");
                let result = self.ledger.deposit(id, amount);
                self.report(Operation::Deposit, result.map(|_| render::deposited(amount)))?;
            }
            "3" => {
                let id = account_number(ask!(self, "Enter your account number: "));
                let amount: i64 = ask!(self, "Enter the amount to withdraw: ");
                let result = self.ledger.withdraw(id, amount);
                self.report(Operation::Withdraw, result.map(|_| render::withdrew(amount)))?;
            }
            "4" => {
                let id = account_number(ask!(self, "Enter your account number: "));
                let result = self.ledger.check_balance(id);
                self.report(Operation::CheckBalance, result.map(render::balance))?;
            }
            "5" => {
                let id = account_number(ask!(self, "Enter your account number: "));
                let result = self.ledger.view_history(id);
                self.report(
                    Operation::ViewHistory,
                    result.map(|events| render::history(&events)),
                )?;
            }
            "6" => {
                let id = account_number(ask!(self, "Enter your account number: "));
                let amount: i64 = ask!(self, "Enter the loan amount: ");
                let result = self.ledger.apply_for_loan(id, amount);
                self.report(Operation::Loan, result.map(|_| render::loan_granted(amount)))?;
            }
            "7" => {
                let sender = account_number(ask!(self, "Enter your account number: "));
                let receiver = account_number(ask!(self, "Enter the receiver's account number: "));
                let amount: i64 = ask!(self, "Enter the amount to transfer: ");
                let result = self.ledger.transfer(sender, receiver, amount);
                self.report(
                    Operation::Transfer,
                    result.map(|_| render::transferred(amount)),
                )?;
            }
            "8" => return Ok(Flow::Exit),
            _ => {}
        }

        Ok(Flow::Continue)
    }

    fn admin_options(&mut self) -> Result<Flow> {
        self.say("\nAdmin Options:")?;
        self.say("1. Create Account")?;
        self.say("2. Delete Account")?;
        self.say("3. View All Accounts")?;
        self.say("4. Check Total Balance")?;
        self.say("5. Check Total Loan Amount")?;
        self.say("6. Exit")?;

        let choice = ask_text!(self, "Enter your choice: ");

        match choice.as_str() {
            "1" => {
                let name = ask_text!(self, "Enter user's name: ");
                let email = ask_text!(self, "Enter user's email: ");
                let address = ask_text!(self, "Enter user's address: ");
                let account_type = ask_text!(self, "Enter account type (Savings or Current): ");
                let result = Admin::new(&mut self.ledger).create_account(
                    &name,
                    &email,
                    &address,
                    &account_type,
                );
                self.report(Operation::CreateAccount, result.map(render::account_created))?;
            }
            "2" => {
                let id = account_number(ask!(self, "Enter the account number to delete: "));
                let result = Admin::new(&mut self.ledger).delete_account(id);
                self.report(Operation::DeleteAccount, result.map(|_| render::deleted(id)))?;
            }
            "3" => {
                let accounts = Admin::new(&mut self.ledger).list_accounts();
                let listing = serde_json::to_string_pretty(&accounts)
                    .context("Failed to render account listing")?;
                self.say(&listing)?;
            }
            "4" => {
                let total = Admin::new(&mut self.ledger).total_balance();
                self.say(&render::total_balance(total))?;
            }
            "5" => {
                let total = Admin::new(&mut self.ledger).total_loan_amount();
                self.say(&render::total_loan_amount(total))?;
            }
            "6" => return Ok(Flow::Exit),
            _ => {}
        }

        Ok(Flow::Continue)
    }

    fn report(
        &mut self,
        operation: Operation,
        result: hazina_db::LedgerResult<String>,
    ) -> Result<()> {
        let message = match result {
            Ok(message) => message,
            Err(e) => render::failure(operation, &e),
        };
        self.say(&message)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to output")
    }

    /// Prompts and reads one line; `None` once input is exhausted.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn number<T: FromStr>(&mut self, prompt: &str) -> Result<Answer<T>> {
        Ok(match self.line(prompt)? {
            Some(text) => match text.trim().parse::<T>() {
                Ok(value) => Answer::Value(value),
                Err(_) => Answer::Invalid,
            },
            None => Answer::Closed,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use std::io::Cursor;

    fn drive(script: &str) -> (Ledger, String) {
        let mut out = Vec::new();
        let mut menu = Menu::new(Cursor::new(script.to_string()), &mut out, Ledger::new());
        menu.run().expect("menu failed");
        let ledger = menu.ledger().clone();
        drop(menu);
        let output = String::from_utf8(out).expect("output is utf8");
        (ledger, output)
    }

    #[test]
    fn test_create_and_deposit() {
        let (ledger, output) = drive(
            "1\n1\nAlice\na@x.com\naddr\nSavings\n\
             1\n2\n1\n100\n\
             1\n3\n1\n150\n\
             1\n4\n1\n\
             1\n5\n1\n\
             3\n",
        );

        assert!(output.contains("Account created successfully. Your account number is 1"));
        assert!(output.contains("Deposit of 100 was successful."));
        assert!(output.contains("Withdrawal amount exceeded."));
        assert!(output.contains("Available balance: 100"));
        assert!(output.contains("['Deposited 100']"));
        assert_eq!(ledger.total_balance(), 100);
    }

    #[test]
    fn test_invalid_account_type() {
        let (ledger, output) = drive("1\n1\nBob\nb@x.com\naddr\nsavings\n3\n");

        assert!(output.contains("Invalid account type. Choose either Savings or Current."));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_loans_and_transfer() {
        let (ledger, output) = drive(
            "1\n1\nA\n\n\nSavings\n\
             1\n1\nB\n\n\nCurrent\n\
             1\n6\n1\n500\n\
             1\n6\n1\n5\n\
             1\n6\n1\n5\n\
             1\n7\n1\n2\n505\n\
             1\n7\n1\n2\n1\n\
             3\n",
        );

        assert!(output.contains("Loan of 500 was granted."));
        assert!(output.contains("You have already taken the maximum number of loans."));
        assert!(output.contains("Transfer of 505 was successful."));
        assert!(output.contains("Insufficient balance for the transfer."));
        assert_eq!(ledger.check_balance(AccountId::new(2)).unwrap(), 505);
    }

    #[test]
    fn test_admin_options() {
        let (ledger, output) = drive(
            "2\n1\nA\na@x.com\naddr\nCurrent\n\
             1\n2\n1\n70\n\
             2\n3\n\
             2\n2\n1\n\
             2\n2\n1\n\
             2\n4\n\
             2\n5\n\
             3\n",
        );

        assert!(output.contains("\"email\": \"a@x.com\""));
        assert!(output.contains("Account 1 Deleted."));
        assert!(output.contains("Account does not exist."));
        assert!(output.contains("Total bank balance: 70"));
        assert!(output.contains("Total loan amount: 0"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_choices_and_numbers() {
        let (_, output) = drive("9\n1\n2\nabc\n3\n");

        assert!(output.contains("Invalid choice. Please select again."));
        assert!(output.contains("Invalid number."));
    }

    #[test]
    fn test_negative_account_number_is_a_missing_account() {
        let (_, output) = drive(
            "1\n1\nA\n\n\nSavings\n\
             1\n2\n-1\n50\n\
             1\n4\n0\n\
             2\n2\n-3\n\
             3\n",
        );

        assert_eq!(output.matches("Account does not exist.").count(), 3);
        assert!(!output.contains("Invalid number."));
    }

    #[test]
    fn test_choices_match_exactly() {
        let (ledger, output) = drive(" 1\n1 \n3\n");

        assert_eq!(
            output.matches("Invalid choice. Please select again.").count(),
            2
        );
        assert!(!output.contains("User Options:"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_submenu_exit_ends_session() {
        let (ledger, output) = drive("1\n8\n1\n1\nA\n\n\nSavings\n");

        assert!(ledger.is_empty());
        assert!(!output.contains("Account created"));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (ledger, _) = drive("1\n2\n");
        assert!(ledger.is_empty());
    }
}
