pub mod account;
pub mod event;
pub mod ledger;

pub use account::{Account, AccountId, AccountType};
pub use event::TransactionEvent;
pub use ledger::Ledger;
