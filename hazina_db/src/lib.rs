#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]

pub mod admin;
pub mod config;
pub mod core;
pub mod error;
pub mod shared;

pub use admin::Admin;
pub use config::LedgerConfig;
pub use core::{Account, AccountId, AccountType, Ledger, TransactionEvent};
pub use error::{ConfigError, LedgerError, LedgerResult};
pub use shared::SharedLedger;
