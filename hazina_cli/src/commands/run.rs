use anyhow::Result;
use hazina_db::Ledger;
use std::io;

use crate::config::Config;
use crate::menu::Menu;

pub fn run(config: Config, disable_loans: bool) -> Result<()> {
    let mut settings = config.ledger;
    if disable_loans {
        settings.loan_feature_enabled = false;
    }

    tracing::info!(
        loans = settings.loan_feature_enabled,
        max_loans = settings.max_loans_per_account,
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), Ledger::with_config(settings));
    menu.run()?;

    let ledger = menu.ledger();
    tracing::info!(
        accounts = ledger.len(),
        total_balance = ledger.total_balance(),
        total_loans = ledger.total_loan_amount(),
        "session ended"
    );
    Ok(())
}
