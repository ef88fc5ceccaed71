use tracing::warn;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{catalog::CatalogEntry, ledger::Ledger},
};

pub fn handle_by_id(ledger: &mut Ledger, id: u32, name: String, price: Money) {
    let result = ledger.register_by_id(id, CatalogEntry::new(name, price));
    report(result);
}

pub fn handle_by_name(ledger: &mut Ledger, key: String, name: String, price: Money) {
    let result = ledger.register_by_name(key, CatalogEntry::new(name, price));
    report(result);
}

// A refused entry is skipped; the rest of the script still runs.
fn report(result: Result<(), LedgerError>) {
    if let Err(e) = result {
        warn!(error = %e, "menu item skipped");
    }
}
