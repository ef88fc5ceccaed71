use crate::common::money::Money;

/// One step of an order script, sent from the reader to the worker.
#[derive(Debug)]
pub enum LedgerEvent {
    RegisterById { id: u32, name: String, price: Money },
    RegisterByName { key: String, name: String, price: Money },
    Item { id: u32 },
}
