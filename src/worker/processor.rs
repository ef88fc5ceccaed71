use crate::{
    common::event::LedgerEvent,
    domain::{establishment::Establishment, ledger::CommitOutcome, order::OrderRecord},
    worker::handlers::{item, menu},
};

/// Replays script events against an establishment, holding the one order currently being
/// taken between `item` rows.
#[derive(Debug, Default)]
pub struct Processor {
    open: Option<OrderRecord>,
}

impl Processor {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn has_open_order(&self) -> bool {
        self.open.is_some()
    }

    /// Returns the commit outcome when the event finished an order.
    pub fn process(
        &mut self,
        establishment: &mut dyn Establishment,
        event: LedgerEvent,
    ) -> Option<CommitOutcome> {
        let ledger = establishment.ledger_mut();
        match event {
            LedgerEvent::RegisterById { id, name, price } => {
                menu::handle_by_id(ledger, id, name, price);
                None
            }
            LedgerEvent::RegisterByName { key, name, price } => {
                menu::handle_by_name(ledger, key, name, price);
                None
            }
            LedgerEvent::Item { id } => item::handle(ledger, &mut self.open, id),
        }
    }

    /// Closes out an order left open at end of input, as if the finish sentinel had been read.
    pub fn finish(&mut self, establishment: &mut dyn Establishment) -> Option<CommitOutcome> {
        self.open
            .take()
            .map(|record| establishment.ledger_mut().commit_order(record))
    }
}
