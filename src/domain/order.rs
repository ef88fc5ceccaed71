use std::fmt;
use std::rc::Rc;

use crate::{common::money::Money, domain::catalog::CatalogEntry};

pub type OrderId = u32;

/// One customer order: the catalog entries picked for it, in the order they were picked.
///
/// Records are created by [`Ledger::begin_order`](crate::domain::ledger::Ledger::begin_order)
/// and only grow while the order is being taken. Once handed back to
/// [`Ledger::commit_order`](crate::domain::ledger::Ledger::commit_order) they are either
/// stored read-only or dropped.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    order_id: OrderId,
    line_items: Vec<Rc<CatalogEntry>>,
}

impl OrderRecord {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            line_items: Vec::new(),
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Appends a line. Ordering the same entry twice yields two lines.
    pub fn add_line(&mut self, entry: Rc<CatalogEntry>) {
        self.line_items.push(entry);
    }

    pub fn line_items(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.line_items.iter().map(Rc::as_ref)
    }

    /// Sum of line prices, recomputed on every call.
    pub fn total(&self) -> Money {
        self.line_items.iter().map(|entry| entry.price()).sum()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order ID: {}", self.order_id)?;
        writeln!(f, "Items:")?;
        for entry in self.line_items() {
            writeln!(f, "- {} (${})", entry.name(), entry.price())?;
        }
        write!(f, "Total: ${}", self.total())
    }
}
