use crate::common::money::Money;

/// A named, priced menu item. Immutable once built; the ledger shares it behind an `Rc`
/// between its indices and every order line that references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}
