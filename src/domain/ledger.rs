use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::{
    common::error::LedgerError,
    config::{LedgerConfig, PricePolicy},
    domain::{
        catalog::CatalogEntry,
        counter,
        establishment::Establishment,
        order::{OrderId, OrderRecord},
    },
};

/// Item id that ends order-taking instead of naming a menu item.
pub const FINISH_SENTINEL: u32 = 0;

/// Result of one attempt to add a line while an order is being taken.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Added(Rc<CatalogEntry>),
    Unknown(u32),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(OrderId),
    Discarded(OrderId),
}

/// A restaurant's books: the menu, indexed by number and by name, and every order placed.
///
/// The two menu indices are unrelated registries. Registering an item by id says nothing
/// about the name index and vice versa.
#[derive(Debug)]
pub struct Ledger {
    config: LedgerConfig,
    menu_by_id: BTreeMap<u32, Rc<CatalogEntry>>,
    menu_by_name: BTreeMap<String, Rc<CatalogEntry>>,
    history: BTreeMap<OrderId, OrderRecord>,
    next_order_id: OrderId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_config(LedgerConfig::default())
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            menu_by_id: BTreeMap::new(),
            menu_by_name: BTreeMap::new(),
            history: BTreeMap::new(),
            next_order_id: 1,
        }
    }

    /// Inserts or replaces the item registered under `id`. Last write wins.
    pub fn register_by_id(
        &mut self,
        id: u32,
        entry: impl Into<Rc<CatalogEntry>>,
    ) -> Result<(), LedgerError> {
        let entry = self.admit(entry.into())?;
        debug!(id, name = entry.name(), price = %entry.price(), "menu item registered by id");
        self.menu_by_id.insert(id, entry);
        Ok(())
    }

    /// Inserts or replaces the item registered under `key`. Last write wins.
    pub fn register_by_name(
        &mut self,
        key: impl Into<String>,
        entry: impl Into<Rc<CatalogEntry>>,
    ) -> Result<(), LedgerError> {
        let entry = self.admit(entry.into())?;
        let key = key.into();
        debug!(key = %key, name = entry.name(), price = %entry.price(), "menu item registered by name");
        self.menu_by_name.insert(key, entry);
        Ok(())
    }

    fn admit(&self, entry: Rc<CatalogEntry>) -> Result<Rc<CatalogEntry>, LedgerError> {
        if self.config.price_policy == PricePolicy::Strict {
            let reason = if entry.name().is_empty() {
                Some("empty name")
            } else if entry.price().is_negative() {
                Some("negative price")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(LedgerError::InvalidEntry {
                    name: entry.name().to_string(),
                    reason,
                });
            }
        }
        Ok(entry)
    }

    pub fn lookup_by_id(&self, id: u32) -> Option<&Rc<CatalogEntry>> {
        self.menu_by_id.get(&id)
    }

    pub fn lookup_by_name(&self, key: &str) -> Option<&Rc<CatalogEntry>> {
        self.menu_by_name.get(key)
    }

    pub fn menu_by_id(&self) -> impl Iterator<Item = (u32, &CatalogEntry)> {
        self.menu_by_id.iter().map(|(id, entry)| (*id, entry.as_ref()))
    }

    pub fn menu_by_name(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.menu_by_name
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.as_ref()))
    }

    /// Issues the next order id and an empty record for it. The id is spent even if the
    /// order is later discarded.
    pub fn begin_order(&mut self) -> (OrderId, OrderRecord) {
        let order_id = self.next_order_id;
        self.next_order_id += 1;
        debug!(order_id, "order started");
        (order_id, OrderRecord::new(order_id))
    }

    /// One order-taking step: looks `id` up in the by-id menu and appends it to `record`.
    /// An unknown id leaves the record untouched.
    pub fn add_item(&self, record: &mut OrderRecord, id: u32) -> LineOutcome {
        if id == FINISH_SENTINEL {
            return LineOutcome::Finished;
        }
        match self.lookup_by_id(id) {
            Some(entry) => {
                info!(order_id = record.order_id(), item = entry.name(), "added to the order");
                record.add_line(Rc::clone(entry));
                LineOutcome::Added(Rc::clone(entry))
            }
            None => {
                warn!(order_id = record.order_id(), id, "invalid item id");
                LineOutcome::Unknown(id)
            }
        }
    }

    /// Stores `record` if its total is above zero and bumps the shared tally; otherwise
    /// drops it. A record whose id this ledger never issued, or has already stored, is
    /// dropped as well.
    pub fn commit_order(&mut self, record: OrderRecord) -> CommitOutcome {
        let order_id = record.order_id();

        if order_id >= self.next_order_id || self.history.contains_key(&order_id) {
            warn!(order_id, "order id was not issued by this ledger or is already stored");
            return CommitOutcome::Discarded(order_id);
        }

        if !record.total().is_positive() {
            info!(order_id, total = %record.total(), "no items were added to the order");
            return CommitOutcome::Discarded(order_id);
        }

        let total = record.total();
        self.history.insert(order_id, record);
        let placed = counter::record_commit();
        info!(order_id, %total, total_orders_placed = placed, "order placed successfully");
        CommitOutcome::Committed(order_id)
    }

    /// Committed orders in ascending id order.
    pub fn all_orders(&self) -> impl Iterator<Item = &OrderRecord> {
        self.history.values()
    }

    pub fn has_orders(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn order(&self, order_id: OrderId) -> Option<&OrderRecord> {
        self.history.get(&order_id)
    }

    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    /// Orders committed by every ledger in the process, not just this one.
    pub fn total_orders_placed() -> u64 {
        counter::total_orders_placed()
    }
}

impl Establishment for Ledger {
    fn ledger(&self) -> &Ledger {
        self
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        self
    }

    fn name(&self) -> &str {
        "Restaurant"
    }

    fn todays_special(&self) -> String {
        "Today's special is Chef's Surprise!".to_string()
    }
}
