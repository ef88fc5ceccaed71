pub mod catalog;
pub mod counter;
pub mod establishment;
pub mod ledger;
pub mod order;
pub mod steakhouse;
