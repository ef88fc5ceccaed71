//! In-memory menu and order books for restaurants.
//!
//! [`domain`] holds the ledger itself; [`io`] and [`worker`] replay CSV order scripts
//! against it for the `order_ledger` binary.

pub mod app;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod worker;
