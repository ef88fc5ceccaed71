//! Process-wide tally of committed orders, shared by every ledger in the process.

use std::sync::atomic::{AtomicU64, Ordering};

static TOTAL_ORDERS_PLACED: AtomicU64 = AtomicU64::new(0);

/// Number of orders committed by any ledger since the process started.
pub fn total_orders_placed() -> u64 {
    TOTAL_ORDERS_PLACED.load(Ordering::Relaxed)
}

pub(crate) fn record_commit() -> u64 {
    TOTAL_ORDERS_PLACED.fetch_add(1, Ordering::Relaxed) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    // Other tests in this binary commit orders concurrently, so only growth is asserted here.
    #[test]
    fn record_commit_moves_the_tally_forward() {
        let before = total_orders_placed();
        let after = record_commit();
        assert!(after > before);
        assert!(total_orders_placed() >= after);
    }
}
