use crate::domain::{
    ledger::{CommitOutcome, Ledger, LineOutcome},
    order::OrderRecord,
};

/// Applies one `item` step. Opens an order if none is open; the finish sentinel commits
/// (or discards) it and leaves no order open.
pub fn handle(
    ledger: &mut Ledger,
    open: &mut Option<OrderRecord>,
    id: u32,
) -> Option<CommitOutcome> {
    let record = open.get_or_insert_with(|| ledger.begin_order().1);

    match ledger.add_item(record, id) {
        LineOutcome::Finished => open.take().map(|record| ledger.commit_order(record)),
        LineOutcome::Added(_) | LineOutcome::Unknown(_) => None,
    }
}
