use crate::domain::ledger::Ledger;

/// Anything that keeps a [`Ledger`] and can name today's special.
///
/// Menu management and order taking live on the ledger itself; establishments differ only
/// in what they add on top. Callers that just take orders should accept
/// `&mut dyn Establishment` so a plain restaurant and a steakhouse are interchangeable.
pub trait Establishment {
    fn ledger(&self) -> &Ledger;

    fn ledger_mut(&mut self) -> &mut Ledger;

    fn name(&self) -> &str;

    fn todays_special(&self) -> String;
}
