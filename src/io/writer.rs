use std::io::Write;

use crate::domain::{catalog::CatalogEntry, order::OrderRecord};

#[derive(serde::Serialize)]
/// Internal CSV output row. Headers written (in this order): `order,items,total`.
struct OutputRow {
    order: u32,
    items: String,
    total: String,
}

/// Writes committed orders to a CSV writer, one row per order, in the order given.
///
/// Item names are joined with `;` and the total is formatted to 2 decimal places.
/// [`Ledger::all_orders`](crate::domain::ledger::Ledger::all_orders) already yields ids in
/// ascending order, so its output can be passed straight through.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use order_ledger::common::money::Money;
/// use order_ledger::domain::{catalog::CatalogEntry, order::OrderRecord};
/// use order_ledger::io::writer::write_orders;
///
/// let mut order = OrderRecord::new(1);
/// order.add_line(Rc::new(CatalogEntry::new("Ribeye Steak", Money::from_cents(2599))));
///
/// let mut out = Vec::new();
/// write_orders(&mut out, [&order]).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "order,items,total\n1,Ribeye Steak,25.99\n");
/// ```
pub fn write_orders<'a, W, I>(writer: W, orders: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for order in orders {
        let row = OutputRow {
            order: order.order_id(),
            items: order
                .line_items()
                .map(CatalogEntry::name)
                .collect::<Vec<_>>()
                .join(";"),
            total: order.total().to_string_2dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
