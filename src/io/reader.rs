use crate::common::{event::LedgerEvent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row matching the script headers. `name` and `price` stay empty on
/// `item` rows.
struct CsvRow {
    #[serde(rename = "type")]
    row_type: String,
    key: String,
    name: Option<String>,
    price: Option<String>,
}

/// Reads an order script: menu registrations and order-taking steps, in file order.
///
/// Supported headers: `type,key,name,price`, with row types
/// - `menu_id`: register `name`/`price` under the numeric `key`
/// - `menu_name`: register `name`/`price` under the text `key`
/// - `item`: one order-taking attempt for the numeric `key`; `0` finishes the order
///
/// Type names are case-insensitive. Errors carry the row type and key.
///
/// # Examples
///
/// ```
/// use order_ledger::io::reader::read_script;
/// use order_ledger::common::event::LedgerEvent;
/// use csv::ReaderBuilder;
///
/// let data = "type,key,name,price\n\
/// menu_id,1,Ribeye Steak,25.99\n\
/// item,1,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_script(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(LedgerEvent::RegisterById { id: 1, .. })));
/// assert!(matches!(events[1], Ok(LedgerEvent::Item { id: 1 })));
/// ```
pub fn read_script<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.row_type.trim().to_ascii_lowercase();

        match kind.as_str() {
            "menu_id" => {
                let id = parse_id(&kind, &row.key)?;
                let (name, price) = menu_fields(&kind, row)?;
                Ok(LedgerEvent::RegisterById { id, name, price })
            }
            "menu_name" => {
                let key = row.key.clone();
                let (name, price) = menu_fields(&kind, row)?;
                Ok(LedgerEvent::RegisterByName { key, name, price })
            }
            "item" => Ok(LedgerEvent::Item {
                id: parse_id(&kind, &row.key)?,
            }),
            other => Err(format!("unknown row type: {other} for key {}", row.key)),
        }
    })
}

fn parse_id(kind: &str, key: &str) -> Result<u32, String> {
    key.trim()
        .parse::<u32>()
        .map_err(|_| format!("{kind} key {key:?} is not a number"))
}

// Names are taken verbatim; an empty name is the ledger's call, not the reader's.
fn menu_fields(kind: &str, row: CsvRow) -> Result<(String, Money), String> {
    let price = row
        .price
        .ok_or_else(|| format!("{kind} missing price for key {}", row.key))?;
    let price = Money::from_str(&price).map_err(|e| format!("{kind} key {}: {e}", row.key))?;
    Ok((row.name.unwrap_or_default(), price))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_events(input: &str) -> Vec<Result<LedgerEvent, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_script(&mut reader).collect()
    }

    #[test]
    fn parses_all_row_types() {
        let data = "type,key,name,price\n\
menu_id,1,Ribeye Steak,25.99\nMENU_NAME,Special Sirloin,Sirloin Steak,19.99\nitem,1,,\nItem,0,,\n";
        let events = collect_events(data);
        assert_eq!(events.len(), 4);

        match &events[0] {
            Ok(LedgerEvent::RegisterById { id, name, price }) => {
                assert_eq!((*id, name.as_str(), price.cents()), (1, "Ribeye Steak", 2599));
            }
            other => panic!("unexpected menu_id event: {other:?}"),
        }
        match &events[1] {
            Ok(LedgerEvent::RegisterByName { key, name, price }) => {
                assert_eq!(
                    (key.as_str(), name.as_str(), price.cents()),
                    ("Special Sirloin", "Sirloin Steak", 1999)
                );
            }
            other => panic!("unexpected menu_name event: {other:?}"),
        }
        assert!(matches!(events[2], Ok(LedgerEvent::Item { id: 1 })));
        assert!(matches!(events[3], Ok(LedgerEvent::Item { id: 0 })));
    }

    #[test]
    fn reports_missing_price() {
        let events = collect_events("type,key,name,price\nmenu_id,4,Porterhouse,\n");
        let err = events.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "menu_id missing price for key 4");
    }

    #[test]
    fn reports_non_numeric_item_key() {
        let events = collect_events("type,key,name,price\nitem,ribeye,,\n");
        let err = events.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "item key \"ribeye\" is not a number");
    }

    #[test]
    fn reports_unknown_type() {
        let events = collect_events("type,key,name,price\nrefund,3,,\n");
        let err = events.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "unknown row type: refund for key 3");
    }

    #[test]
    fn keeps_negative_prices() {
        let events = collect_events("type,key,name,price\nmenu_id,9,Coupon,-2.50\n");
        assert!(matches!(
            &events[0],
            Ok(LedgerEvent::RegisterById { price, .. }) if price.cents() == -250
        ));
    }
}
