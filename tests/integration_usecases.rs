use std::fs;
use std::io::Cursor;

use order_ledger::domain::{establishment::Establishment, ledger::Ledger, steakhouse::Steakhouse};

fn run_case(establishment: &mut dyn Establishment, input_csv: &str) -> String {
    let mut worker = order_ledger::worker::processor::Processor::new();

    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    for row in order_ledger::io::reader::read_script(&mut csv_reader) {
        let ev = row.expect("failed to parse input row");
        worker.process(establishment, ev);
    }
    worker.finish(establishment);

    let mut out = Vec::<u8>::new();
    order_ledger::io::writer::write_orders(&mut out, establishment.ledger().all_orders())
        .expect("failed to write output CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_case(establishment: &mut dyn Establishment, name: &str) {
    let input = fs::read_to_string(format!("tests/fixtures/{name}_input.csv")).unwrap();
    let expected = fs::read_to_string(format!("tests/fixtures/{name}_expected.csv")).unwrap();

    let actual = run_case(establishment, &input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case1_repeat_items_and_empty_order_gap() {
    assert_case(&mut Ledger::new(), "case1");
}

#[test]
fn case1_same_result_at_the_steakhouse() {
    assert_case(&mut Steakhouse::new(), "case1");
}

#[test]
fn case2_replaced_items_invalid_ids_and_trailing_order() {
    assert_case(&mut Ledger::new(), "case2");
}

#[test]
fn case3_cent_precision_and_netted_zero_total() {
    assert_case(&mut Ledger::new(), "case3");
}

#[test]
fn name_index_is_separate_from_order_taking() {
    let input = fs::read_to_string("tests/fixtures/case1_input.csv").unwrap();
    let mut ledger = Ledger::new();
    run_case(&mut ledger, &input);

    let sirloin = ledger.lookup_by_name("Special Sirloin").expect("registered by name");
    assert_eq!(sirloin.name(), "Sirloin Steak");
    assert!(
        ledger
            .all_orders()
            .flat_map(|o| o.line_items())
            .all(|entry| entry.name() != "Sirloin Steak")
    );
}
