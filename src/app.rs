use std::io::{BufWriter, Read, Write, stdout};

use tracing::info;

use crate::{
    common::error::AppError,
    config::{AppConfig, EstablishmentKind},
    domain::{establishment::Establishment, ledger::Ledger, steakhouse::Steakhouse},
    io::{reader, writer},
    worker::processor::Processor,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = AppConfig::from_args(args)?;
    let file = std::fs::File::open(&config.input_path)?;

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    run_script(&config, file, writer)
}

/// Builds the configured establishment, replays the script from `input` and writes the
/// committed orders to `output`.
pub fn run_script<R: Read, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let mut establishment: Box<dyn Establishment> = match config.establishment {
        EstablishmentKind::Restaurant => Box::new(Ledger::with_config(config.ledger)),
        EstablishmentKind::Steakhouse => {
            let house = Steakhouse::with_config(config.ledger);
            info!("{}", house.announce_featured());
            Box::new(house)
        }
    };
    info!(establishment = establishment.name(), "{}", establishment.todays_special());

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let mut processor = Processor::new();

    for event in reader::read_script(&mut reader) {
        let event = event.map_err(AppError::Parse)?;
        processor.process(establishment.as_mut(), event);
    }
    processor.finish(establishment.as_mut());

    let ledger = establishment.ledger();
    if !ledger.has_orders() {
        info!("No orders have been placed yet.");
    }
    writer::write_orders(output, ledger.all_orders())?;

    info!(
        total_orders_placed = Ledger::total_orders_placed(),
        "Total orders placed"
    );
    Ok(())
}
