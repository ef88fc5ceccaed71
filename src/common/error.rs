#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <script.csv> [--steakhouse] [--strict-prices]")]
    MissingArg,
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Rejections raised by the ledger itself. Only the strict price policy produces these.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid catalog entry {name:?}: {reason}")]
    InvalidEntry { name: String, reason: &'static str },
}
