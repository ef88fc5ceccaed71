use crate::common::error::AppError;

/// How strictly catalog registrations are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricePolicy {
    /// Store entries exactly as given, including empty names and negative prices.
    #[default]
    Permissive,
    /// Refuse entries with an empty name or a negative price.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    pub price_policy: PricePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EstablishmentKind {
    #[default]
    Restaurant,
    Steakhouse,
}

/// Command line for the batch driver:
/// `order_ledger <script.csv> [--steakhouse] [--strict-prices]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input_path: String,
    pub establishment: EstablishmentKind,
    pub ledger: LedgerConfig,
}

impl AppConfig {
    /// Parses `args` the way `std::env::args()` yields them, program name first.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input_path = None;
        let mut establishment = EstablishmentKind::default();
        let mut ledger = LedgerConfig::default();

        for arg in args.into_iter().skip(1).map(Into::<String>::into) {
            match arg.as_str() {
                "--steakhouse" => establishment = EstablishmentKind::Steakhouse,
                "--strict-prices" => ledger.price_policy = PricePolicy::Strict,
                flag if flag.starts_with("--") => return Err(AppError::UnknownFlag(arg)),
                _ if input_path.is_none() => input_path = Some(arg),
                _ => return Err(AppError::UnknownFlag(arg)),
            }
        }

        Ok(Self {
            input_path: input_path.ok_or(AppError::MissingArg)?,
            establishment,
            ledger,
        })
    }
}
