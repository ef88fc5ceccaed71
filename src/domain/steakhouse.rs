use tracing::info;

use crate::{
    config::LedgerConfig,
    domain::{establishment::Establishment, ledger::Ledger},
};

pub const DEFAULT_FEATURED: &str = "Wagyu Ribeye";

/// A restaurant that also has a featured steak. Its ledger is an ordinary [`Ledger`], so
/// its commits count toward the same process-wide tally as every other establishment.
#[derive(Debug)]
pub struct Steakhouse {
    ledger: Ledger,
    featured: String,
}

impl Default for Steakhouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Steakhouse {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self::with_featured(DEFAULT_FEATURED, config)
    }

    pub fn with_featured(featured: impl Into<String>, config: LedgerConfig) -> Self {
        info!("Welcome to the Steakhouse!");
        Self {
            ledger: Ledger::with_config(config),
            featured: featured.into(),
        }
    }

    pub fn featured(&self) -> &str {
        &self.featured
    }

    pub fn announce_featured(&self) -> String {
        format!("Today's special steak is the {}!", self.featured)
    }
}

impl Establishment for Steakhouse {
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn name(&self) -> &str {
        "Steakhouse"
    }

    fn todays_special(&self) -> String {
        format!("Today's special at Steakhouse is {}!", self.featured)
    }
}
