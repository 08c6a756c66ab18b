pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvPassengerSource, FileSink, PromptSession, StdoutSink};
pub use config::{ReportFormat, TomlConfig};
pub use core::{
    batch::FareBatch,
    engine::{FareEngine, RunOutcome},
    fare::{compute_fare, DEFAULT_BASE_RATE_PER_KM},
};
pub use domain::model::{DiscountBand, PassengerRecord, SummaryRow};
pub use utils::error::{FareError, InputError, Result};
