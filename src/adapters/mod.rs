// Adapters layer: concrete passenger sources and report sinks.

pub mod csv_source;
pub mod prompt;
pub mod sink;

pub use csv_source::CsvPassengerSource;
pub use prompt::PromptSession;
pub use sink::{FileSink, StdoutSink};
