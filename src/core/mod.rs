pub mod batch;
pub mod engine;
pub mod fare;
pub mod report;

pub use crate::domain::model::{DiscountBand, PassengerRecord, SummaryRow};
pub use crate::domain::ports::{ConfigProvider, PassengerSource, ReportSink};
pub use crate::utils::error::Result;
