use crate::config::toml_config::ReportFormat;
use crate::domain::model::PassengerRecord;
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn base_rate_per_km(&self) -> f64;
    fn currency(&self) -> &str;
    fn max_prompt_attempts(&self) -> u32;
    fn report_format(&self) -> ReportFormat;
}

/// 乘客資料來源 (互動輸入、CSV 檔案...)
pub trait PassengerSource {
    fn collect_passengers(&mut self) -> Result<Vec<PassengerRecord>>;
}

pub trait ReportSink {
    /// 寫出報表並回傳目的地描述
    fn write_report(&self, content: &str) -> Result<String>;
}
