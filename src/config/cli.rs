use crate::config::toml_config::{ReportFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "transport-fare")]
#[command(about = "Compute passenger fares from distance and age discounts")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the base rate per kilometer
    #[arg(long)]
    pub rate: Option<f64>,

    /// Read passengers from a CSV file (name,age,distance_km) instead of prompting
    #[arg(short, long)]
    pub input: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Maximum invalid answers accepted per prompt
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入 TOML (若有指定)，套用命令列覆蓋後再驗證
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(rate) = self.rate {
            config.fare.base_rate_per_km = rate;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(output) = &self.output {
            config.report.output_path = Some(output.clone());
        }
        if let Some(max_attempts) = self.max_attempts {
            config.input.max_attempts = max_attempts;
        }

        config.validate()?;
        Ok(config)
    }

    /// 命令列覆蓋設定的摘要，供日誌初始化後輸出
    pub fn override_summary(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        if let Some(rate) = self.rate {
            overrides.push(format!("base rate = {}", rate));
        }
        if let Some(format) = self.format {
            overrides.push(format!("report format = {:?}", format));
        }
        if let Some(output) = &self.output {
            overrides.push(format!("output path = {}", output));
        }
        if let Some(max_attempts) = self.max_attempts {
            overrides.push(format!("max attempts = {}", max_attempts));
        }
        overrides
    }
}
