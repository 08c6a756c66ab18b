use crate::config::toml_config::ReportFormat;
use crate::core::batch::FareBatch;
use crate::domain::model::SummaryRow;
use crate::utils::error::{FareError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

const RULE_WIDTH: usize = 50;

/// 不含小數、以逗號分隔千位 (例如 1234567.8 -> "1,234,568")
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value.is_sign_negative() && rounded != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn render(batch: &FareBatch, format: ReportFormat, currency: &str) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(batch, currency)),
        ReportFormat::Json => render_json(batch, currency),
        ReportFormat::Csv => render_csv(batch),
    }
}

pub fn render_text(batch: &FareBatch, currency: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        heavy.clone(),
        format!("{:^width$}", "SUMMARY OF FARES", width = RULE_WIDTH),
        heavy.clone(),
    ];

    if batch.is_empty() {
        lines.push("No passengers processed.".to_string());
        return lines.join("\n") + "\n";
    }

    lines.push(format!(
        "{:<20} {:>5} {:>14} {:>15}",
        "Name",
        "Age",
        "Distance(km)",
        format!("Fare ({})", currency)
    ));
    lines.push(light.clone());

    for row in batch.summary_view() {
        lines.push(format!(
            "{:<20} {:>5} {:>14} {:>15}",
            row.name,
            row.age,
            format_distance(row.distance_km),
            format_thousands(row.fare)
        ));
    }

    lines.push(light);
    lines.push(format!(
        "{:<39} {:>11} {}",
        "Total collected:",
        format_thousands(batch.total_collected()),
        currency
    ));
    lines.push(heavy);
    lines.push(String::new());

    lines.join("\n") + "\n"
}

/// 報表列：保留原始數值，另附顯示用格式 (距離兩位小數、票價千分位)
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    row: SummaryRow<'a>,
    distance_display: String,
    fare_display: String,
}

impl<'a> From<SummaryRow<'a>> for JsonRow<'a> {
    fn from(row: SummaryRow<'a>) -> Self {
        Self {
            distance_display: format_distance(row.distance_km),
            fare_display: format_thousands(row.fare),
            row,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    base_rate_per_km: f64,
    currency: &'a str,
    passenger_count: usize,
    passengers: Vec<JsonRow<'a>>,
    total_collected: f64,
    total_display: String,
}

pub fn format_distance(distance_km: f64) -> String {
    format!("{:.2}", distance_km)
}

pub fn render_json(batch: &FareBatch, currency: &str) -> Result<String> {
    let total = batch.total_collected();
    let report = JsonReport {
        generated_at: Utc::now(),
        base_rate_per_km: batch.base_rate_per_km(),
        currency,
        passenger_count: batch.len(),
        passengers: batch.summary_view().into_iter().map(JsonRow::from).collect(),
        total_collected: total,
        total_display: format_thousands(total),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_csv(batch: &FareBatch) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // 空批次也輸出標頭與總計列
    writer.write_record(["name", "age", "distance_km", "fare", "band"])?;
    for row in batch.summary_view() {
        let age = row.age.to_string();
        let distance = format_distance(row.distance_km);
        let fare = format_thousands(row.fare);
        writer.write_record([
            row.name,
            age.as_str(),
            distance.as_str(),
            fare.as_str(),
            row.band.as_str(),
        ])?;
    }

    let total = format_thousands(batch.total_collected());
    writer.write_record(["Total collected", "", "", total.as_str(), ""])?;

    let bytes = writer.into_inner().map_err(|e| FareError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| FareError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
