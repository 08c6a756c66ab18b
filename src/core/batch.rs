use crate::core::fare::{compute_fare, DEFAULT_BASE_RATE_PER_KM};
use crate::domain::model::{PassengerRecord, SummaryRow};
use crate::utils::error::{FareError, Result};
use crate::utils::validation::validate_positive_rate;

/// 一批一起結算的乘客，保留加入順序
#[derive(Debug, Clone)]
pub struct FareBatch {
    base_rate_per_km: f64,
    records: Vec<PassengerRecord>,
    // 未折扣票價總和，為總額的上界
    base_total: f64,
}

impl FareBatch {
    pub fn new(base_rate_per_km: f64) -> Result<Self> {
        validate_positive_rate("base_rate_per_km", base_rate_per_km)?;
        Ok(Self {
            base_rate_per_km,
            records: Vec::new(),
            base_total: 0.0,
        })
    }

    pub fn base_rate_per_km(&self) -> f64 {
        self.base_rate_per_km
    }

    /// 加入乘客；若以目前費率計算的票價或批次總額會溢位成無限大則拒絕
    pub fn add(&mut self, record: PassengerRecord) -> Result<()> {
        let base_fare = self.base_rate_per_km * record.distance_km();
        let base_total = self.base_total + base_fare;
        if !base_total.is_finite() {
            return Err(FareError::FareOverflow {
                name: record.name().to_string(),
                distance_km: record.distance_km(),
                base_rate_per_km: self.base_rate_per_km,
            });
        }

        self.base_total = base_total;
        self.records.push(record);
        Ok(())
    }

    pub fn add_passenger(&mut self, name: &str, age: u32, distance_km: f64) -> Result<()> {
        let record = PassengerRecord::new(name, age, distance_km)?;
        self.add(record)
    }

    /// 依加入順序重新計算每位乘客的票價，重複呼叫結果相同
    pub fn process_all(&mut self) {
        let rate = self.base_rate_per_km;
        for record in &mut self.records {
            let fare = compute_fare(record.distance_km(), record.age(), rate);
            record.set_fare(fare);
        }
        tracing::debug!(
            "Computed fares for {} passengers at {} per km",
            self.records.len(),
            rate
        );
    }

    pub fn total_collected(&self) -> f64 {
        self.records.iter().map(PassengerRecord::fare).sum()
    }

    pub fn summary_view(&self) -> Vec<SummaryRow<'_>> {
        self.records.iter().map(SummaryRow::from).collect()
    }

    pub fn records(&self) -> &[PassengerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for FareBatch {
    fn default() -> Self {
        Self {
            base_rate_per_km: DEFAULT_BASE_RATE_PER_KM,
            records: Vec::new(),
            base_total: 0.0,
        }
    }
}
