use crate::utils::error::{InputError, Result};
use crate::utils::validation::{check_distance, parse_name};
use serde::Serialize;

/// 年齡折扣級距，三者互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountBand {
    /// 未滿 12 歲，半價
    Child,
    /// 12 到 60 歲 (含)，全票
    Standard,
    /// 60 歲以上，七折
    Senior,
}

impl DiscountBand {
    pub const CHILD_AGE_LIMIT: u32 = 12;
    pub const SENIOR_AGE_FLOOR: u32 = 60;

    pub fn for_age(age: u32) -> Self {
        if age < Self::CHILD_AGE_LIMIT {
            DiscountBand::Child
        } else if age > Self::SENIOR_AGE_FLOOR {
            DiscountBand::Senior
        } else {
            DiscountBand::Standard
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            DiscountBand::Child => 0.5,
            DiscountBand::Standard => 1.0,
            DiscountBand::Senior => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiscountBand::Child => "child",
            DiscountBand::Standard => "standard",
            DiscountBand::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassengerRecord {
    name: String,
    age: u32,
    distance_km: f64,
    fare: f64,
}

impl PassengerRecord {
    /// 建立乘客資料；名稱會去除前後空白，距離必須有限且非負
    pub fn new(name: impl AsRef<str>, age: u32, distance_km: f64) -> Result<Self> {
        let name = parse_name(name.as_ref())?;
        let distance_km = check_distance(distance_km).map_err(|issue| {
            InputError::InvalidDistance {
                raw: distance_km.to_string(),
                issue,
            }
        })?;

        Ok(Self {
            name,
            age,
            distance_km,
            fare: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// 最近一次計算的票價，尚未計算時為 0
    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub fn band(&self) -> DiscountBand {
        DiscountBand::for_age(self.age)
    }

    pub(crate) fn set_fare(&mut self, fare: f64) {
        self.fare = fare;
    }
}

/// 報表用的唯讀投影
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow<'a> {
    pub name: &'a str,
    pub age: u32,
    pub distance_km: f64,
    pub fare: f64,
    pub band: DiscountBand,
}

impl<'a> From<&'a PassengerRecord> for SummaryRow<'a> {
    fn from(record: &'a PassengerRecord) -> Self {
        Self {
            name: record.name(),
            age: record.age(),
            distance_km: record.distance_km(),
            fare: record.fare(),
            band: record.band(),
        }
    }
}
