use crate::domain::model::PassengerRecord;
use crate::domain::ports::PassengerSource;
use crate::utils::error::{FareError, Result};
use crate::utils::validation::{parse_age, parse_distance, parse_name};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawPassenger {
    name: String,
    age: String,
    distance_km: String,
}

/// 從 CSV (name,age,distance_km) 讀取乘客，任何一列不合法即整批失敗
pub struct CsvPassengerSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvPassengerSource<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CsvPassengerSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        Self { reader }
    }
}

fn to_record(raw: RawPassenger, line: u64) -> Result<PassengerRecord> {
    let invalid = |reason: String| FareError::InvalidRecord { line, reason };

    let name = parse_name(&raw.name).map_err(|e| invalid(e.to_string()))?;
    let age = parse_age(&raw.age).map_err(|e| invalid(e.to_string()))?;
    let distance_km = parse_distance(&raw.distance_km).map_err(|e| invalid(e.to_string()))?;

    PassengerRecord::new(name, age, distance_km)
}

impl<R: Read> PassengerSource for CsvPassengerSource<R> {
    fn collect_passengers(&mut self) -> Result<Vec<PassengerRecord>> {
        let headers = self.reader.headers()?.clone();
        let mut passengers = Vec::new();
        let mut row = StringRecord::new();

        while self.reader.read_record(&mut row)? {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let raw: RawPassenger = row.deserialize(Some(&headers))?;
            passengers.push(to_record(raw, line)?);
        }

        tracing::debug!("Loaded {} passengers from CSV", passengers.len());
        Ok(passengers)
    }
}
