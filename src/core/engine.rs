use crate::core::batch::FareBatch;
use crate::domain::ports::{ConfigProvider, PassengerSource};
use crate::utils::error::Result;

#[derive(Debug)]
pub enum RunOutcome {
    /// 來源沒有任何乘客，未建立批次
    NoPassengers,
    Processed(FareBatch),
}

pub struct FareEngine<S: PassengerSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: PassengerSource, C: ConfigProvider> FareEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn run(&mut self) -> Result<RunOutcome> {
        tracing::info!("Collecting passengers...");
        let passengers = self.source.collect_passengers()?;
        tracing::info!("Collected {} passengers", passengers.len());

        if passengers.is_empty() {
            return Ok(RunOutcome::NoPassengers);
        }

        let mut batch = FareBatch::new(self.config.base_rate_per_km())?;
        for passenger in passengers {
            batch.add(passenger)?;
        }

        tracing::info!("Computing fares...");
        batch.process_all();
        tracing::info!(
            "Total collected: {:.2} {}",
            batch.total_collected(),
            self.config.currency()
        );

        Ok(RunOutcome::Processed(batch))
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ReportFormat;
    use crate::domain::model::PassengerRecord;
    use crate::utils::error::FareError;

    struct MockSource {
        passengers: Vec<PassengerRecord>,
        calls: usize,
    }

    impl MockSource {
        fn new(passengers: Vec<PassengerRecord>) -> Self {
            Self {
                passengers,
                calls: 0,
            }
        }
    }

    impl PassengerSource for MockSource {
        fn collect_passengers(&mut self) -> Result<Vec<PassengerRecord>> {
            self.calls += 1;
            Ok(self.passengers.clone())
        }
    }

    struct FailingSource;

    impl PassengerSource for FailingSource {
        fn collect_passengers(&mut self) -> Result<Vec<PassengerRecord>> {
            Err(FareError::InputClosed {
                field: "passenger count".to_string(),
            })
        }
    }

    struct MockConfig {
        rate: f64,
    }

    impl ConfigProvider for MockConfig {
        fn base_rate_per_km(&self) -> f64 {
            self.rate
        }

        fn currency(&self) -> &str {
            "pesos"
        }

        fn max_prompt_attempts(&self) -> u32 {
            3
        }

        fn report_format(&self) -> ReportFormat {
            ReportFormat::Text
        }
    }

    fn reference_passengers() -> Vec<PassengerRecord> {
        vec![
            PassengerRecord::new("Sofia", 10, 20.0).unwrap(),
            PassengerRecord::new("Jorge", 65, 10.0).unwrap(),
            PassengerRecord::new("Marta", 30, 15.0).unwrap(),
        ]
    }

    #[test]
    fn test_run_processes_batch() {
        let mut engine = FareEngine::new(
            MockSource::new(reference_passengers()),
            MockConfig { rate: 500.0 },
        );

        match engine.run().unwrap() {
            RunOutcome::Processed(batch) => {
                assert_eq!(batch.len(), 3);
                assert_eq!(batch.total_collected(), 16000.0);
            }
            RunOutcome::NoPassengers => panic!("expected a processed batch"),
        }
        assert_eq!(engine.into_source().calls, 1);
    }

    #[test]
    fn test_run_with_no_passengers() {
        let mut engine = FareEngine::new(MockSource::new(vec![]), MockConfig { rate: 500.0 });
        assert!(matches!(engine.run().unwrap(), RunOutcome::NoPassengers));
    }

    #[test]
    fn test_run_uses_configured_rate() {
        let mut engine = FareEngine::new(
            MockSource::new(reference_passengers()),
            MockConfig { rate: 100.0 },
        );
        match engine.run().unwrap() {
            RunOutcome::Processed(batch) => {
                assert_eq!(batch.base_rate_per_km(), 100.0);
                assert_eq!(batch.records()[2].fare(), 1500.0);
            }
            RunOutcome::NoPassengers => panic!("expected a processed batch"),
        }
    }

    #[test]
    fn test_invalid_rate_is_rejected() {
        let mut engine = FareEngine::new(
            MockSource::new(reference_passengers()),
            MockConfig { rate: 0.0 },
        );
        assert!(engine.run().is_err());
    }

    #[test]
    fn test_overflowing_fare_is_rejected() {
        let passengers = vec![
            PassengerRecord::new("Sofia", 10, 20.0).unwrap(),
            PassengerRecord::new("Far", 30, 1e307).unwrap(),
        ];
        let mut engine = FareEngine::new(MockSource::new(passengers), MockConfig { rate: 500.0 });

        assert!(matches!(
            engine.run(),
            Err(FareError::FareOverflow { ref name, .. }) if name == "Far"
        ));
    }

    #[test]
    fn test_source_errors_propagate() {
        let mut engine = FareEngine::new(FailingSource, MockConfig { rate: 500.0 });
        assert!(matches!(
            engine.run(),
            Err(FareError::InputClosed { .. })
        ));
    }
}
