use crate::domain::model::PassengerRecord;
use crate::domain::ports::PassengerSource;
use crate::utils::error::{FareError, InputError, Result};
use crate::utils::validation::{parse_age, parse_count, parse_distance, parse_name};
use std::io::{BufRead, Write};

const BANNER_WIDTH: usize = 60;

/// 互動式輸入：每個欄位最多重試 `max_attempts` 次
pub struct PromptSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, writer: W, max_attempts: u32) -> Self {
        Self {
            reader,
            writer,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.writer, "{}", rule)?;
        writeln!(
            self.writer,
            "{:^width$}",
            "TRANSPORT FARE SIMULATOR",
            width = BANNER_WIDTH
        )?;
        writeln!(self.writer, "{}", rule)?;
        Ok(())
    }

    pub fn read_count(&mut self) -> Result<usize> {
        self.ask(
            "Number of passengers to process (N): ",
            "passenger count",
            parse_count,
        )
    }

    pub fn read_passenger(&mut self, index: usize) -> Result<PassengerRecord> {
        writeln!(self.writer, "\n--- Passenger {} ---", index)?;
        let name = self.ask("Name: ", "name", parse_name)?;
        let age = self.ask("Age (years): ", "age", parse_age)?;
        let distance_km = self.ask("Distance to travel (km): ", "distance", parse_distance)?;

        PassengerRecord::new(name, age, distance_km)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        field: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        for attempt in 1..=self.max_attempts {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(FareError::InputClosed {
                    field: field.to_string(),
                });
            }

            match parse(line.as_str()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected {} (attempt {}): {}", field, attempt, e);
                    writeln!(self.writer, "{}", e.retry_hint())?;
                }
            }
        }

        tracing::warn!(
            "Giving up on {} after {} attempts",
            field,
            self.max_attempts
        );
        Err(FareError::PromptAttemptsExhausted {
            field: field.to_string(),
            attempts: self.max_attempts,
        })
    }
}

impl<R: BufRead, W: Write> PassengerSource for PromptSession<R, W> {
    fn collect_passengers(&mut self) -> Result<Vec<PassengerRecord>> {
        let count = self.read_count()?;
        let mut passengers = Vec::new();
        for index in 1..=count {
            passengers.push(self.read_passenger(index)?);
        }
        Ok(passengers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session<'a>(
        input: &'a str,
        output: &'a mut Vec<u8>,
        max_attempts: u32,
    ) -> PromptSession<Cursor<&'a str>, &'a mut Vec<u8>> {
        PromptSession::new(Cursor::new(input), output, max_attempts)
    }

    #[test]
    fn test_collects_passengers_in_order() {
        let mut output = Vec::new();
        let input = "2\nAna\n10\n20\nLuis\n65\n10.5\n";
        let passengers = session(input, &mut output, 3).collect_passengers().unwrap();

        assert_eq!(passengers.len(), 2);
        assert_eq!(passengers[0].name(), "Ana");
        assert_eq!(passengers[0].age(), 10);
        assert_eq!(passengers[0].distance_km(), 20.0);
        assert_eq!(passengers[1].name(), "Luis");
        assert_eq!(passengers[1].distance_km(), 10.5);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("--- Passenger 1 ---"));
        assert!(transcript.contains("--- Passenger 2 ---"));
    }

    #[test]
    fn test_zero_count_reads_nothing_else() {
        let mut output = Vec::new();
        let passengers = session("0\n", &mut output, 3).collect_passengers().unwrap();
        assert!(passengers.is_empty());
    }

    #[test]
    fn test_reprompts_on_invalid_values() {
        let mut output = Vec::new();
        let input = "-1\nabc\n1\n   \nEva\nold\n-3\n70\nfar\n-2\n4\n";
        let passengers = session(input, &mut output, 5).collect_passengers().unwrap();

        assert_eq!(passengers.len(), 1);
        assert_eq!(passengers[0].name(), "Eva");
        assert_eq!(passengers[0].age(), 70);
        assert_eq!(passengers[0].distance_km(), 4.0);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Enter a non-negative whole number."));
        assert!(transcript.contains("Invalid input. Enter a valid whole number."));
        assert!(transcript.contains("The value cannot be empty. Try again."));
        assert!(transcript.contains("Enter a non-negative numeric value."));
        assert_eq!(transcript.matches("Age (years): ").count(), 3);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut output = Vec::new();
        let result = session("x\ny\nz\n5\n", &mut output, 3).read_count();

        match result {
            Err(FareError::PromptAttemptsExhausted { field, attempts }) => {
                assert_eq!(field, "passenger count");
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let mut output = Vec::new();
        let result = session("1\nAna\n", &mut output, 3).collect_passengers();
        assert!(matches!(
            result,
            Err(FareError::InputClosed { ref field }) if field == "age"
        ));
    }

    #[test]
    fn test_banner() {
        let mut output = Vec::new();
        session("", &mut output, 1).print_banner().unwrap();
        let banner = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1].trim(), "TRANSPORT FARE SIMULATOR");
    }
}
