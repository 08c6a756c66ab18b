use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_report(&self, content: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, content: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)?;
        Ok(self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("reports").join("fares.txt");

        let sink = FileSink::new(&target);
        let destination = sink.write_report("hello").unwrap();

        assert_eq!(destination, target.display().to_string());
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    }
}
