use ferrous_audit_domain::DomainError;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Destination for the final report, opened before the scan starts so a bad
/// path fails fast.
pub struct JsonResultWriter {
    target: Box<dyn Write + Send>,
    label: String,
}

impl JsonResultWriter {
    /// `-` selects standard output; anything else is created or truncated.
    pub fn open(path: &str) -> Result<Self, DomainError> {
        if path == "-" {
            return Ok(Self::from_writer(io::stdout(), "stdout"));
        }

        let file = File::create(Path::new(path))
            .map_err(|e| DomainError::OutputError(format!("{}: {}", path, e)))?;
        Ok(Self::from_writer(BufWriter::new(file), path))
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W, label: &str) -> Self {
        Self {
            target: Box::new(writer),
            label: label.to_string(),
        }
    }

    pub fn write<T: Serialize>(mut self, results: &[T]) -> Result<(), DomainError> {
        serde_json::to_writer_pretty(&mut self.target, results)
            .map_err(|e| DomainError::OutputError(e.to_string()))?;
        writeln!(self.target).map_err(|e| DomainError::OutputError(e.to_string()))?;
        self.target
            .flush()
            .map_err(|e| DomainError::OutputError(e.to_string()))?;

        info!(count = results.len(), destination = %self.label, "Results written");
        Ok(())
    }
}
