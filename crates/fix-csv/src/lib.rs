//! CSV output for correlated fills
//!
//! [`CsvEmitter`] writes one row per [`FillRecord`] under a fixed header in
//! [`FillRecord::COLUMNS`] order. The header is written when the emitter is
//! created, so a run without fills still produces a valid file.
//!
//! # Example
//!
//! ```
//! use fix_csv::CsvEmitter;
//! use fix_engine::{run, PipelineConfig};
//!
//! let log = "A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50\n\
//!            B:35=8^A150=2^A39=2^A40=2^A11=1^A60=T2^A6=10.40^A30=NYSE\n";
//!
//! let mut emitter = CsvEmitter::new(Vec::new()).unwrap();
//! run(log.as_bytes(), &mut emitter, &PipelineConfig::default()).unwrap();
//!
//! let csv = String::from_utf8(emitter.into_inner().unwrap()).unwrap();
//! assert_eq!(
//!     csv,
//!     "OrderID,OrderTransactTime,ExecutionTransactTime,Symbol,Side,OrderQty,LimitPrice,AvgPx,LastMkt\n\
//!      1,T1,T2,XYZ,1,100,10.50,10.40,NYSE\n"
//! );
//! ```

use std::io;

use fix_engine::FillSink;
use fix_types::{ConfigError, FillRecord, FixError, FixResult};
use tracing::debug;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// CSV output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Write the column header row
    pub write_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            write_header: true,
        }
    }
}

impl CsvConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip the header row
    pub fn without_header(mut self) -> Self {
        self.write_header = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.delimiter {
            b'"' | b'\n' | b'\r' => Err(ConfigError::InvalidDelimiter {
                delimiter: self.delimiter as char,
            }),
            _ => Ok(()),
        }
    }
}

/// [`FillSink`] writing CSV rows to any [`io::Write`]
pub struct CsvEmitter<W: io::Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl<W: io::Write> CsvEmitter<W> {
    /// Create an emitter with default settings
    pub fn new(inner: W) -> FixResult<Self> {
        Self::with_config(inner, &CsvConfig::default())
    }

    /// Create an emitter, writing the header row if enabled
    pub fn with_config(inner: W, config: &CsvConfig) -> FixResult<Self> {
        config.validate()?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(config.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);

        if config.write_header {
            writer
                .write_record(FillRecord::COLUMNS)
                .map_err(FixError::output)?;
        }

        Ok(Self { writer, rows: 0 })
    }

    /// Data rows written so far
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> FixResult<W> {
        self.writer
            .into_inner()
            .map_err(|err| FixError::output(err.into_error()))
    }
}

impl<W: io::Write> FillSink for CsvEmitter<W> {
    fn emit(&mut self, record: &FillRecord) -> FixResult<()> {
        self.writer
            .write_record(record.values())
            .map_err(FixError::output)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> FixResult<()> {
        self.writer.flush().map_err(FixError::output)?;
        debug!(rows = self.rows, "CSV output flushed");
        Ok(())
    }
}
