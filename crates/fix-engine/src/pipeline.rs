//! Line-by-line extraction pipeline
//!
//! Reads a log in order, decodes each line, feeds the correlation engine, and
//! hands the resulting fills to a [`FillSink`].
//!
//! Fills are held until the whole input has been correlated. A fatal error
//! part-way through (a missing required tag, an unreadable line) therefore
//! reaches the caller before any record has been written, and the sink sees
//! either every fill of the run or none.
//!
//! # Example
//!
//! ```
//! use fix_engine::pipeline::{run, PipelineConfig};
//! use fix_types::FillRecord;
//!
//! let log = "A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50\n\
//!            B:35=8^A150=2^A39=2^A40=2^A11=1^A60=T2^A6=10.40^A30=NYSE\n";
//!
//! let mut fills: Vec<FillRecord> = Vec::new();
//! let summary = run(log.as_bytes(), &mut fills, &PipelineConfig::default()).unwrap();
//!
//! assert_eq!(summary.records_written, 1);
//! assert_eq!(fills[0].avg_px, "10.40");
//! ```

use std::borrow::Cow;
use std::io::BufRead;

use fix_types::{DecodeAnomaly, Decoder, DecoderConfig, FillRecord, FixError, FixResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::correlator::{Correlation, CorrelationEngine, EngineStats};
use crate::sink::FillSink;

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Line decoder settings
    pub decoder: DecoderConfig,
}

impl PipelineConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decoder configuration
    pub fn with_decoder(mut self, decoder: DecoderConfig) -> Self {
        self.decoder = decoder;
        self
    }

    /// Set the prefix/body separator
    pub fn with_body_separator(mut self, separator: char) -> Self {
        self.decoder.body_separator = separator;
        self
    }

    /// Enable or disable `^A` normalization
    pub fn with_caret_normalization(mut self, enabled: bool) -> Self {
        self.decoder.normalize_caret = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FixResult<()> {
        self.decoder.validate()?;
        Ok(())
    }
}

/// Counters for a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lines read from the input
    pub lines_read: u64,
    /// Lines without a body separator
    pub lines_without_body: u64,
    /// Field segments dropped for lacking `=`
    pub malformed_fields: u64,
    /// Lines with bytes that are not UTF-8, decoded with replacement characters
    pub invalid_utf8_lines: u64,
    /// Correlation counters
    pub engine: EngineStats,
    /// Records handed to the sink
    pub records_written: u64,
}

/// Run the pipeline over a reader
///
/// Returns the first fatal error. Nothing is written to `sink` unless the
/// whole input was correlated successfully. Bytes that are not UTF-8 are
/// replaced and counted; only a failing reader is an input error.
#[instrument(skip(reader, sink, config))]
pub fn run<R, S>(mut reader: R, sink: &mut S, config: &PipelineConfig) -> FixResult<RunSummary>
where
    R: BufRead,
    S: FillSink + ?Sized,
{
    config.validate()?;

    let decoder = Decoder::with_config(config.decoder.clone());
    let mut engine = CorrelationEngine::new();
    let mut summary = RunSummary::default();
    let mut fills = Vec::new();

    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
            error!(line = line_no + 1, error = %source, "Failed to read input");
            FixError::InputUnavailable { source }
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        summary.lines_read += 1;

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if let Cow::Owned(_) = line {
            summary.invalid_utf8_lines += 1;
            debug!(line = line_no, "Line is not valid UTF-8");
        }

        let decoded = decoder.decode_with_diagnostics(&line);
        for anomaly in &decoded.anomalies {
            match anomaly {
                DecodeAnomaly::MissingBodySeparator => {
                    summary.lines_without_body += 1;
                    debug!(line = line_no, "Line has no FIX body");
                }
                DecodeAnomaly::MalformedField { segment } => {
                    summary.malformed_fields += 1;
                    debug!(line = line_no, segment = %segment, "Dropped field without '='");
                }
            }
        }

        match engine.process(&decoded.fields) {
            Ok(Correlation::Filled(fill)) => fills.push(fill),
            Ok(_) => {}
            Err(err) => {
                error!(line = line_no, error = %err, "Aborting run");
                return Err(err);
            }
        }
    }

    for fill in &fills {
        sink.emit(fill)?;
        summary.records_written += 1;
    }
    sink.finish()?;

    summary.engine = engine.stats().clone();
    info!(
        lines = summary.lines_read,
        fills = summary.records_written,
        unmatched = summary.engine.unmatched_reports,
        "Run complete"
    );

    Ok(summary)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Correlate in-memory lines with the default configuration
pub fn extract_fills<I, L>(lines: I) -> FixResult<Vec<FillRecord>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let decoder = Decoder::new();
    let mut engine = CorrelationEngine::new();
    let mut fills = Vec::new();

    for line in lines {
        if let Correlation::Filled(fill) = engine.process(&decoder.decode(line.as_ref()))? {
            fills.push(fill);
        }
    }

    Ok(fills)
}
