//! Fill extraction engine for FIX session logs
//!
//! This crate pairs limit orders with the execution reports that complete
//! them and drives decoded log lines through that correlation.
//!
//! # Layers
//!
//! - [`correlator`] - single-pass order/fill matching over decoded messages
//! - [`pipeline`] - reads lines, decodes, correlates, hands fills to a sink
//! - [`sink`] - the [`FillSink`] output boundary
//!
//! # Example
//!
//! ```
//! use fix_engine::extract_fills;
//!
//! let fills = extract_fills([
//!     "A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50",
//!     "B:35=8^A150=2^A39=2^A40=2^A11=1^A60=T2^A6=10.40^A30=NYSE",
//! ])
//! .unwrap();
//!
//! assert_eq!(fills.len(), 1);
//! assert_eq!(fills[0].limit_price, "10.50");
//! ```

pub mod correlator;
pub mod pipeline;
pub mod sink;

// Re-export main types
pub use correlator::{Correlation, CorrelationEngine, EngineStats, IgnoreReason, PendingOrders};
pub use pipeline::{extract_fills, run, PipelineConfig, RunSummary};
pub use sink::FillSink;
