//! Order/Fill Correlation Engine
//!
//! Tracks limit orders submitted via New Order Single and pairs them with the
//! execution report that completes them. Messages must be fed in log order:
//! an execution report can only be matched against orders already seen.
//!
//! # Selection Rules
//!
//! ```text
//! 35=D, 40=2                      -> track order (11, 60, 55, 54, 38, 44)
//! 35=8, 150=2, 39=2, 40=2, 11=k   -> emit fill if k is tracked (60, 6, 30)
//! anything else                   -> ignored
//! ```
//!
//! Tracked orders are never removed. A second New Order Single with the same
//! ClOrdID replaces the stored order, and a repeated fully-filled report for
//! the same ClOrdID emits another fill from the stored order.
//!
//! # Example
//!
//! ```
//! use fix_engine::{Correlation, CorrelationEngine};
//! use fix_types::decode_line;
//!
//! let mut engine = CorrelationEngine::new();
//!
//! engine
//!     .process(&decode_line("A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50"))
//!     .unwrap();
//! let outcome = engine
//!     .process(&decode_line("B:35=8^A150=2^A39=2^A40=2^A11=1^A60=T2^A6=10.40^A30=NYSE"))
//!     .unwrap();
//!
//! match outcome {
//!     Correlation::Filled(fill) => assert_eq!(fill.last_mkt, "NYSE"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

use fix_types::{
    ExecType, FieldMap, FillRecord, FixResult, MsgType, OrdStatus, OrdType, PendingOrder, Tag,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Why a message produced no state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Tag 35 absent (includes lines that decoded to nothing)
    NoMsgType,
    /// Message type the engine does not correlate
    UnsupportedMsgType(MsgType),
    /// Order type other than limit
    NotLimitOrder,
    /// Execution report for a partial fill, cancel, or other non-final event
    NotFullyFilled,
    /// New Order Single with an empty ClOrdID
    EmptyClOrdId,
}

/// Result of feeding one message to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correlation {
    /// A limit order was stored
    OrderTracked {
        /// ClOrdID of the stored order
        cl_ord_id: String,
        /// True if an order with the same ClOrdID was overwritten
        replaced: bool,
    },
    /// A fully-filled execution report matched a stored order
    Filled(FillRecord),
    /// A qualifying execution report had no matching order
    Unmatched {
        /// ClOrdID from the report, if present
        cl_ord_id: Option<String>,
    },
    /// Message was not relevant to correlation
    Ignored(IgnoreReason),
}

impl Correlation {
    /// The fill, if this outcome produced one
    pub fn into_fill(self) -> Option<FillRecord> {
        match self {
            Self::Filled(fill) => Some(fill),
            _ => None,
        }
    }

    /// Returns true if a fill was produced
    pub fn is_fill(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Limit orders keyed by ClOrdID
#[derive(Debug, Clone, Default)]
pub struct PendingOrders {
    orders: HashMap<String, PendingOrder>,
}

impl PendingOrders {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an order, returning the one it replaced
    pub fn insert(&mut self, order: PendingOrder) -> Option<PendingOrder> {
        self.orders.insert(order.cl_ord_id.clone(), order)
    }

    /// Look up an order by ClOrdID
    pub fn get(&self, cl_ord_id: &str) -> Option<&PendingOrder> {
        self.orders.get(cl_ord_id)
    }

    /// Returns true if the ClOrdID is tracked
    pub fn contains(&self, cl_ord_id: &str) -> bool {
        self.orders.contains_key(cl_ord_id)
    }

    /// Number of tracked orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no orders are tracked
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over tracked orders in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &PendingOrder> {
        self.orders.values()
    }
}

impl FromIterator<PendingOrder> for PendingOrders {
    fn from_iter<I: IntoIterator<Item = PendingOrder>>(iter: I) -> Self {
        let mut table = Self::new();
        for order in iter {
            table.insert(order);
        }
        table
    }
}

/// Engine statistics
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Messages fed to the engine
    pub messages_processed: u64,
    /// New Order Single messages stored (including replacements)
    pub orders_tracked: u64,
    /// Stored orders that overwrote an existing ClOrdID
    pub orders_replaced: u64,
    /// Fill records produced
    pub fills_emitted: u64,
    /// Qualifying execution reports with no known order
    pub unmatched_reports: u64,
    /// Messages ignored for any reason
    pub ignored_messages: u64,
}

/// Order/fill correlation engine
///
/// Owns the pending-order table exclusively. Use
/// [`CorrelationEngine::with_pending`] to resume from a table built elsewhere
/// and [`CorrelationEngine::into_pending`] to take it back.
#[derive(Debug, Default)]
pub struct CorrelationEngine {
    pending: PendingOrders,
    stats: EngineStats,
}

impl CorrelationEngine {
    /// Create an engine with an empty order table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that starts from an existing order table
    pub fn with_pending(pending: PendingOrders) -> Self {
        Self {
            pending,
            stats: EngineStats::default(),
        }
    }

    /// Feed one decoded message
    ///
    /// Returns [`fix_types::FixError::MissingField`] when a message has entered a
    /// correlation branch but lacks a tag the output record needs. The order
    /// table is unchanged in that case.
    #[instrument(skip(self, fields))]
    pub fn process(&mut self, fields: &FieldMap) -> FixResult<Correlation> {
        self.stats.messages_processed += 1;

        let outcome = match fields.msg_type() {
            None => Correlation::Ignored(IgnoreReason::NoMsgType),
            Some(MsgType::NewOrderSingle) => self.on_new_order(fields)?,
            Some(MsgType::ExecutionReport) => self.on_execution_report(fields)?,
            Some(other) => Correlation::Ignored(IgnoreReason::UnsupportedMsgType(other)),
        };

        match &outcome {
            Correlation::OrderTracked { replaced, .. } => {
                self.stats.orders_tracked += 1;
                if *replaced {
                    self.stats.orders_replaced += 1;
                }
            }
            Correlation::Filled(_) => self.stats.fills_emitted += 1,
            Correlation::Unmatched { .. } => self.stats.unmatched_reports += 1,
            Correlation::Ignored(_) => self.stats.ignored_messages += 1,
        }

        Ok(outcome)
    }

    fn on_new_order(&mut self, fields: &FieldMap) -> FixResult<Correlation> {
        if !is_limit(fields) {
            return Ok(Correlation::Ignored(IgnoreReason::NotLimitOrder));
        }

        let cl_ord_id = fields.require(Tag::ClOrdId)?;
        if cl_ord_id.is_empty() {
            warn!("New Order Single with empty ClOrdID skipped");
            return Ok(Correlation::Ignored(IgnoreReason::EmptyClOrdId));
        }

        let order = PendingOrder::from_new_order(cl_ord_id, fields)?;
        let cl_ord_id = order.cl_ord_id.clone();
        let replaced = self.pending.insert(order).is_some();

        if replaced {
            warn!(cl_ord_id = %cl_ord_id, "ClOrdID reused, stored order replaced");
        } else {
            debug!(cl_ord_id = %cl_ord_id, "Limit order tracked");
        }

        Ok(Correlation::OrderTracked {
            cl_ord_id,
            replaced,
        })
    }

    fn on_execution_report(&self, fields: &FieldMap) -> FixResult<Correlation> {
        if !is_full_fill(fields) {
            return Ok(Correlation::Ignored(IgnoreReason::NotFullyFilled));
        }
        if !is_limit(fields) {
            return Ok(Correlation::Ignored(IgnoreReason::NotLimitOrder));
        }

        let Some(cl_ord_id) = fields.get(Tag::ClOrdId) else {
            debug!("Fill without ClOrdID");
            return Ok(Correlation::Unmatched { cl_ord_id: None });
        };

        let Some(order) = self.pending.get(cl_ord_id) else {
            debug!(cl_ord_id = %cl_ord_id, "Fill for unknown order");
            return Ok(Correlation::Unmatched {
                cl_ord_id: Some(cl_ord_id.to_string()),
            });
        };

        let fill = FillRecord::from_execution(order, fields)?;
        debug!(
            cl_ord_id = %fill.order_id,
            avg_px = %fill.avg_px,
            last_mkt = %fill.last_mkt,
            "Fill correlated"
        );
        Ok(Correlation::Filled(fill))
    }

    /// Tracked orders
    pub fn pending(&self) -> &PendingOrders {
        &self.pending
    }

    /// Consume the engine, returning its order table
    pub fn into_pending(self) -> PendingOrders {
        self.pending
    }

    /// Engine statistics
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }
}

fn is_limit(fields: &FieldMap) -> bool {
    fields
        .get(Tag::OrdType)
        .map(OrdType::from_fix)
        .is_some_and(|t| t.is_limit())
}

fn is_full_fill(fields: &FieldMap) -> bool {
    let exec_type = fields.get(Tag::ExecType).map(ExecType::from_fix);
    let ord_status = fields.get(Tag::OrdStatus).map(OrdStatus::from_fix);
    exec_type == Some(ExecType::Fill) && ord_status.is_some_and(|s| s.is_fully_filled())
}
