//! Pending limit orders and correlated fill records
//!
//! All attributes are carried as the strings seen on the wire. Numeric and
//! timestamp interpretation is left to the consumer; [`FillRecord`] offers
//! helpers for the two per-fill measures the downstream statistics use.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FixResult;
use crate::message::FieldMap;
use crate::tag::Tag;

/// A submitted limit order awaiting its fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrder {
    /// Client order ID (tag 11)
    pub cl_ord_id: String,
    /// Order transact time (tag 60)
    pub transact_time: String,
    /// Symbol (tag 55)
    pub symbol: String,
    /// Side (tag 54)
    pub side: String,
    /// Order quantity (tag 38)
    pub order_qty: String,
    /// Limit price (tag 44)
    pub limit_price: String,
}

impl PendingOrder {
    /// Build from a New Order Single body
    ///
    /// The client order ID is passed separately because the caller has
    /// already validated it. The remaining tags are required in the order
    /// 60, 55, 54, 38, 44; the first absent one is reported.
    pub fn from_new_order(cl_ord_id: &str, fields: &FieldMap) -> FixResult<Self> {
        Ok(Self {
            cl_ord_id: cl_ord_id.to_string(),
            transact_time: fields.require(Tag::TransactTime)?.to_string(),
            symbol: fields.require(Tag::Symbol)?.to_string(),
            side: fields.require(Tag::Side)?.to_string(),
            order_qty: fields.require(Tag::OrderQty)?.to_string(),
            limit_price: fields.require(Tag::Price)?.to_string(),
        })
    }
}

/// A limit order matched with its fully-filled execution report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRecord {
    #[serde(rename = "OrderID")]
    pub order_id: String,
    #[serde(rename = "OrderTransactTime")]
    pub order_transact_time: String,
    #[serde(rename = "ExecutionTransactTime")]
    pub execution_transact_time: String,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Side")]
    pub side: String,
    #[serde(rename = "OrderQty")]
    pub order_qty: String,
    #[serde(rename = "LimitPrice")]
    pub limit_price: String,
    /// Average execution price (tag 6)
    #[serde(rename = "AvgPx")]
    pub avg_px: String,
    /// Execution venue (tag 30)
    #[serde(rename = "LastMkt")]
    pub last_mkt: String,
}

impl FillRecord {
    /// Output column names, in field order
    pub const COLUMNS: [&'static str; 9] = [
        "OrderID",
        "OrderTransactTime",
        "ExecutionTransactTime",
        "Symbol",
        "Side",
        "OrderQty",
        "LimitPrice",
        "AvgPx",
        "LastMkt",
    ];

    /// Combine a stored order with the body of its execution report
    ///
    /// Requires tags 60, 6, 30 on the execution report, in that order.
    pub fn from_execution(order: &PendingOrder, fields: &FieldMap) -> FixResult<Self> {
        Ok(Self {
            order_id: order.cl_ord_id.clone(),
            order_transact_time: order.transact_time.clone(),
            execution_transact_time: fields.require(Tag::TransactTime)?.to_string(),
            symbol: order.symbol.clone(),
            side: order.side.clone(),
            order_qty: order.order_qty.clone(),
            limit_price: order.limit_price.clone(),
            avg_px: fields.require(Tag::AvgPx)?.to_string(),
            last_mkt: fields.require(Tag::LastMkt)?.to_string(),
        })
    }

    /// Values in [`FillRecord::COLUMNS`] order
    pub fn values(&self) -> [&str; 9] {
        [
            self.order_id.as_str(),
            self.order_transact_time.as_str(),
            self.execution_transact_time.as_str(),
            self.symbol.as_str(),
            self.side.as_str(),
            self.order_qty.as_str(),
            self.limit_price.as_str(),
            self.avg_px.as_str(),
            self.last_mkt.as_str(),
        ]
    }

    /// Limit price as a decimal, if numeric
    pub fn limit_price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.limit_price)
    }

    /// Average execution price as a decimal, if numeric
    pub fn avg_px_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.avg_px)
    }

    /// Absolute distance between the limit price and the average fill price
    pub fn price_improvement(&self) -> Option<Decimal> {
        Some((self.limit_price_decimal()? - self.avg_px_decimal()?).abs())
    }

    /// Time from order submission to execution
    ///
    /// Negative if the execution is stamped before the order.
    pub fn execution_latency(&self) -> Option<chrono::Duration> {
        let ordered = parse_transact_time(&self.order_transact_time)?;
        let executed = parse_transact_time(&self.execution_transact_time)?;
        Some(executed - ordered)
    }

    /// [`FillRecord::execution_latency`] in fractional seconds
    pub fn execution_latency_secs(&self) -> Option<f64> {
        self.execution_latency()
            .map(|d| d.num_microseconds().unwrap_or(i64::MAX) as f64 / 1_000_000.0)
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// FIX UTCTimestamp first, then ISO-like layouts seen in exported logs.
/// `%.f` also matches an absent fraction.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y%m%d-%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a transact time (tag 60)
///
/// Accepts the FIX UTCTimestamp form (`20240102-09:30:00.123`), RFC 3339
/// (converted to UTC), and `2024-01-02 09:30:00[.f]`.
pub fn parse_transact_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}
