//! MsgType, OrdType, ExecType, and OrdStatus code values
//!
//! Each enum keeps unrecognized wire values in an `Other` variant so that
//! decoding a code never fails; the engine only branches on the few values it
//! cares about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message type (tag 35)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MsgType {
    /// "D" - New Order Single
    NewOrderSingle,
    /// "8" - Execution Report
    ExecutionReport,
    /// "F" - Order Cancel Request
    OrderCancelRequest,
    /// "G" - Order Cancel/Replace Request
    OrderCancelReplaceRequest,
    /// Any other message type
    Other(String),
}

impl MsgType {
    /// Parse from the tag 35 wire value
    pub fn from_fix(value: &str) -> Self {
        match value {
            "D" => Self::NewOrderSingle,
            "8" => Self::ExecutionReport,
            "F" => Self::OrderCancelRequest,
            "G" => Self::OrderCancelReplaceRequest,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire value for tag 35
    pub fn as_fix(&self) -> &str {
        match self {
            Self::NewOrderSingle => "D",
            Self::ExecutionReport => "8",
            Self::OrderCancelRequest => "F",
            Self::OrderCancelReplaceRequest => "G",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_fix())
    }
}

/// Order type (tag 40)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OrdType {
    /// "1"
    Market,
    /// "2"
    Limit,
    /// "3"
    Stop,
    /// "4"
    StopLimit,
    /// Any other order type
    Other(String),
}

impl OrdType {
    /// Parse from the tag 40 wire value
    pub fn from_fix(value: &str) -> Self {
        match value {
            "1" => Self::Market,
            "2" => Self::Limit,
            "3" => Self::Stop,
            "4" => Self::StopLimit,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for a plain limit order
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::Limit)
    }
}

/// Execution type (tag 150)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExecType {
    /// "0"
    New,
    /// "1"
    PartialFill,
    /// "2"
    Fill,
    /// "4"
    Canceled,
    /// "5"
    Replaced,
    /// "8"
    Rejected,
    /// "F" (FIX 4.4 trade)
    Trade,
    /// Any other execution type
    Other(String),
}

impl ExecType {
    /// Parse from the tag 150 wire value
    pub fn from_fix(value: &str) -> Self {
        match value {
            "0" => Self::New,
            "1" => Self::PartialFill,
            "2" => Self::Fill,
            "4" => Self::Canceled,
            "5" => Self::Replaced,
            "8" => Self::Rejected,
            "F" => Self::Trade,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Order status (tag 39)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OrdStatus {
    /// "0"
    New,
    /// "1"
    PartiallyFilled,
    /// "2"
    Filled,
    /// "4"
    Canceled,
    /// "8"
    Rejected,
    /// Any other status
    Other(String),
}

impl OrdStatus {
    /// Parse from the tag 39 wire value
    pub fn from_fix(value: &str) -> Self {
        match value {
            "0" => Self::New,
            "1" => Self::PartiallyFilled,
            "2" => Self::Filled,
            "4" => Self::Canceled,
            "8" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true if the order has no remaining quantity
    pub fn is_fully_filled(&self) -> bool {
        matches!(self, Self::Filled)
    }
}
