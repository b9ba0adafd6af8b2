//! FIX tags consumed by the correlation engine
//!
//! Only the handful of tags the engine actually reads are modeled. Anything
//! else in a message is kept opaquely in the [`FieldMap`](crate::FieldMap)
//! and reachable through its raw string lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FIX tag numbers read by the decoder and correlation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Tag {
    /// Tag 6 - AvgPx: average price of all fills on the order
    AvgPx = 6,
    /// Tag 11 - ClOrdID: identifier assigned by the order originator
    ClOrdId = 11,
    /// Tag 30 - LastMkt: venue where the execution took place
    LastMkt = 30,
    /// Tag 35 - MsgType
    MsgType = 35,
    /// Tag 38 - OrderQty
    OrderQty = 38,
    /// Tag 39 - OrdStatus: "2" = Filled
    OrdStatus = 39,
    /// Tag 40 - OrdType: "2" = Limit
    OrdType = 40,
    /// Tag 44 - Price: limit price
    Price = 44,
    /// Tag 54 - Side: "1" = Buy, "2" = Sell
    Side = 54,
    /// Tag 55 - Symbol
    Symbol = 55,
    /// Tag 60 - TransactTime
    TransactTime = 60,
    /// Tag 150 - ExecType: "2" = Fill
    ExecType = 150,
}

impl Tag {
    /// Every modeled tag, in ascending tag-number order
    pub const ALL: [Tag; 12] = [
        Tag::AvgPx,
        Tag::ClOrdId,
        Tag::LastMkt,
        Tag::MsgType,
        Tag::OrderQty,
        Tag::OrdStatus,
        Tag::OrdType,
        Tag::Price,
        Tag::Side,
        Tag::Symbol,
        Tag::TransactTime,
        Tag::ExecType,
    ];

    /// Returns the tag number
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Returns the tag number in the string form used as a [`FieldMap`](crate::FieldMap) key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvgPx => "6",
            Self::ClOrdId => "11",
            Self::LastMkt => "30",
            Self::MsgType => "35",
            Self::OrderQty => "38",
            Self::OrdStatus => "39",
            Self::OrdType => "40",
            Self::Price => "44",
            Self::Side => "54",
            Self::Symbol => "55",
            Self::TransactTime => "60",
            Self::ExecType => "150",
        }
    }

    /// FIX dictionary name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::AvgPx => "AvgPx",
            Self::ClOrdId => "ClOrdID",
            Self::LastMkt => "LastMkt",
            Self::MsgType => "MsgType",
            Self::OrderQty => "OrderQty",
            Self::OrdStatus => "OrdStatus",
            Self::OrdType => "OrdType",
            Self::Price => "Price",
            Self::Side => "Side",
            Self::Symbol => "Symbol",
            Self::TransactTime => "TransactTime",
            Self::ExecType => "ExecType",
        }
    }

    /// Look up a modeled tag by number
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.number() == number)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Tag> for u32 {
    fn from(tag: Tag) -> Self {
        tag.number()
    }
}

impl TryFrom<u32> for Tag {
    type Error = UnknownTag;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| UnknownTag(number.to_string()))
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Tag number outside the modeled set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown FIX tag: {0}")]
pub struct UnknownTag(pub String);
