//! Shared types for FIX fill extraction
//!
//! This crate provides the message model and line decoder used across the
//! workspace. It has no logging and performs no I/O.
//!
//! # Key Types
//!
//! - [`Tag`] - The closed set of FIX tags the engine reads
//! - [`FieldMap`] - Decoded tag/value pairs of one message
//! - [`Decoder`], [`decode_line`] - Tolerant `prefix:body` line decoder
//! - [`MsgType`], [`OrdType`], [`ExecType`], [`OrdStatus`] - Code values
//! - [`PendingOrder`], [`FillRecord`] - Correlation state and output
//! - [`FixError`], [`ConfigError`] - Error types

pub mod decoder;
pub mod enums;
pub mod error;
pub mod message;
pub mod order;
pub mod tag;

// Re-export commonly used types
pub use decoder::*;
pub use enums::*;
pub use error::*;
pub use message::*;
pub use order::*;
pub use tag::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
