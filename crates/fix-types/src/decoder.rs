//! Tolerant decoder for logged FIX lines
//!
//! A log line looks like `<free text>:<FIX body>`. The body is a sequence of
//! `tag=value` fields separated by SOH (0x01). Logs frequently render SOH as
//! the two characters `^A`, sometimes mixed with real SOH bytes across lines,
//! so the caret form is rewritten to SOH before splitting.
//!
//! Decoding never fails. A line with no body separator yields an empty map,
//! and segments without `=` are dropped. Callers that want to count or log
//! those cases use [`Decoder::decode_with_diagnostics`].
//!
//! # Example
//!
//! ```
//! use fix_types::{decode_line, Tag};
//!
//! let fields = decode_line("IN:35=D^A11=ord-1^A44=10.50");
//! assert_eq!(fields.get(Tag::ClOrdId), Some("ord-1"));
//! assert_eq!(fields.get(Tag::Price), Some("10.50"));
//! ```

use std::borrow::Cow;

use crate::error::ConfigError;
use crate::message::FieldMap;

/// FIX field delimiter
pub const SOH: char = '\u{1}';

/// Printable rendering of SOH found in many log files
pub const CARET_SOH: &str = "^A";

/// Default separator between the log prefix and the FIX body
pub const DEFAULT_BODY_SEPARATOR: char = ':';

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Character ending the free-text prefix (first occurrence wins)
    pub body_separator: char,
    /// Rewrite `^A` to SOH before splitting
    pub normalize_caret: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            body_separator: DEFAULT_BODY_SEPARATOR,
            normalize_caret: true,
        }
    }
}

impl DecoderConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix/body separator
    pub fn with_body_separator(mut self, separator: char) -> Self {
        self.body_separator = separator;
        self
    }

    /// Enable or disable `^A` normalization
    pub fn with_caret_normalization(mut self, enabled: bool) -> Self {
        self.normalize_caret = enabled;
        self
    }

    /// Validate the configuration
    ///
    /// The body separator cannot be a character that is itself part of the
    /// field syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.body_separator {
            SOH | '=' | '^' => Err(ConfigError::InvalidBodySeparator {
                separator: self.body_separator,
            }),
            _ => Ok(()),
        }
    }
}

/// Non-fatal irregularity found while decoding a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeAnomaly {
    /// Line has no body separator; it contributes no fields
    MissingBodySeparator,
    /// Segment has no `=` and was dropped
    MalformedField {
        /// The offending segment
        segment: String,
    },
}

/// Fields decoded from one line plus any anomalies encountered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded fields
    pub fields: FieldMap,
    /// Irregularities, in line order
    pub anomalies: Vec<DecodeAnomaly>,
}

/// Line decoder
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a line into its fields
    pub fn decode(&self, line: &str) -> FieldMap {
        self.decode_with_diagnostics(line).fields
    }

    /// Decode a line, also reporting dropped input
    ///
    /// Blank lines decode to an empty map without an anomaly.
    pub fn decode_with_diagnostics(&self, line: &str) -> Decoded {
        let Some((_, body)) = line.split_once(self.config.body_separator) else {
            let anomalies = if line.trim().is_empty() {
                Vec::new()
            } else {
                vec![DecodeAnomaly::MissingBodySeparator]
            };
            return Decoded {
                fields: FieldMap::new(),
                anomalies,
            };
        };

        // Must happen before the split: a line may use either form
        let body: Cow<'_, str> = if self.config.normalize_caret && body.contains(CARET_SOH) {
            Cow::Owned(body.replace(CARET_SOH, "\u{1}"))
        } else {
            Cow::Borrowed(body)
        };

        let mut decoded = Decoded::default();
        for segment in body.trim().split(SOH) {
            match segment.split_once('=') {
                Some((tag, value)) => decoded.fields.insert(tag, value),
                None if segment.is_empty() => {}
                None => decoded.anomalies.push(DecodeAnomaly::MalformedField {
                    segment: segment.to_string(),
                }),
            }
        }
        decoded
    }
}

/// Decode a line with the default configuration
pub fn decode_line(line: &str) -> FieldMap {
    Decoder::new().decode(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    const ORDER_CARET: &str = "A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50";

    #[test]
    fn test_decode_caret_line() {
        let fields = decode_line(ORDER_CARET);
        assert_eq!(fields.len(), 8);
        assert_eq!(fields.get(Tag::MsgType), Some("D"));
        assert_eq!(fields.get(Tag::OrdType), Some("2"));
        assert_eq!(fields.get(Tag::Symbol), Some("XYZ"));
        assert_eq!(fields.get(Tag::Price), Some("10.50"));
    }

    #[test]
    fn test_soh_and_caret_are_equivalent() {
        let soh = ORDER_CARET.replace("^A", "\u{1}");
        assert_eq!(decode_line(&soh), decode_line(ORDER_CARET));

        // Mixed within one line
        let mixed = "x:35=8\u{1}150=2^A39=2\u{1}40=2";
        let fields = decode_line(mixed);
        assert_eq!(fields.get(Tag::ExecType), Some("2"));
        assert_eq!(fields.get(Tag::OrdStatus), Some("2"));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let a = decode_line("p:35=D^A11=7^A44=1.25");
        let b = decode_line("p:44=1.25^A35=D^A11=7");
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_separator_yields_empty_map() {
        let decoded = Decoder::new().decode_with_diagnostics("35=D^A11=1");
        assert!(decoded.fields.is_empty());
        assert_eq!(decoded.anomalies, vec![DecodeAnomaly::MissingBodySeparator]);

        let blank = Decoder::new().decode_with_diagnostics("   \n");
        assert!(blank.fields.is_empty());
        assert!(blank.anomalies.is_empty());
    }

    #[test]
    fn test_prefix_ends_at_first_colon() {
        // Timestamps in the body contain colons too
        let fields = decode_line("2024-01-02 host: 35=D^A60=20240102-09:30:00.123");
        assert_eq!(fields.get(Tag::TransactTime), Some("20240102-09:30:00.123"));
    }

    #[test]
    fn test_malformed_segments_dropped() {
        let decoded = Decoder::new().decode_with_diagnostics("in:35=D^Agarbage^A11=9^A");
        assert_eq!(decoded.fields.len(), 2);
        assert_eq!(
            decoded.anomalies,
            vec![DecodeAnomaly::MalformedField {
                segment: "garbage".into()
            }]
        );
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let fields = decode_line("in:58=a=b^A35=0");
        assert_eq!(fields.get_raw("58"), Some("a=b"));
    }

    #[test]
    fn test_repeated_tag_last_write_wins() {
        let fields = decode_line("in:11=first^A11=second");
        assert_eq!(fields.get(Tag::ClOrdId), Some("second"));
    }

    #[test]
    fn test_body_whitespace_trimmed() {
        let fields = decode_line("in:  35=8^A30=NYSE \r\n");
        assert_eq!(fields.get(Tag::MsgType), Some("8"));
        assert_eq!(fields.get(Tag::LastMkt), Some("NYSE"));
    }

    #[test]
    fn test_caret_normalization_disabled() {
        let decoder = Decoder::with_config(DecoderConfig::new().with_caret_normalization(false));
        let fields = decoder.decode("in:35=D^A11=1");
        assert_eq!(fields.get(Tag::MsgType), Some("D^A11=1"));
    }

    #[test]
    fn test_custom_body_separator() {
        let config = DecoderConfig::new().with_body_separator('|');
        assert!(config.validate().is_ok());
        let fields = Decoder::with_config(config).decode("12:00:01 | 35=D^A11=1");
        assert_eq!(fields.get(Tag::ClOrdId), Some("1"));
    }

    #[test]
    fn test_config_validation() {
        assert!(DecoderConfig::default().validate().is_ok());
        assert!(matches!(
            DecoderConfig::new().with_body_separator('=').validate(),
            Err(ConfigError::InvalidBodySeparator { separator: '=' })
        ));
        assert!(DecoderConfig::new().with_body_separator(SOH).validate().is_err());
    }
}
