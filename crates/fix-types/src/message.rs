//! Decoded FIX message body

use std::collections::HashMap;

use crate::enums::MsgType;
use crate::error::{FixError, FixResult};
use crate::tag::Tag;

/// Tag/value pairs of a single decoded message
///
/// Keys are the tag numbers in string form exactly as they appeared on the
/// wire. Tags outside [`Tag`] are kept and reachable through [`FieldMap::get_raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value for the same tag
    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(tag.into(), value.into());
    }

    /// Value of a modeled tag
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.get_raw(tag.as_str())
    }

    /// Value of any tag by its string key
    pub fn get_raw(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    /// Value of a tag that must be present
    pub fn require(&self, tag: Tag) -> FixResult<&str> {
        self.get(tag).ok_or(FixError::MissingField { tag })
    }

    /// Returns true if the tag is present (possibly with an empty value)
    pub fn contains(&self, tag: Tag) -> bool {
        self.fields.contains_key(tag.as_str())
    }

    /// Returns true if the tag is present with exactly this value
    pub fn has_value(&self, tag: Tag, value: &str) -> bool {
        self.get(tag) == Some(value)
    }

    /// Parsed message type, if tag 35 is present
    pub fn msg_type(&self) -> Option<MsgType> {
        self.get(Tag::MsgType).map(MsgType::from_fix)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were decoded
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over raw (tag, value) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_and_raw_access() {
        let map: FieldMap = [("35", "D"), ("11", "ord-1"), ("21", "1")].into_iter().collect();

        assert_eq!(map.get(Tag::ClOrdId), Some("ord-1"));
        assert_eq!(map.get_raw("21"), Some("1"));
        assert_eq!(map.msg_type(), Some(MsgType::NewOrderSingle));
        assert!(map.has_value(Tag::MsgType, "D"));
        assert!(!map.contains(Tag::Price));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_require_reports_tag() {
        let map = FieldMap::new();
        let err = map.require(Tag::TransactTime).unwrap_err();
        assert_eq!(err.missing_tag(), Some(Tag::TransactTime));
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = FieldMap::new();
        map.insert("44", "10.00");
        map.insert("44", "10.50");
        assert_eq!(map.get(Tag::Price), Some("10.50"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iter_keeps_unknown_tags() {
        let map: FieldMap = [("35", "8"), ("9999", "custom")].into_iter().collect();

        let mut pairs: Vec<_> = map.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("35", "8"), ("9999", "custom")]);
    }
}
