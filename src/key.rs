//! Entry keys.
//!
//! Every entry of an [`Entries`](crate::Entries) collection is addressed by a
//! [`Key`], which is either an integer (positional collections, re-indexed
//! results) or a string (named collections). The two variants never compare
//! equal to each other: `Key::Int(1) != Key::Str("1".into())`.
//!
//! JSON object member names are always strings, so an integer key is written
//! out as `"1"`. Reading a key back turns a canonical decimal integer string
//! (`"1"`, `"-7"`, but not `"01"`, `"+1"` or `"-0"`) into [`Key::Int`] again;
//! any other string stays a [`Key::Str`].

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// An integer-or-string key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// The integer payload, if this is an integer key.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    /// The string payload, if this is a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Converts the key into a JSON value (number or string).
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Int(i) => Value::from(*i),
            Self::Str(s) => Value::from(s.as_str()),
        }
    }

    /// Parse a textual key: canonical decimal integers become [`Key::Int`],
    /// everything else a [`Key::Str`].
    ///
    /// # Example
    /// ```
    /// use ironchain::Key;
    ///
    /// assert_eq!(Key::parse("42"), Key::Int(42));
    /// assert_eq!(Key::parse("042"), Key::from("042"));
    /// assert_eq!(Key::parse("lang"), Key::from("lang"));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match canonical_int(text) {
            Some(i) => Self::Int(i),
            None => Self::Str(text.to_string()),
        }
    }
}

fn canonical_int(text: &str) -> Option<i64> {
    let i = text.parse::<i64>().ok()?;
    (i.to_string() == text).then_some(i)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        i64::try_from(v)
            .map(Key::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::parse(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        match canonical_int(&v) {
            Some(i) => Ok(Key::Int(i)),
            None => Ok(Key::Str(v)),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Positions past `i64::MAX` saturate to `i64::MAX`; use
/// [`AsKey::to_key`] to reject them instead.
impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

/// Values that can be turned into a [`Key`].
///
/// Used by [`Chain::flip`](crate::Chain::flip), where values become keys.
/// Only integers and strings are usable as keys; `to_key` returns `None` for
/// anything else (floats, booleans, null, arrays and objects in JSON).
pub trait AsKey {
    fn to_key(&self) -> Option<Key>;
}

impl AsKey for Key {
    fn to_key(&self) -> Option<Key> {
        Some(self.clone())
    }
}

impl AsKey for String {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Str(self.clone()))
    }
}

impl AsKey for &str {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Str((*self).to_string()))
    }
}

impl AsKey for i64 {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Int(*self))
    }
}

impl AsKey for i32 {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Int(i64::from(*self)))
    }
}

impl AsKey for u32 {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Int(i64::from(*self)))
    }
}

impl AsKey for usize {
    fn to_key(&self) -> Option<Key> {
        i64::try_from(*self).ok().map(Key::Int)
    }
}

impl AsKey for Value {
    fn to_key(&self) -> Option<Key> {
        match self {
            Self::String(s) => Some(Key::Str(s.clone())),
            Self::Number(n) => n.as_i64().map(Key::Int),
            _ => None,
        }
    }
}
