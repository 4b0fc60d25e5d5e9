//! Dynamic values carried through a chain.
//!
//! A [`Chain`](crate::chain::Chain) holds exactly one [`Value`]. Steps may
//! change the variant freely, so a chain can start with a string, split it into
//! a sequence and join it back into a string.
//!
//! # Examples
//!
//! ```rust
//! use chaining::value::{Kind, Value};
//!
//! let text = Value::from("hello");
//! assert_eq!(text.kind(), Kind::String);
//!
//! let words = Value::from(vec!["hello", "world"]);
//! assert_eq!(words.kind(), Kind::Sequence);
//! assert_eq!(format!("{words}"), "[hello, world]");
//! ```

mod kind;

pub use kind::Kind;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A value of one of the categories a chain can hold.
///
/// The set of variants is closed. Anything that does not fit a scalar is
/// expressed as a [`Sequence`](Value::Sequence) or a
/// [`Mapping`](Value::Mapping).
///
/// With the `serde` feature, values map onto self-describing formats without
/// a variant tag. Whole numbers that fit in an `i64` become
/// [`Integer`](Value::Integer); larger unsigned numbers fall through to
/// [`Float`](Value::Float) and lose precision, so they do not round-trip.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// String-keyed values, ordered by key.
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the runtime category of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaining::value::{Kind, Value};
    ///
    /// assert_eq!(Value::Null.kind(), Kind::Null);
    /// assert_eq!(Value::from(3.5).kind(), Kind::Float);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Sequence`].
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries if this is a [`Value::Mapping`].
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Renders a string-like value as text.
    ///
    /// Strings are borrowed, numbers are written in decimal, booleans as
    /// `true`/`false` and `Null` as the empty string. Sequences and mappings
    /// are not string-like and yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaining::value::Value;
    ///
    /// assert_eq!(Value::from("abc").as_text().as_deref(), Some("abc"));
    /// assert_eq!(Value::from(42).as_text().as_deref(), Some("42"));
    /// assert_eq!(Value::Null.as_text().as_deref(), Some(""));
    /// assert_eq!(Value::Sequence(vec![]).as_text(), None);
    /// ```
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("")),
            Self::Bool(flag) => Some(Cow::Borrowed(if *flag { "true" } else { "false" })),
            Self::Integer(number) => Some(Cow::Owned(number.to_string())),
            Self::Float(number) => Some(Cow::Owned(number.to_string())),
            Self::String(text) => Some(Cow::Borrowed(text)),
            Self::Sequence(_) | Self::Mapping(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "{text}"),
            Self::Sequence(elements) => {
                write!(formatter, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
            Self::Mapping(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(text: Cow<'_, str>) -> Self {
        Self::String(text.into_owned())
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::Sequence(iterator.into_iter().map(Into::into).collect())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Kind
    // =========================================================================

    #[rstest]
    #[case(Value::Null, Kind::Null)]
    #[case(Value::Bool(true), Kind::Boolean)]
    #[case(Value::Integer(1), Kind::Integer)]
    #[case(Value::Float(1.5), Kind::Float)]
    #[case(Value::from("text"), Kind::String)]
    #[case(Value::Sequence(vec![]), Kind::Sequence)]
    #[case(Value::Mapping(BTreeMap::new()), Kind::Mapping)]
    fn kind_matches_variant(#[case] value: Value, #[case] expected: Kind) {
        assert_eq!(value.kind(), expected);
    }

    // =========================================================================
    // Text coercion
    // =========================================================================

    #[rstest]
    #[case(Value::Null, Some(""))]
    #[case(Value::Bool(true), Some("true"))]
    #[case(Value::Bool(false), Some("false"))]
    #[case(Value::Integer(-7), Some("-7"))]
    #[case(Value::Float(2.5), Some("2.5"))]
    #[case(Value::from("plain"), Some("plain"))]
    #[case(Value::Sequence(vec![Value::Integer(1)]), None)]
    #[case(Value::Mapping(BTreeMap::new()), None)]
    fn as_text_coerces_scalars_only(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(value.as_text().as_deref(), expected);
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Bool(false))]
    #[case(Value::Integer(0))]
    #[case(Value::Float(0.5))]
    #[case(Value::from(""))]
    #[case(Value::Sequence(vec![]))]
    #[case(Value::Mapping(BTreeMap::new()))]
    fn as_text_agrees_with_kind(#[case] value: Value) {
        assert_eq!(value.as_text().is_some(), value.kind().is_string_like());
    }

    #[rstest]
    fn as_text_borrows_strings() {
        let value = Value::from("borrowed");
        assert!(matches!(value.as_text(), Some(Cow::Borrowed("borrowed"))));
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[rstest]
    fn display_nested_sequence() {
        let value = Value::from(vec![
            Value::Integer(1),
            Value::from(vec!["a", "b"]),
            Value::Null,
        ]);
        assert_eq!(format!("{value}"), "[1, [a, b], null]");
    }

    #[rstest]
    fn display_mapping_is_ordered_by_key() {
        let value = Value::from(BTreeMap::from([("beta", 2), ("alpha", 1)]));
        assert_eq!(format!("{value}"), "{alpha: 1, beta: 2}");
    }

    #[rstest]
    fn display_empty_containers() {
        assert_eq!(format!("{}", Value::Sequence(vec![])), "[]");
        assert_eq!(format!("{}", Value::Mapping(BTreeMap::new())), "{}");
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    #[rstest]
    fn from_option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[rstest]
    fn collect_into_sequence() {
        let value: Value = (1..=3).map(i64::from).collect();
        assert_eq!(
            value,
            Value::Sequence(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        );
    }

    #[rstest]
    fn accessors_reject_other_variants() {
        let value = Value::Integer(4);
        assert_eq!(value.as_integer(), Some(4));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_sequence(), None);
        assert_eq!(value.as_mapping(), None);
        assert!(!value.is_null());
        assert!(Value::default().is_null());
    }
}
