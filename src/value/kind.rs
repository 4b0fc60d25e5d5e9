//! Runtime category descriptor for chain values.

use std::fmt;

/// The runtime category of a chain's current value.
///
/// [`Kind::Unset`] only describes a chain that has never been given a value;
/// no [`Value`](super::Value) reports it.
///
/// # Examples
///
/// ```rust
/// use chaining::value::Kind;
///
/// assert_eq!(Kind::Sequence.to_string(), "sequence");
/// assert!(Kind::Integer.is_string_like());
/// assert!(!Kind::Mapping.is_string_like());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// The chain holds no value yet.
    Unset,
    /// [`Value::Null`](super::Value::Null).
    Null,
    /// [`Value::Bool`](super::Value::Bool).
    Boolean,
    /// [`Value::Integer`](super::Value::Integer).
    Integer,
    /// [`Value::Float`](super::Value::Float).
    Float,
    /// [`Value::String`](super::Value::String).
    String,
    /// [`Value::Sequence`](super::Value::Sequence).
    Sequence,
    /// [`Value::Mapping`](super::Value::Mapping).
    Mapping,
}

impl Kind {
    /// Returns the lowercase name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }

    /// Returns `true` if values of this kind can be rendered as text.
    #[must_use]
    pub const fn is_string_like(self) -> bool {
        !matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
