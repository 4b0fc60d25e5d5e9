//! Explicit argument lists for chain steps.
//!
//! An explicit step receives exactly the arguments the caller lists. To pass
//! the chain's own value somewhere in that list, use the [`Current`] marker;
//! it is replaced by the value the chain holds *before* the step runs.

use smallvec::SmallVec;

use crate::value::Value;

/// Marker standing for the chain's value at the moment a step starts.
///
/// # Examples
///
/// ```rust
/// use chaining::arguments;
/// use chaining::function::{Argument, Current};
///
/// let list = arguments![" ", "_", Current];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[2], Argument::Current);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Current;

/// One entry of an explicit argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// A concrete value, passed as is.
    Value(Value),
    /// The chain's value before the step runs.
    Current,
}

impl Argument {
    /// Replaces a [`Argument::Current`] marker with `current`.
    pub(crate) fn resolve(self, current: impl FnOnce() -> Value) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Current => current(),
        }
    }
}

/// An explicit argument list, built with [`arguments!`](crate::arguments).
pub type ArgumentList = SmallVec<[Argument; 4]>;

impl From<Current> for Argument {
    fn from(_: Current) -> Self {
        Self::Current
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! argument_from_value {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Argument {
                fn from(source: $source) -> Self {
                    Self::Value(Value::from(source))
                }
            }
        )+
    };
}

argument_from_value!(bool, i32, i64, f64, &str, String, Vec<Value>);

/// Builds an [`ArgumentList`] from anything convertible into [`Argument`].
///
/// # Syntax
///
/// - `arguments![]` - An empty list; the step receives no arguments at all
/// - `arguments![a, b, ...]` - Each expression is converted with `Argument::from`
///
/// # Examples
///
/// ```rust
/// use chaining::arguments;
/// use chaining::function::{Argument, Current};
/// use chaining::value::Value;
///
/// let list = arguments!["lovely", "beloved", Current];
/// assert_eq!(list[0], Argument::Value(Value::from("lovely")));
/// assert_eq!(list[2], Argument::Current);
///
/// let empty = arguments![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::function::ArgumentList::new()
    };

    ($($argument:expr),+ $(,)?) => {{
        let mut list = $crate::function::ArgumentList::new();
        $(
            list.push($crate::function::Argument::from($argument));
        )+
        list
    }};
}
