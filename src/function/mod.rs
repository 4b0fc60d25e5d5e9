//! Callables, function references and argument lists.
//!
//! Every function a [`Chain`](crate::chain::Chain) can run implements
//! [`Callable`]: it receives an ordered list of [`Value`]s and returns a new
//! [`Value`] or a [`CallError`]. Closures with the signature
//! `Fn(Arguments) -> Result<Value, CallError>` are callables already.
//!
//! A step names its function with a [`FunctionRef`], either by name (looked up
//! through a [`Resolver`]) or directly.
//!
//! # Examples
//!
//! ```rust
//! use chaining::function::{Arguments, CallError, Callable, expect_arity};
//! use chaining::value::Value;
//!
//! let double = |arguments: Arguments| -> Result<Value, CallError> {
//!     expect_arity(&arguments, 1)?;
//!     match arguments[0] {
//!         Value::Integer(number) => Ok(Value::Integer(number * 2)),
//!         ref other => Err(CallError::failed(format!("cannot double {other}"))),
//!     }
//! };
//!
//! let result = double.invoke(chaining::smallvec::smallvec![Value::Integer(21)]);
//! assert_eq!(result, Ok(Value::Integer(42)));
//! ```

mod argument;
mod registry;

pub use argument::{Argument, ArgumentList, Current};
pub use registry::{FunctionRegistry, Resolver};

use std::borrow::Cow;
use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::value::{Kind, Value};

/// Resolved arguments handed to a [`Callable`].
///
/// Up to four arguments are stored inline.
pub type Arguments = SmallVec<[Value; 4]>;

/// Errors raised by a [`Callable`] while it runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
    /// The number of arguments did not match what the function takes.
    #[error("expected {expected} argument(s), got {actual}")]
    Arity {
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments it received.
        actual: usize,
    },
    /// An argument had the wrong kind.
    #[error("argument {position} must be {expected}, got {actual}")]
    Type {
        /// Zero-based position of the offending argument.
        position: usize,
        /// The kind the function needs.
        expected: Kind,
        /// The kind it received.
        actual: Kind,
    },
    /// Any other failure inside the function.
    #[error("{0}")]
    Failed(String),
}

impl CallError {
    /// Creates a [`CallError::Failed`] from a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A function that can run as a chain step.
pub trait Callable {
    /// Invokes the function with a complete argument list.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] when the function cannot produce a value.
    fn invoke(&self, arguments: Arguments) -> Result<Value, CallError>;
}

impl<F> Callable for F
where
    F: Fn(Arguments) -> Result<Value, CallError>,
{
    fn invoke(&self, arguments: Arguments) -> Result<Value, CallError> {
        self(arguments)
    }
}

static_assertions::assert_obj_safe!(Callable, Resolver);

/// Identifies the function a chain step runs.
#[derive(Clone, Copy)]
pub enum FunctionRef<'a> {
    /// A name looked up through the chain's [`Resolver`].
    Named(&'a str),
    /// A callable passed by reference; it always resolves.
    Direct(&'a dyn Callable),
}

impl<'a> FunctionRef<'a> {
    /// Wraps a callable as a direct reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaining::function::{Arguments, CallError, FunctionRef};
    /// use chaining::value::Value;
    ///
    /// let always_null = |_: Arguments| -> Result<Value, CallError> { Ok(Value::Null) };
    /// let reference = FunctionRef::direct(&always_null);
    /// assert_eq!(reference.label(), "<direct>");
    /// ```
    pub fn direct<C: Callable>(callable: &'a C) -> Self {
        Self::Direct(callable)
    }

    /// Returns the name used in diagnostics and errors.
    #[must_use]
    pub const fn label(&self) -> &'a str {
        match *self {
            Self::Named(name) => name,
            Self::Direct(_) => "<direct>",
        }
    }
}

impl fmt::Debug for FunctionRef<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => formatter.debug_tuple("Named").field(name).finish(),
            Self::Direct(_) => formatter.debug_tuple("Direct").finish_non_exhaustive(),
        }
    }
}

impl<'a> From<&'a str> for FunctionRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a String> for FunctionRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a dyn Callable> for FunctionRef<'a> {
    fn from(callable: &'a dyn Callable) -> Self {
        Self::Direct(callable)
    }
}

/// Checks that exactly `expected` arguments were passed.
///
/// # Errors
///
/// Returns [`CallError::Arity`] on a mismatch.
pub fn expect_arity(arguments: &Arguments, expected: usize) -> Result<(), CallError> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(CallError::Arity {
            expected,
            actual: arguments.len(),
        })
    }
}

/// Takes the only argument out of a single-argument list.
///
/// # Errors
///
/// Returns [`CallError::Arity`] unless exactly one argument was passed.
pub fn single(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    arguments
        .into_iter()
        .next()
        .ok_or(CallError::Arity {
            expected: 1,
            actual: 0,
        })
}

/// Reads the argument at `position` as text.
///
/// # Errors
///
/// Returns [`CallError::Arity`] if the argument is missing and
/// [`CallError::Type`] if it is not string-like.
pub fn text_argument(arguments: &Arguments, position: usize) -> Result<Cow<'_, str>, CallError> {
    let value = arguments.get(position).ok_or(CallError::Arity {
        expected: position + 1,
        actual: arguments.len(),
    })?;
    value.as_text().ok_or(CallError::Type {
        position,
        expected: Kind::String,
        actual: value.kind(),
    })
}

/// Lifts a single-argument callable over a collection.
///
/// The returned callable takes one sequence or mapping and applies `callable`
/// to every element (or every mapping value), keeping order and keys. The
/// first element failure is returned as is.
///
/// # Examples
///
/// ```rust
/// use chaining::function::{Arguments, CallError, Callable, map_each, single};
/// use chaining::smallvec::smallvec;
/// use chaining::value::Value;
///
/// let negate = |arguments: Arguments| -> Result<Value, CallError> {
///     match single(arguments)? {
///         Value::Integer(number) => Ok(Value::Integer(-number)),
///         other => Ok(other),
///     }
/// };
///
/// let negate_all = map_each(negate);
/// let result = negate_all.invoke(smallvec![Value::from(vec![1, 2])]);
/// assert_eq!(result, Ok(Value::from(vec![-1, -2])));
/// ```
pub fn map_each<C: Callable>(callable: C) -> impl Fn(Arguments) -> Result<Value, CallError> {
    move |arguments| invoke_each(&callable, single(arguments)?)
}

/// Invokes `callable` once per element of `collection`.
///
/// Sequences keep their order and mappings their keys. Scalars are rejected
/// with [`CallError::Type`] at position 0.
pub(crate) fn invoke_each(callable: &dyn Callable, collection: Value) -> Result<Value, CallError> {
    match collection {
        Value::Sequence(elements) => elements
            .into_iter()
            .map(|element| callable.invoke(smallvec![element]))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => entries
            .into_iter()
            .map(|(key, element)| Ok::<_, CallError>((key, callable.invoke(smallvec![element])?)))
            .collect::<Result<_, CallError>>()
            .map(Value::Mapping),
        other => Err(CallError::Type {
            position: 0,
            expected: Kind::Sequence,
            actual: other.kind(),
        }),
    }
}
