//! Name-based function lookup.
//!
//! A chain resolves [`FunctionRef::Named`](super::FunctionRef::Named) steps
//! through a [`Resolver`]. [`FunctionRegistry`] is the provided resolver: a
//! map from names to boxed callables.
//!
//! The registry's hasher follows the crate features: `fxhash` selects
//! `rustc-hash`, `ahash` selects `ahash`, otherwise the standard library's
//! `RandomState` is used.

use std::collections::HashMap;
use std::fmt;

use super::{Arguments, CallError, Callable, single};
use crate::value::Value;

#[cfg(feature = "fxhash")]
type RegistryHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type RegistryHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type RegistryHasher = std::collections::hash_map::RandomState;

/// Looks up callables by name.
pub trait Resolver {
    /// Returns the callable registered under `name`, if any.
    fn resolve(&self, name: &str) -> Option<&dyn Callable>;

    /// Returns `true` if `name` resolves.
    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// A map from function names to callables.
///
/// # Examples
///
/// ```rust
/// use chaining::function::{FunctionRegistry, Resolver};
/// use chaining::value::Value;
///
/// let mut registry = FunctionRegistry::new();
/// registry.register_unary("negate", |value| match value {
///     Value::Integer(number) => Ok(Value::Integer(-number)),
///     other => Ok(other),
/// });
///
/// assert!(registry.contains("negate"));
/// assert!(!registry.contains("missing"));
/// ```
pub struct FunctionRegistry {
    functions: HashMap<String, Box<dyn Callable>, RegistryHasher>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: HashMap::with_hasher(RegistryHasher::default()),
        }
    }

    /// Creates a registry preloaded with the [standard library](crate::stdlib).
    #[cfg(feature = "stdlib")]
    #[must_use]
    pub fn with_standard_library() -> Self {
        let mut registry = Self::new();
        crate::stdlib::register(&mut registry);
        registry
    }

    /// Registers `function` under `name`, replacing any previous entry.
    ///
    /// The function receives the complete argument list of each call.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(Arguments) -> Result<Value, CallError> + 'static,
    {
        let name = name.into();
        if self.functions.insert(name.clone(), Box::new(function)).is_some() {
            tracing::debug!(function = %name, "replaced registered function");
        }
        self
    }

    /// Registers a single-argument function under `name`.
    ///
    /// Calls with any other number of arguments fail with
    /// [`CallError::Arity`].
    pub fn register_unary<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(Value) -> Result<Value, CallError> + 'static,
    {
        self.register(name, move |arguments: Arguments| function(single(arguments)?))
    }

    /// Removes the function registered under `name`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for FunctionRegistry {
    fn resolve(&self, name: &str) -> Option<&dyn Callable> {
        self.functions.get(name).map(Box::as_ref)
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
