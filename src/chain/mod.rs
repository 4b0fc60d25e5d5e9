//! The chaining container.
//!
//! A [`Chain`] holds one mutable [`Value`] and threads it through a sequence
//! of functions chosen at call time.
//!
//! # Invocation modes
//!
//! - **Implicit** ([`Chain::add`], [`Chain::apply`]): the function receives
//!   exactly one argument, the current value.
//! - **Explicit** ([`Chain::add_with`], [`Chain::apply_with`]): the function
//!   receives the caller's argument list and nothing else. A
//!   [`Current`](crate::function::Current)
//!   marker in the list stands for the value before the step.
//! - **Element-wise** ([`Chain::add_each`]): the function receives one
//!   element of the current sequence or mapping at a time.
//!
//! `add` stores the function's return value, `apply` discards it and is meant
//! for a final, effectful step.
//!
//! # Missing functions
//!
//! A name that does not resolve is skipped: the chain logs a warning through
//! `tracing`, records an [`UnresolvedFunction`] and keeps its value. Build the
//! chain with [`ChainOptions::strict`] to get [`ChainError::Unresolved`]
//! instead. Failures of a function that did run are always returned.
//!
//! # Examples
//!
//! ```rust
//! use chaining::arguments;
//! use chaining::chain::Chain;
//! use chaining::function::{Current, FunctionRegistry};
//! use chaining::value::Value;
//!
//! # #[cfg(feature = "stdlib")]
//! # fn main() -> Result<(), chaining::chain::ChainError> {
//! let registry = FunctionRegistry::with_standard_library();
//!
//! let mut chain = Chain::with_value(&registry, "a <b>lovely</b> string");
//! chain
//!     .add("html_escape")?
//!     .add_with("replace", arguments!["lovely", "beloved", Current])?;
//!
//! assert_eq!(
//!     chain.get(),
//!     Some(&Value::from("a &lt;b&gt;beloved&lt;/b&gt; string"))
//! );
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "stdlib"))]
//! # fn main() {}
//! ```
//!
//! # Threads
//!
//! A chain borrows its resolver and is mutated through `&mut self`. Give each
//! pipeline its own chain.

mod error;
mod options;

pub use error::{ChainError, UnresolvedFunction};
pub use options::{ChainOptions, MissingFunctionPolicy};

use std::borrow::Cow;
use std::fmt;

use smallvec::smallvec;

use crate::function::{
    Argument, Arguments, CallError, Callable, FunctionRef, Resolver, invoke_each,
};
use crate::value::{Kind, Value};

/// A single mutable value plus the functions that transform it.
pub struct Chain<'r> {
    current: Option<Value>,
    resolver: &'r dyn Resolver,
    options: ChainOptions,
    skipped: Vec<UnresolvedFunction>,
}

impl<'r> Chain<'r> {
    /// Creates an unset chain that resolves names through `resolver`.
    #[must_use]
    pub fn new(resolver: &'r dyn Resolver) -> Self {
        Self {
            current: None,
            resolver,
            options: ChainOptions::default(),
            skipped: Vec::new(),
        }
    }

    /// Creates a chain holding `value`.
    #[must_use]
    pub fn with_value(resolver: &'r dyn Resolver, value: impl Into<Value>) -> Self {
        let mut chain = Self::new(resolver);
        chain.current = Some(value.into());
        chain
    }

    /// Replaces the chain's options.
    #[must_use]
    pub fn with_options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the chain's options.
    #[must_use]
    pub const fn options(&self) -> &ChainOptions {
        &self.options
    }

    /// Replaces the current value.
    pub fn set(&mut self, value: impl Into<Value>) -> &mut Self {
        self.current = Some(value.into());
        self
    }

    /// Returns the current value, or `None` if the chain was never set.
    #[must_use]
    pub const fn get(&self) -> Option<&Value> {
        self.current.as_ref()
    }

    /// Consumes the chain and returns its value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.current
    }

    /// Returns `true` once the chain holds a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Returns a copy of the current value as it is right now.
    ///
    /// An unset chain yields [`Value::Null`]. Use this when an argument list is
    /// built between two steps; inside a single expression, the
    /// [`Current`](crate::function::Current) marker gives the same result.
    #[must_use]
    pub fn me(&self) -> Value {
        self.current.clone().unwrap_or_default()
    }

    /// Returns the category of the current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaining::chain::Chain;
    /// use chaining::function::FunctionRegistry;
    /// use chaining::value::Kind;
    ///
    /// let registry = FunctionRegistry::new();
    /// let mut chain = Chain::new(&registry);
    /// assert_eq!(chain.kind(), Kind::Unset);
    ///
    /// chain.set(vec![1, 2, 3]);
    /// assert_eq!(chain.kind(), Kind::Sequence);
    /// ```
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.current.as_ref().map_or(Kind::Unset, Value::kind)
    }

    /// Returns the unresolved functions this chain skipped, oldest first.
    #[must_use]
    pub fn skipped(&self) -> &[UnresolvedFunction] {
        &self.skipped
    }

    /// Drains the skipped-function diagnostics, leaving the list empty.
    ///
    /// A long-lived chain should drain this periodically; every skipped step
    /// adds an entry.
    pub fn take_skipped(&mut self) -> Vec<UnresolvedFunction> {
        std::mem::take(&mut self.skipped)
    }

    /// Runs `function` on the current value and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Call`] if the function fails and
    /// [`ChainError::Unresolved`] if the name does not resolve under a strict
    /// policy. The value is unchanged in both cases.
    pub fn add<'f>(&mut self, function: impl Into<FunctionRef<'f>>) -> Result<&mut Self, ChainError> {
        if let Some(value) = self.invoke(function.into(), None)? {
            self.current = Some(value);
        }
        Ok(self)
    }

    /// Runs `function` with an explicit argument list and stores the result.
    ///
    /// The current value is only passed where the list contains
    /// [`Current`](crate::function::Current).
    /// An empty list calls the function with no arguments.
    ///
    /// # Errors
    ///
    /// Same as [`Chain::add`].
    pub fn add_with<'f, I>(
        &mut self,
        function: impl Into<FunctionRef<'f>>,
        arguments: I,
    ) -> Result<&mut Self, ChainError>
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        let arguments = self.resolve_arguments(arguments);
        if let Some(value) = self.invoke(function.into(), Some(arguments))? {
            self.current = Some(value);
        }
        Ok(self)
    }

    /// Runs `function` on every element of a sequence, or every value of a
    /// mapping, and stores the collection of results.
    ///
    /// This is the element-wise form of [`Chain::add`]: a name is resolved
    /// once and the callable is invoked with one element at a time. Order and
    /// mapping keys are kept. See also [`map_each`](crate::function::map_each)
    /// for a callable passed directly.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Call`] if the current value is not a collection
    /// or an element fails, and [`ChainError::Unresolved`] under a strict
    /// policy. The value is unchanged in every error case.
    pub fn add_each<'f>(&mut self, function: impl Into<FunctionRef<'f>>) -> Result<&mut Self, ChainError> {
        let function = function.into();
        let Some(callable) = lookup(self.resolver, function) else {
            self.unresolved(function.label())?;
            return Ok(self);
        };

        tracing::trace!(function = function.label(), kind = %self.kind(), "element-wise step");
        let value = invoke_each(callable, self.me()).map_err(|source| ChainError::Call {
            function: function.label().to_owned(),
            source,
        })?;
        self.current = Some(value);
        Ok(self)
    }

    /// Runs `function` on the current value for its side effects.
    ///
    /// The return value is discarded and the current value never changes.
    /// Further steps can still be chained, but `apply` reads best as the last
    /// link.
    ///
    /// # Errors
    ///
    /// Same as [`Chain::add`].
    pub fn apply<'f>(&mut self, function: impl Into<FunctionRef<'f>>) -> Result<&mut Self, ChainError> {
        self.invoke(function.into(), None)?;
        Ok(self)
    }

    /// Runs `function` with an explicit argument list for its side effects.
    ///
    /// # Errors
    ///
    /// Same as [`Chain::add`].
    pub fn apply_with<'f, I>(
        &mut self,
        function: impl Into<FunctionRef<'f>>,
        arguments: I,
    ) -> Result<&mut Self, ChainError>
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        let arguments = self.resolve_arguments(arguments);
        self.invoke(function.into(), Some(arguments))?;
        Ok(self)
    }

    /// Appends `text` to the current value.
    ///
    /// Scalars are rendered with [`Value::as_text`]; an unset chain counts as
    /// empty. The result is always a [`Value::String`].
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotStringLike`] for sequences and mappings.
    pub fn append_string(&mut self, text: impl AsRef<str>) -> Result<&mut Self, ChainError> {
        let joined = format!("{}{}", self.current_text()?, text.as_ref());
        self.current = Some(Value::String(joined));
        Ok(self)
    }

    /// Prepends `text` to the current value.
    ///
    /// # Errors
    ///
    /// Same as [`Chain::append_string`].
    pub fn prepend_string(&mut self, text: impl AsRef<str>) -> Result<&mut Self, ChainError> {
        let joined = format!("{}{}", text.as_ref(), self.current_text()?);
        self.current = Some(Value::String(joined));
        Ok(self)
    }

    fn current_text(&self) -> Result<Cow<'_, str>, ChainError> {
        let kind = self.kind();
        if !kind.is_string_like() {
            return Err(ChainError::NotStringLike { kind });
        }
        Ok(self
            .current
            .as_ref()
            .and_then(Value::as_text)
            .unwrap_or_default())
    }

    fn resolve_arguments<I>(&self, arguments: I) -> Arguments
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        arguments
            .into_iter()
            .map(|argument| argument.into().resolve(|| self.me()))
            .collect()
    }

    fn invoke(
        &mut self,
        function: FunctionRef<'_>,
        arguments: Option<Arguments>,
    ) -> Result<Option<Value>, ChainError> {
        let Some(callable) = lookup(self.resolver, function) else {
            return self.unresolved(function.label());
        };

        let arguments = match arguments {
            Some(arguments) => {
                tracing::trace!(function = function.label(), count = arguments.len(), "explicit step");
                arguments
            }
            None => {
                tracing::trace!(function = function.label(), kind = %self.kind(), "implicit step");
                smallvec![self.me()]
            }
        };

        callable
            .invoke(arguments)
            .map(Some)
            .map_err(|source: CallError| ChainError::Call {
                function: function.label().to_owned(),
                source,
            })
    }

    fn unresolved(&mut self, name: &str) -> Result<Option<Value>, ChainError> {
        let unresolved = UnresolvedFunction::new(name);
        match self.options.missing_function {
            MissingFunctionPolicy::Skip => {
                tracing::warn!(function = name, "function does not exist, step skipped");
                self.skipped.push(unresolved);
                Ok(None)
            }
            MissingFunctionPolicy::Fail => Err(unresolved.into()),
        }
    }
}

fn lookup<'c>(resolver: &'c dyn Resolver, function: FunctionRef<'c>) -> Option<&'c dyn Callable> {
    match function {
        FunctionRef::Named(name) => resolver.resolve(name),
        FunctionRef::Direct(callable) => Some(callable),
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("current", &self.current)
            .field("options", &self.options)
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}
