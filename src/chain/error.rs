//! Errors and diagnostics produced by a chain.

use crate::function::CallError;
use crate::value::Kind;

/// A step whose function name could not be resolved.
///
/// Under the default policy this is a diagnostic, not a failure: the chain
/// logs it, keeps it in [`Chain::skipped`](super::Chain::skipped) and carries on.
///
/// # Examples
///
/// ```rust
/// use chaining::chain::UnresolvedFunction;
///
/// let diagnostic = UnresolvedFunction::new("strtoupper");
/// assert_eq!(diagnostic.name(), "strtoupper");
/// assert_eq!(
///     diagnostic.to_string(),
///     "the function 'strtoupper' does not exist"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the function '{name}' does not exist")]
pub struct UnresolvedFunction {
    name: String,
}

impl UnresolvedFunction {
    /// Creates a diagnostic for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors returned by chain operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// A named function did not resolve and the chain is strict.
    #[error(transparent)]
    Unresolved(#[from] UnresolvedFunction),
    /// The invoked function itself failed.
    #[error("function '{function}' failed: {source}")]
    Call {
        /// Label of the function that failed.
        function: String,
        /// The function's own error.
        source: CallError,
    },
    /// Text cannot be concatenated onto a sequence or mapping.
    #[error("cannot concatenate text onto a {kind} value")]
    NotStringLike {
        /// Kind of the value the chain holds.
        kind: Kind,
    },
}
