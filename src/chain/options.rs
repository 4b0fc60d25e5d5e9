//! Runtime configuration for a [`Chain`](super::Chain).

/// What a chain does when a named function does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MissingFunctionPolicy {
    /// Log a warning, record the name and leave the value unchanged.
    #[default]
    Skip,
    /// Return [`ChainError::Unresolved`](super::ChainError::Unresolved).
    Fail,
}

/// Options a chain is created with.
///
/// # Examples
///
/// ```rust
/// use chaining::chain::{ChainOptions, MissingFunctionPolicy};
///
/// assert_eq!(ChainOptions::default().missing_function, MissingFunctionPolicy::Skip);
/// assert_eq!(ChainOptions::strict().missing_function, MissingFunctionPolicy::Fail);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainOptions {
    /// Handling of unresolved function names.
    pub missing_function: MissingFunctionPolicy,
}

impl ChainOptions {
    /// Skip unresolved functions. This is the default.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            missing_function: MissingFunctionPolicy::Skip,
        }
    }

    /// Fail on unresolved functions.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            missing_function: MissingFunctionPolicy::Fail,
        }
    }

    /// Returns these options with a different missing-function policy.
    #[must_use]
    pub const fn with_missing_function(self, policy: MissingFunctionPolicy) -> Self {
        Self {
            missing_function: policy,
        }
    }
}
