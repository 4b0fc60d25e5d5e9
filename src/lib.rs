//! # chaining
//!
//! Fluent function chaining over a single mutable value.
//!
//! ## Overview
//!
//! A [`Chain`](chain::Chain) holds one [`Value`](value::Value) and applies a
//! sequence of functions to it without nesting calls:
//!
//! - **Values**: a closed variant over null, booleans, numbers, strings,
//!   sequences and mappings
//! - **Functions**: anything implementing [`Callable`](function::Callable),
//!   referenced by name through a [`Resolver`](function::Resolver) or passed
//!   directly
//! - **Chain**: `add` stores each result, `apply` runs a function for its
//!   side effects only
//! - **Standard library**: string and sequence helpers for demonstrations
//!
//! Steps whose function name does not resolve are skipped with a warning so a
//! misspelled step never aborts the pipeline.
//!
//! ## Feature Flags
//!
//! - `stdlib`: the standard function library (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for values, kinds and options
//! - `fxhash`: use `rustc-hash` for the function registry
//! - `ahash`: use `ahash` for the function registry
//! - `full`: `stdlib` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use chaining::prelude::*;
//!
//! # fn main() -> Result<(), ChainError> {
//! let mut registry = FunctionRegistry::new();
//! registry.register_unary("shout", |value| {
//!     let text = value.as_text().unwrap_or_default().to_uppercase();
//!     Ok(Value::from(text))
//! });
//!
//! let mut chain = Chain::with_value(&registry, "hello world");
//! chain.add("shout")?.add("not_a_function")?.append_string("!")?;
//!
//! assert_eq!(chain.get(), Some(&Value::from("HELLO WORLD!")));
//! assert_eq!(chain.skipped()[0].name(), "not_a_function");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use chaining::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arguments;
    pub use crate::chain::*;
    pub use crate::function::*;
    pub use crate::value::*;

    #[cfg(feature = "stdlib")]
    pub use crate::stdlib;
}

pub mod chain;
pub mod function;
pub mod value;

#[cfg(feature = "stdlib")]
pub mod stdlib;

pub use smallvec;
