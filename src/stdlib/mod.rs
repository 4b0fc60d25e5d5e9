//! A small library of string and sequence functions.
//!
//! These functions exist to make chains useful out of the box and to show how
//! callables are written. [`register`] installs all of them into a
//! [`FunctionRegistry`] under the names below.
//!
//! | Name          | Arguments                      | Result                                  |
//! |---------------|--------------------------------|-----------------------------------------|
//! | `html_escape` | `text`                         | `text` with `& < > " '` escaped         |
//! | `upper`       | `text`                         | upper-cased `text`                      |
//! | `lower`       | `text`                         | lower-cased `text`                      |
//! | `title_case`  | `text`                         | first letter of every word upper-cased  |
//! | `trim`        | `text`                         | `text` without surrounding whitespace   |
//! | `replace`     | `search, replacement, subject` | `subject` with replacements             |
//! | `split`       | `delimiter, text`              | sequence of pieces                      |
//! | `join`        | `glue, collection`             | pieces joined with `glue`               |
//! | `length`      | `value`                        | characters or entries                   |
//! | `print`       | `value`                        | writes `value` to stdout, returns null  |
//!
//! # Examples
//!
//! ```rust
//! use chaining::arguments;
//! use chaining::chain::Chain;
//! use chaining::function::{Current, FunctionRef, FunctionRegistry, map_each};
//! use chaining::stdlib::title_case;
//! use chaining::value::Value;
//!
//! # fn main() -> Result<(), chaining::chain::ChainError> {
//! let registry = FunctionRegistry::with_standard_library();
//! let title_case_all = map_each(title_case);
//!
//! let mut chain = Chain::with_value(&registry, vec!["name surname", "augustinas malinauskas"]);
//! chain
//!     .add(FunctionRef::direct(&title_case_all))?
//!     .add_with("join", arguments![", ", Current])?
//!     .append_string(".")?;
//!
//! assert_eq!(
//!     chain.get(),
//!     Some(&Value::from("Name Surname, Augustinas Malinauskas."))
//! );
//! # Ok(())
//! # }
//! ```

mod sequence;
mod text;

pub use sequence::{join, length, split};
pub use text::{html_escape, lower, replace, title_case, trim, upper};

use crate::function::{Arguments, CallError, FunctionRegistry, single};
use crate::value::Value;

/// Writes the display form of the argument to stdout.
///
/// # Errors
///
/// Fails unless called with exactly one argument.
pub fn print(arguments: Arguments) -> Result<Value, CallError> {
    let value = single(arguments)?;
    println!("{value}");
    Ok(Value::Null)
}

/// Registers every standard function into `registry`.
pub fn register(registry: &mut FunctionRegistry) {
    registry
        .register("html_escape", html_escape)
        .register("upper", upper)
        .register("lower", lower)
        .register("title_case", title_case)
        .register("trim", trim)
        .register("replace", replace)
        .register("split", split)
        .register("join", join)
        .register("length", length)
        .register("print", print);
    tracing::debug!(count = registry.len(), "registered standard library");
}
