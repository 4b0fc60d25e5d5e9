//! Functions converting between strings and sequences.

use super::text::char_count;
use crate::function::{Arguments, CallError, expect_arity, single, text_argument};
use crate::value::{Kind, Value};

/// `split(delimiter, text)` splits `text` on every `delimiter`.
///
/// # Errors
///
/// Fails unless called with two string-like arguments and a non-empty
/// delimiter.
pub fn split(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 2)?;
    let delimiter = text_argument(&arguments, 0)?;
    if delimiter.is_empty() {
        return Err(CallError::failed("split delimiter must not be empty"));
    }
    let text = text_argument(&arguments, 1)?;
    Ok(text.split(&*delimiter).map(Value::from).collect())
}

/// `join(glue, collection)` joins a sequence (or a mapping's values) with
/// `glue`.
///
/// # Errors
///
/// Fails unless called with a string-like glue and a collection of
/// string-like values.
pub fn join(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 2)?;
    let glue = text_argument(&arguments, 0)?;
    let pieces: Vec<&Value> = match &arguments[1] {
        Value::Sequence(elements) => elements.iter().collect(),
        Value::Mapping(entries) => entries.values().collect(),
        other => {
            return Err(CallError::Type {
                position: 1,
                expected: Kind::Sequence,
                actual: other.kind(),
            });
        }
    };

    let mut joined = String::new();
    for (index, piece) in pieces.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(&glue);
        }
        let text = piece.as_text().ok_or(CallError::Type {
            position: 1,
            expected: Kind::String,
            actual: piece.kind(),
        })?;
        joined.push_str(&text);
    }
    Ok(Value::String(joined))
}

/// Returns the number of characters in a string or entries in a collection.
///
/// # Errors
///
/// Fails unless called with one string, sequence or mapping.
pub fn length(arguments: Arguments) -> Result<Value, CallError> {
    let value = single(arguments)?;
    let count = match &value {
        Value::Sequence(elements) => elements.len(),
        Value::Mapping(entries) => entries.len(),
        other => char_count(other).ok_or(CallError::Type {
            position: 0,
            expected: Kind::String,
            actual: other.kind(),
        })?,
    };
    i64::try_from(count)
        .map(Value::Integer)
        .map_err(|_| CallError::failed("length does not fit in an integer"))
}
