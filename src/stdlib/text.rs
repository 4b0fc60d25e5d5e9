//! String functions.

use crate::function::{Arguments, CallError, expect_arity, text_argument};
use crate::value::{Kind, Value};

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// # Errors
///
/// Fails unless called with one string-like argument.
pub fn html_escape(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    let text = text_argument(&arguments, 0)?;
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Ok(Value::String(escaped))
}

/// Upper-cases the whole string.
///
/// # Errors
///
/// Fails unless called with one string-like argument.
pub fn upper(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    Ok(Value::String(text_argument(&arguments, 0)?.to_uppercase()))
}

/// Lower-cases the whole string.
///
/// # Errors
///
/// Fails unless called with one string-like argument.
pub fn lower(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    Ok(Value::String(text_argument(&arguments, 0)?.to_lowercase()))
}

/// Upper-cases the first character of every whitespace-separated word.
///
/// The rest of each word is left as is.
///
/// # Errors
///
/// Fails unless called with one string-like argument.
pub fn title_case(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    let text = text_argument(&arguments, 0)?;
    let mut titled = String::with_capacity(text.len());
    let mut at_word_start = true;
    for character in text.chars() {
        if at_word_start {
            titled.extend(character.to_uppercase());
        } else {
            titled.push(character);
        }
        at_word_start = character.is_whitespace();
    }
    Ok(Value::String(titled))
}

/// Strips leading and trailing whitespace.
///
/// # Errors
///
/// Fails unless called with one string-like argument.
pub fn trim(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 1)?;
    Ok(Value::from(text_argument(&arguments, 0)?.trim()))
}

/// `replace(search, replacement, subject)`.
///
/// Replaces every occurrence of `search` in `subject`. A sequence subject has
/// each element replaced separately. An empty `search` leaves the subject
/// untouched.
///
/// # Errors
///
/// Fails unless called with three arguments, the first two string-like and the
/// subject string-like or a sequence of string-like values.
pub fn replace(arguments: Arguments) -> Result<Value, CallError> {
    expect_arity(&arguments, 3)?;
    let search = text_argument(&arguments, 0)?;
    let replacement = text_argument(&arguments, 1)?;

    let replace_in = |subject: &Value| -> Result<Value, CallError> {
        let text = subject.as_text().ok_or(CallError::Type {
            position: 2,
            expected: Kind::String,
            actual: subject.kind(),
        })?;
        if search.is_empty() {
            return Ok(Value::from(text));
        }
        Ok(Value::String(text.replace(&*search, &replacement)))
    };

    match &arguments[2] {
        Value::Sequence(elements) => elements
            .iter()
            .map(replace_in)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        subject => replace_in(subject),
    }
}

/// Returns the number of characters in a string.
pub(super) fn char_count(value: &Value) -> Option<usize> {
    value.as_str().map(|text| text.chars().count())
}
