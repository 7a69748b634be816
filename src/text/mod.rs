//! Text grammar for vectors and vector arrays.
//!
//! ```text
//! vec2  := "(" number "," number ")"
//! array := "[" ( vec2 ( "," vec2 )* )? "]"
//! ```
//!
//! Whitespace is allowed before and between every token. Numbers use `.` as
//! decimal separator and accept the spellings of Rust's float parser,
//! including `inf` and `NaN`, so every formatted value parses back.

mod cursor;

pub use cursor::Cursor;

use crate::error::ParseError;
use crate::geometry::{Vec2, Vec2Array};
use crate::math::Scalar;

fn is_number_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

fn is_infinity_literal(text: &str) -> bool {
    text.trim_start_matches(['+', '-'])
        .get(..3)
        .is_some_and(|s| s.eq_ignore_ascii_case("inf"))
}

/// Reads a number after optional leading whitespace.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] if the token is not a number, or
/// [`ParseError::OutOfRange`] if a finite literal overflows `T`.
pub fn read_scalar<T: Scalar>(cursor: &mut Cursor<'_>) -> Result<T, ParseError> {
    cursor.skip_whitespace();
    let offset = cursor.offset();
    let text = cursor.take_while(is_number_char);
    let value: T = text.parse().map_err(|_| ParseError::InvalidNumber {
        text: text.to_owned(),
        offset,
    })?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(ParseError::OutOfRange {
            text: text.to_owned(),
            offset,
        });
    }
    Ok(value)
}

/// Reads a `(x, y)` vector after optional leading whitespace.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not start with a vector.
pub fn read_vec2<T: Scalar>(cursor: &mut Cursor<'_>) -> Result<Vec2<T>, ParseError> {
    cursor.skip_whitespace();
    cursor.expect('(')?;
    let x = read_scalar(cursor)?;
    cursor.skip_whitespace();
    cursor.expect(',')?;
    let y = read_scalar(cursor)?;
    cursor.skip_whitespace();
    cursor.expect(')')?;
    Ok(Vec2::new(x, y))
}

/// Reads a `[(x1, y1), (x2, y2), ...]` array after optional leading whitespace.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not start with an array.
pub fn read_vec2_array<T: Scalar>(cursor: &mut Cursor<'_>) -> Result<Vec2Array<T>, ParseError> {
    let mut array = Vec2Array::new();
    cursor.skip_whitespace();
    cursor.expect('[')?;
    cursor.skip_whitespace();
    if cursor.eat(']') {
        return Ok(array);
    }
    loop {
        array.push(read_vec2(cursor)?);
        cursor.skip_whitespace();
        if cursor.eat(']') {
            break;
        }
        cursor.expect(',')?;
    }
    tracing::trace!(len = array.len(), "parsed vec2 array");
    Ok(array)
}

/// Parses a complete string with `read`, rejecting trailing input.
///
/// # Errors
///
/// Returns the error of `read`, or [`ParseError::TrailingCharacters`].
pub fn parse_all<'a, V>(
    text: &'a str,
    read: impl FnOnce(&mut Cursor<'a>) -> Result<V, ParseError>,
) -> Result<V, ParseError> {
    let mut cursor = Cursor::new(text);
    let value = read(&mut cursor)?;
    cursor.finish()?;
    Ok(value)
}
