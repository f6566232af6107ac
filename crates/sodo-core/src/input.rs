//! Keystroke and paste sanitizing.
//!
//! Typed input must be exactly one character `1`-`9`. Pasted text is more
//! forgiving: every character outside `1`-`9` is stripped first, and the paste
//! is accepted only if exactly one digit remains.

use crate::Digit;

/// Why a keystroke or paste was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Nothing usable was entered.
    #[display("input is empty")]
    Empty,
    /// A single character that is not `1`-`9`.
    #[display("{ch:?} is not a digit 1-9")]
    NotADigit {
        /// The rejected character.
        ch: char,
    },
    /// More than one character (keystroke) or digit (paste).
    #[display("expected a single digit, got {count}")]
    TooMany {
        /// Number of characters or digits found.
        count: usize,
    },
}

/// Parses the text produced by a single keystroke.
///
/// # Errors
///
/// Returns an [`InputError`] unless `text` is exactly one character `1`-`9`.
///
/// # Examples
///
/// ```
/// use sodo_core::{Digit, InputError, parse_keystroke};
///
/// assert_eq!(parse_keystroke("4"), Ok(Digit::D4));
/// assert_eq!(parse_keystroke("0"), Err(InputError::NotADigit { ch: '0' }));
/// assert_eq!(parse_keystroke("12"), Err(InputError::TooMany { count: 2 }));
/// ```
pub fn parse_keystroke(text: &str) -> Result<Digit, InputError> {
    let mut chars = text.chars();
    let Some(ch) = chars.next() else {
        return Err(InputError::Empty);
    };
    let rest = chars.count();
    if rest > 0 {
        return Err(InputError::TooMany { count: rest + 1 });
    }
    Digit::from_char(ch).ok_or(InputError::NotADigit { ch })
}

/// Sanitizes pasted text down to a single digit.
///
/// # Errors
///
/// Returns [`InputError::Empty`] if no `1`-`9` character is present, or
/// [`InputError::TooMany`] if more than one remains after stripping.
///
/// # Examples
///
/// ```
/// use sodo_core::{Digit, InputError, sanitize_paste};
///
/// assert_eq!(sanitize_paste("7x"), Ok(Digit::D7));
/// assert_eq!(sanitize_paste(" 0 "), Err(InputError::Empty));
/// assert_eq!(sanitize_paste("1 2"), Err(InputError::TooMany { count: 2 }));
/// ```
pub fn sanitize_paste(text: &str) -> Result<Digit, InputError> {
    let mut digits = text.chars().filter_map(Digit::from_char);
    let Some(digit) = digits.next() else {
        return Err(InputError::Empty);
    };
    let rest = digits.count();
    if rest > 0 {
        return Err(InputError::TooMany { count: rest + 1 });
    }
    Ok(digit)
}
