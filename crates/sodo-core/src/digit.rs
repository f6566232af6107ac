//! Puzzle digit representation.

use std::fmt::{self, Display};

/// A puzzle digit in the range 1-9.
///
/// A cell value is always an `Option<Digit>`; there is no "zero digit".
/// Wire formats that use `0` for an empty cell convert through
/// [`Digit::try_from_value`].
///
/// # Examples
///
/// ```
/// use sodo_core::Digit;
///
/// assert_eq!(Digit::from_value(7), Digit::D7);
/// assert_eq!(Digit::try_from_value(0), None);
/// assert_eq!(Digit::from_char('3'), Some(Digit::D3));
/// assert_eq!(Digit::D9.to_string(), "9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a value, returning `None` outside 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Parses a single character `'1'..='9'`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        u8::try_from(value).ok().and_then(Self::try_from_value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the digit as a static string, for rendering and wire payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_char_conversions_agree() {
        for digit in Digit::ALL {
            let ch = digit.as_str().chars().next().unwrap();
            assert_eq!(Digit::from_char(ch), Some(digit));
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(format!("{digit}"), digit.as_str());
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('٣'), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }
}
