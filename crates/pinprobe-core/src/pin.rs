//! Validated target PIN representation.

use std::{fmt, str::FromStr};

use crate::{digit::Digit, digit_set::DigitSet};

/// The error returned when parsing a [`Pin`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePinError {
    /// The input string was empty.
    #[display("PIN must contain at least one digit")]
    Empty,
    /// The input contained a character that is not a decimal digit.
    #[display("invalid character {ch:?} at position {index} in PIN")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its byte-position in the input.
        index: usize,
    },
}

/// A target PIN: a non-empty sequence of decimal digits.
///
/// Length is unrestricted; it is the length that drives the combinatorial
/// cost of generation, so callers choose their own limits. Parsing fails fast
/// on anything that is not a decimal digit, so the generation engine never
/// sees malformed input.
///
/// # Examples
///
/// ```
/// use pinprobe_core::{Digit, Pin};
///
/// let pin: Pin = "1234".parse().unwrap();
/// assert_eq!(pin.len(), 4);
/// assert_eq!(pin.digits()[0], Digit::D1);
/// assert_eq!(pin.to_string(), "1234");
///
/// assert!("12a4".parse::<Pin>().is_err());
/// assert!("".parse::<Pin>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pin {
    digits: Vec<Digit>,
}

impl Pin {
    /// Creates a PIN from a non-empty digit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePinError::Empty`] when the sequence is empty.
    pub fn new<I>(digits: I) -> Result<Self, ParsePinError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let digits: Vec<_> = digits.into_iter().collect();
        if digits.is_empty() {
            return Err(ParsePinError::Empty);
        }
        Ok(Self { digits })
    }

    /// Returns the digits of the PIN, in order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the number of digits in the PIN.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the set of distinct digits appearing in the PIN.
    ///
    /// This is the starting point of the brute-force "in-play" set.
    #[must_use]
    pub fn distinct_digits(&self) -> DigitSet {
        self.digits.iter().copied().collect()
    }
}

impl FromStr for Pin {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .char_indices()
            .map(|(index, ch)| {
                Digit::try_from(ch).map_err(|ch| ParsePinError::InvalidCharacter { ch, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(digits)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
