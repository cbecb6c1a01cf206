//! Candidate-in-progress representation.

use num_bigint::BigUint;
use num_traits::Zero as _;
use pinprobe_core::Digit;

/// A partially built candidate on the expansion work stack.
///
/// The digits appended so far are stored as a numeric value plus a
/// leading-zero count, rather than as a string. A numeric value drops leading
/// zeros (`007` and `7` are both the value seven), so the count restores the
/// positions lost to that collapse: after every append,
///
/// ```text
/// leading_zeros + decimal_digit_count(value) == digits appended so far
/// ```
///
/// where `decimal_digit_count(0) == 1`. The count must grow whenever a digit
/// is appended to a value that is still exactly zero: the pre-append zero
/// occupies one displayed position that the post-append value no longer
/// accounts for. This holds both when the appended digit is another zero
/// (`"00"` is the value zero, one position short) and when it is not
/// (`"07"` is the value seven, one position short).
///
/// `value` is an unbounded integer, so PIN length is unrestricted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PartialCandidate {
    leading_zeros: usize,
    value: BigUint,
}

impl PartialCandidate {
    /// Creates a single-digit candidate, as seeded into the work stack.
    pub(crate) fn seed(digit: Digit) -> Self {
        Self {
            leading_zeros: 0,
            value: BigUint::from(digit.value()),
        }
    }

    /// Returns a new candidate with `digit` appended.
    pub(crate) fn child(&self, digit: Digit) -> Self {
        let leading_zeros = if self.value.is_zero() {
            self.leading_zeros + 1
        } else {
            self.leading_zeros
        };
        Self {
            leading_zeros,
            value: &self.value * 10_u32 + digit.value(),
        }
    }

    /// Returns the number of digits appended so far.
    pub(crate) fn digit_len(&self) -> usize {
        let value_len = if self.value.is_zero() {
            1
        } else {
            self.value.to_str_radix(10).len()
        };
        self.leading_zeros + value_len
    }

    /// Formats the candidate as a decimal string left-padded with `'0'` to
    /// `width` characters.
    pub(crate) fn into_pin_string(self, width: usize) -> String {
        let digits = self.value.to_str_radix(10);
        format!("{digits:0>width$}")
    }
}
