//! A set of keypad digits 0-9, backed by a bitmask.
//!
//! This module provides [`DigitSet`], a compact set over the ten decimal
//! digits. It is the representation used for the brute-force "in-play" digit
//! set, where membership tests and unions dominate.
//!
//! # Examples
//!
//! ```
//! use pinprobe_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D0);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! ```

use std::ops::{BitOr, BitOrAssign};

use crate::digit::Digit;

/// A set of digits 0-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-9 represent digits
/// 0-9 respectively, providing efficient storage and fast set operations.
/// Iteration is always in ascending digit order, regardless of insertion
/// order.
///
/// # Examples
///
/// ```
/// use pinprobe_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D4]);
///
/// let union = a | b;
/// assert_eq!(union, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D4]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all ten digits.
    pub const FULL: Self = Self((1 << 10) - 1);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.value();
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.value());
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.0 & (1 << digit.value()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterates over the digits in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
