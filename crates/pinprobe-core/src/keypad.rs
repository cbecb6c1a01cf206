//! Physical keypad adjacency configuration.
//!
//! This module provides [`KeypadLayout`], the mapping from each digit to the
//! digits adjacent to it on a physical keypad. The candidate generator
//! consults the layout at every expansion step; a digit with no entry is a
//! hard error ([`LookupError`]), never a silent skip, because skipping would
//! silently shrink the search space.
//!
//! # Examples
//!
//! ```
//! use pinprobe_core::{Digit, KeypadLayout};
//!
//! let layout = KeypadLayout::telephone();
//! let neighbors = layout.neighbors_of(Digit::D5).unwrap();
//! assert_eq!(neighbors.len(), 5);
//! assert!(neighbors.contains(&Digit::D5));
//! ```

use tinyvec::ArrayVec;

use crate::digit::Digit;

/// An ordered list of digits adjacent to one keypad digit.
///
/// At most all ten digits can be adjacent, so the list is held inline.
pub type Neighbors = ArrayVec<[Digit; 10]>;

/// The error returned when a digit has no entry in a [`KeypadLayout`].
///
/// A missing entry is always fatal to a generation run: proceeding without it
/// would truncate the search space without telling anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} has no entry in the keypad layout")]
pub struct LookupError {
    /// The digit that was looked up.
    pub digit: Digit,
}

/// A mapping from each digit to its keypad neighbors, the digit itself
/// included.
///
/// The order of a neighbor list affects only the order in which candidates
/// are enumerated, not which candidates exist. A layout is immutable during a
/// generation run; replace it wholesale between runs.
///
/// Entries are optional so that deliberately partial layouts can be
/// expressed, e.g. to restrict generation to a subset of digits in tests or
/// to model a keypad with dead keys.
///
/// # Examples
///
/// ```
/// use pinprobe_core::{Digit, KeypadLayout};
///
/// // A custom layout where 1 can only be itself or 2.
/// let mut layout = KeypadLayout::empty();
/// layout.insert(Digit::D1, [Digit::D1, Digit::D2]);
///
/// assert!(layout.neighbors_of(Digit::D1).is_ok());
/// assert!(layout.neighbors_of(Digit::D3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    entries: [Option<Neighbors>; 10],
}

impl KeypadLayout {
    /// Creates a layout with no entries at all.
    ///
    /// Every lookup fails until entries are [`insert`](Self::insert)ed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Default::default(),
        }
    }

    /// The standard telephone/ATM keypad layout.
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// 7 8 9
    ///   0
    /// ```
    ///
    /// Each digit maps to itself plus the digits directly above, below, left
    /// and right of it.
    #[must_use]
    pub fn telephone() -> Self {
        use Digit::*;

        let mut layout = Self::empty();
        layout.insert(D0, [D8, D0]);
        layout.insert(D1, [D1, D2, D4]);
        layout.insert(D2, [D1, D2, D3, D5]);
        layout.insert(D3, [D2, D3, D6]);
        layout.insert(D4, [D1, D4, D5, D7]);
        layout.insert(D5, [D2, D4, D5, D6, D8]);
        layout.insert(D6, [D3, D5, D6, D9]);
        layout.insert(D7, [D4, D7, D8]);
        layout.insert(D8, [D5, D7, D8, D9, D0]);
        layout.insert(D9, [D6, D8, D9]);
        layout
    }

    /// Sets the neighbor list for a digit, replacing any previous entry.
    ///
    /// The given order is preserved and drives enumeration order.
    pub fn insert<I>(&mut self, digit: Digit, neighbors: I)
    where
        I: IntoIterator<Item = Digit>,
    {
        self.entries[usize::from(digit.value())] = Some(neighbors.into_iter().collect());
    }

    /// Returns the neighbor list for a digit, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the digit has no entry.
    pub fn neighbors_of(&self, digit: Digit) -> Result<&[Digit], LookupError> {
        self.entries[usize::from(digit.value())]
            .as_deref()
            .ok_or(LookupError { digit })
    }
}

impl Default for KeypadLayout {
    /// Returns [`KeypadLayout::telephone`].
    fn default() -> Self {
        Self::telephone()
    }
}
