//! Core data types for PIN candidate generation.
//!
//! This crate provides the foundational, validated types shared by the
//! candidate-generation engine and its callers.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of keypad digits 0-9
//! - [`digit_set`]: Compact sets of digits, used for the brute-force
//!   "in-play" set
//! - [`pin`]: A validated, non-empty target PIN
//! - [`keypad`]: The digit-adjacency configuration ([`KeypadLayout`]) and its
//!   [`LookupError`]
//!
//! # Examples
//!
//! ```
//! use pinprobe_core::{Digit, KeypadLayout, Pin};
//!
//! let pin: Pin = "2580".parse()?;
//! let layout = KeypadLayout::telephone();
//!
//! // Every digit of a parsed PIN resolves in the default layout.
//! for digit in pin.digits() {
//!     assert!(layout.neighbors_of(*digit).is_ok());
//! }
//! # Ok::<(), pinprobe_core::ParsePinError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod keypad;
pub mod pin;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    keypad::{KeypadLayout, LookupError, Neighbors},
    pin::{ParsePinError, Pin},
};
