//! Candidate PIN generation from keypad adjacency.
//!
//! This crate produces candidate numeric PIN codes for a target PIN, based on
//! which digits sit next to each other on a physical keypad. It exists for
//! security testing of PIN-based authentication: given a finger smear or a
//! shoulder-surfed approximate PIN, how easily could nearby-key guesses
//! recover the real one?
//!
//! # Strategies
//!
//! [`PinCracker`] dispatches between two enumeration strategies:
//!
//! - **Sequence-preserving** (default): each output digit stays aligned to
//!   its input position and ranges over that position's keypad neighbors.
//!   The candidate count is the product of the neighbor-list sizes.
//! - **Brute force**: the full Cartesian product of an order-agnostic
//!   "in-play" digit set (the PIN's digits, optionally widened by one pass of
//!   their neighbors) raised to the PIN length. The exact count is announced
//!   through the [`ProgressSink`] before anything is generated, because it
//!   grows exponentially with PIN length.
//!
//! Both strategies yield lazily through [`PinCandidates`]; stop pulling and
//! no further work happens. Leading zeros are preserved: every candidate has
//! exactly the target PIN's length.
//!
//! # Examples
//!
//! ```
//! use pinprobe_generator::PinCracker;
//!
//! let cracker = PinCracker::new();
//! let pin = "11".parse()?;
//!
//! for candidate in cracker.crack_pin(&pin)?.take(3) {
//!     println!("{candidate}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod candidate;
mod cracker;
mod progress;

pub use pinprobe_core::{Digit, DigitSet, KeypadLayout, LookupError, ParsePinError, Pin};

pub use self::{
    cracker::{PinCandidates, PinCracker},
    progress::{LogSink, NullSink, ProgressSink},
};
