//! The PIN candidate generation engine.

use std::{fmt, time::Instant};

use num_bigint::BigUint;
use pinprobe_core::{Digit, DigitSet, KeypadLayout, LookupError, Neighbors, Pin};

use crate::{
    candidate::PartialCandidate,
    progress::{NullSink, ProgressSink},
};

/// Generates candidate PINs for a target PIN from keypad adjacency.
///
/// Two independent toggles select the strategy and its breadth:
///
/// - [`with_sequence`](Self::with_sequence) (default `true`): when enabled,
///   each output digit stays aligned to its input position and is drawn from
///   that position's neighbor list ("the user meant this digit but may have
///   hit a neighboring key"). When disabled, the full Cartesian product of an
///   order-agnostic "in-play" digit set is enumerated.
/// - [`with_adjacent_digits`](Self::with_adjacent_digits) (default `true`):
///   brute-force mode only; whether the in-play set is expanded by one pass
///   of neighbors of the PIN's own digits. Neighbors of neighbors are never
///   added.
///
/// Candidates are produced lazily by the returned [`PinCandidates`] iterator,
/// so callers can stop pulling at any point without paying for the rest of
/// the combinatorial space. Brute-force runs announce their exact candidate
/// count through the attached [`ProgressSink`] before the first candidate is
/// produced, so callers can abort large runs up front; the engine itself
/// imposes no cap.
///
/// # Examples
///
/// ```
/// use pinprobe_generator::PinCracker;
///
/// let cracker = PinCracker::new();
/// let pin = "1".parse()?;
/// let candidates: Vec<_> = cracker.crack_pin(&pin)?.collect();
/// assert_eq!(candidates, ["1", "2", "4"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Brute-force over the digits of the PIN only:
///
/// ```
/// use pinprobe_generator::PinCracker;
///
/// let cracker = PinCracker::new()
///     .with_sequence(false)
///     .with_adjacent_digits(false);
/// let pin = "11".parse()?;
/// let candidates: Vec<_> = cracker.crack_pin(&pin)?.collect();
/// assert_eq!(candidates, ["11"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PinCracker {
    adjacent_digits: bool,
    sequence: bool,
    layout: KeypadLayout,
    sink: Box<dyn ProgressSink>,
}

impl PinCracker {
    /// Creates a cracker with both toggles enabled, the telephone keypad
    /// layout, and no progress observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacent_digits: true,
            sequence: true,
            layout: KeypadLayout::telephone(),
            sink: Box::new(NullSink),
        }
    }

    /// Sets whether brute-force mode widens the in-play set by one pass of
    /// keypad neighbors.
    #[must_use]
    pub fn with_adjacent_digits(mut self, enabled: bool) -> Self {
        self.adjacent_digits = enabled;
        self
    }

    /// Selects the strategy: `true` for sequence-preserving expansion,
    /// `false` for order-agnostic brute force.
    #[must_use]
    pub fn with_sequence(mut self, enabled: bool) -> Self {
        self.sequence = enabled;
        self
    }

    /// Replaces the keypad layout wholesale.
    #[must_use]
    pub fn with_layout(mut self, layout: KeypadLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Attaches a progress observer for advisory messages.
    #[must_use]
    pub fn with_progress_sink(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns whether brute-force mode widens the in-play set.
    #[must_use]
    pub fn adjacent_digits(&self) -> bool {
        self.adjacent_digits
    }

    /// Returns whether sequence-preserving mode is selected.
    #[must_use]
    pub fn sequence(&self) -> bool {
        self.sequence
    }

    /// Returns the candidates for `pin` under the configured strategy.
    ///
    /// Every adjacency lookup the run needs is resolved here, before the
    /// iterator is handed out, so a digit missing from the layout surfaces
    /// immediately rather than after some candidates have already been
    /// consumed. In brute-force mode this is also where the pre-run size
    /// estimate is reported.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when a digit of the PIN (or, with
    /// [`with_adjacent_digits`](Self::with_adjacent_digits) enabled, a digit
    /// of the in-play set) has no entry in the keypad layout. The run never
    /// silently skips a digit: that would shrink the search space while
    /// appearing complete.
    pub fn crack_pin(&self, pin: &Pin) -> Result<PinCandidates<'_>, LookupError> {
        let plan = if self.sequence {
            self.sequence_plan(pin)?
        } else {
            self.brute_force_plan(pin)?
        };
        Ok(PinCandidates::new(plan, pin.len(), self.sink.as_ref()))
    }

    /// Builds one neighbor list per PIN position.
    fn sequence_plan(&self, pin: &Pin) -> Result<ExpansionPlan, LookupError> {
        let positions = pin
            .digits()
            .iter()
            .map(|digit| {
                self.layout
                    .neighbors_of(*digit)
                    .map(|neighbors| neighbors.iter().copied().collect::<Neighbors>())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExpansionPlan::PerPosition(positions))
    }

    /// Builds the global in-play digit set and reports its combinatorial
    /// size.
    fn brute_force_plan(&self, pin: &Pin) -> Result<ExpansionPlan, LookupError> {
        let mut in_play = pin.distinct_digits();
        if self.adjacent_digits {
            // One pass over the PIN's own digits; neighbors of neighbors
            // stay out.
            for digit in pin.distinct_digits().iter() {
                let neighbors: DigitSet =
                    self.layout.neighbors_of(digit)?.iter().copied().collect();
                in_play |= neighbors;
            }
        }

        let count = BigUint::from(in_play.len()).pow(u32::try_from(pin.len()).unwrap_or(u32::MAX));
        self.sink.notify(&format!(
            "generating all {count} possible PIN combinations \
             ({} in-play digits, length {}; digit order is ignored)",
            in_play.len(),
            pin.len(),
        ));

        Ok(ExpansionPlan::Global(in_play.iter().collect()))
    }
}

impl Default for PinCracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PinCracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinCracker")
            .field("adjacent_digits", &self.adjacent_digits)
            .field("sequence", &self.sequence)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Which digits may occupy each candidate position.
#[derive(Debug)]
enum ExpansionPlan {
    /// Sequence-preserving: one neighbor list per PIN position.
    PerPosition(Vec<Neighbors>),
    /// Brute force: the same in-play set at every position.
    Global(Neighbors),
}

impl ExpansionPlan {
    fn digits_at(&self, position: usize) -> &[Digit] {
        match self {
            Self::PerPosition(positions) => &positions[position],
            Self::Global(digits) => digits,
        }
    }
}

/// Lazy stream of candidate PINs.
///
/// Each yielded `String` has exactly the target PIN's length, consists only
/// of decimal digits, and is left-padded with `'0'`. Candidates appear in the
/// deterministic order induced by the neighbor-list order at each position
/// (ascending digit order for the brute-force in-play set). In brute-force
/// mode, distinct expansion paths can collapse to the same string when
/// neighbor sets overlap; duplicates are yielded as-is, never deduplicated.
///
/// Work happens on demand: each call to [`next`](Iterator::next) performs
/// just enough expansion steps to surface one full-length candidate, so
/// dropping the iterator early is the cancellation mechanism and costs
/// nothing further. Upon exhaustion the iterator reports the elapsed
/// wall-clock duration through the cracker's progress sink, once, and then
/// keeps returning `None`.
pub struct PinCandidates<'a> {
    target_len: usize,
    plan: ExpansionPlan,
    /// Partial candidates still to be expanded, most recent on top. Children
    /// are pushed in reverse so the first-listed digit is expanded first,
    /// which reproduces position-by-position neighbor order in the output.
    stack: Vec<PartialCandidate>,
    sink: &'a dyn ProgressSink,
    started: Instant,
    finished: bool,
}

impl<'a> PinCandidates<'a> {
    fn new(plan: ExpansionPlan, target_len: usize, sink: &'a dyn ProgressSink) -> Self {
        let stack = plan
            .digits_at(0)
            .iter()
            .rev()
            .map(|digit| PartialCandidate::seed(*digit))
            .collect();
        Self {
            target_len,
            plan,
            stack,
            sink,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Number of partial candidates currently held.
    ///
    /// Bounded by `depth x max-digits-per-position`; exposed for resource
    /// accounting in tests.
    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for PinCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some(partial) = self.stack.pop() else {
                if !self.finished {
                    self.finished = true;
                    self.sink.notify(&format!(
                        "finished - generation took {:?}",
                        self.started.elapsed()
                    ));
                }
                return None;
            };

            let len = partial.digit_len();
            if len == self.target_len {
                return Some(partial.into_pin_string(self.target_len));
            }

            for digit in self.plan.digits_at(len).iter().rev() {
                self.stack.push(partial.child(*digit));
            }
        }
    }
}

impl std::iter::FusedIterator for PinCandidates<'_> {}

impl fmt::Debug for PinCandidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinCandidates")
            .field("target_len", &self.target_len)
            .field("plan", &self.plan)
            .field("stack", &self.stack)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use pinprobe_core::Digit::*;

    use super::*;

    fn pin(s: &str) -> Pin {
        s.parse().unwrap()
    }

    #[test]
    fn test_sequence_single_digit_order() {
        let cracker = PinCracker::new();
        let candidates: Vec<_> = cracker.crack_pin(&pin("1")).unwrap().collect();
        assert_eq!(candidates, ["1", "2", "4"]);
    }

    #[test]
    fn test_sequence_two_digits() {
        let cracker = PinCracker::new();
        let candidates: Vec<_> = cracker.crack_pin(&pin("11")).unwrap().collect();
        // Position-by-position neighbor order: 1, 2, 4 at both positions.
        assert_eq!(
            candidates,
            ["11", "12", "14", "21", "22", "24", "41", "42", "44"]
        );
    }

    #[test]
    fn test_sequence_preserves_leading_zeros() {
        let mut layout = KeypadLayout::empty();
        layout.insert(D0, [D0]);
        layout.insert(D7, [D7]);

        let cracker = PinCracker::new().with_layout(layout);
        let candidates: Vec<_> = cracker.crack_pin(&pin("007")).unwrap().collect();
        assert_eq!(candidates, ["007"]);
    }

    #[test]
    fn test_sequence_cardinality_is_neighbor_product() {
        let cracker = PinCracker::new();
        // |n(2)| * |n(5)| * |n(8)| * |n(0)| = 4 * 5 * 5 * 2
        let count = cracker.crack_pin(&pin("2580")).unwrap().count();
        assert_eq!(count, 4 * 5 * 5 * 2);
    }

    #[test]
    fn test_brute_force_without_adjacency() {
        let cracker = PinCracker::new()
            .with_sequence(false)
            .with_adjacent_digits(false);
        let candidates: Vec<_> = cracker.crack_pin(&pin("11")).unwrap().collect();
        assert_eq!(candidates, ["11"]);
    }

    #[test]
    fn test_brute_force_with_adjacency() {
        let cracker = PinCracker::new().with_sequence(false);
        let candidates: Vec<_> = cracker.crack_pin(&pin("11")).unwrap().collect();

        // In-play set: {1} plus neighbors of 1 = {1, 2, 4}.
        assert_eq!(candidates.len(), 9);
        for candidate in &candidates {
            assert_eq!(candidate.len(), 2);
            for ch in candidate.chars() {
                assert!(matches!(ch, '1' | '2' | '4'));
            }
        }
        // Ascending in-play order at every position.
        assert_eq!(candidates[..3], ["11", "12", "14"]);
    }

    #[test]
    fn test_brute_force_one_pass_not_fixed_point() {
        // Layout where 1 -> {1, 2} and 2 -> {2, 9}. One pass from PIN "1"
        // reaches 2 but must not chase 2's neighbors to 9.
        let mut layout = KeypadLayout::empty();
        layout.insert(D1, [D1, D2]);
        layout.insert(D2, [D2, D9]);

        let cracker = PinCracker::new().with_sequence(false).with_layout(layout);
        let candidates: Vec<_> = cracker.crack_pin(&pin("1")).unwrap().collect();
        assert_eq!(candidates, ["1", "2"]);
    }

    #[test]
    fn test_missing_entry_fails_before_any_candidate() {
        let mut layout = KeypadLayout::empty();
        layout.insert(D1, [D1]);
        // No entry for 2.
        let cracker = PinCracker::new().with_layout(layout.clone());
        let err = cracker.crack_pin(&pin("12")).unwrap_err();
        assert_eq!(err.digit, D2);

        // Brute-force adjacency pass hits the same wall.
        let cracker = PinCracker::new().with_sequence(false).with_layout(layout);
        assert!(cracker.crack_pin(&pin("12")).is_err());
    }

    #[test]
    fn test_brute_force_skips_lookups_when_adjacency_off() {
        // With the one-pass expansion disabled, no lookups happen at all, so
        // an empty layout is fine.
        let cracker = PinCracker::new()
            .with_sequence(false)
            .with_adjacent_digits(false)
            .with_layout(KeypadLayout::empty());
        let candidates: Vec<_> = cracker.crack_pin(&pin("12")).unwrap().collect();
        assert_eq!(candidates, ["11", "12", "21", "22"]);
    }

    #[test]
    fn test_size_estimate_reported_before_first_candidate() {
        let (tx, rx) = mpsc::channel();
        let cracker = PinCracker::new()
            .with_sequence(false)
            .with_progress_sink(Box::new(tx));

        let mut candidates = cracker.crack_pin(&pin("11")).unwrap();

        // The estimate is already there, before any pull: 3^2 combinations.
        let estimate = rx.try_recv().unwrap();
        assert!(estimate.contains("9 possible PIN combinations"), "{estimate}");

        // Completion fires once, at exhaustion.
        assert!(rx.try_recv().is_err());
        assert_eq!(candidates.by_ref().count(), 9);
        let done = rx.try_recv().unwrap();
        assert!(done.starts_with("finished"), "{done}");

        // Fused: further pulls neither yield nor re-notify.
        assert_eq!(candidates.next(), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sequence_mode_reports_completion_only() {
        let (tx, rx) = mpsc::channel();
        let cracker = PinCracker::new().with_progress_sink(Box::new(tx));

        let produced = cracker.crack_pin(&pin("5")).unwrap().count();
        assert_eq!(produced, 5);

        let done = rx.try_recv().unwrap();
        assert!(done.starts_with("finished"), "{done}");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_first_pull_is_lazy() {
        // A 32-digit brute-force space has ~10^32 candidates; the first pull
        // must only walk one path down, keeping in-flight work linear in the
        // PIN length rather than exponential.
        let cracker = PinCracker::new().with_sequence(false);
        let long_pin = pin("12345678901234567890123456789012");
        let mut candidates = cracker.crack_pin(&long_pin).unwrap();

        let first = candidates.next().unwrap();
        assert_eq!(first.len(), 32);
        assert!(candidates.in_flight() <= 32 * 10);
    }

    #[test]
    fn test_duplicates_are_not_deduplicated() {
        // Two digits whose neighbor lists overlap completely.
        let mut layout = KeypadLayout::empty();
        layout.insert(D1, [D1, D2]);
        layout.insert(D2, [D1, D2]);

        let cracker = PinCracker::new().with_sequence(false).with_layout(layout);
        let candidates: Vec<_> = cracker.crack_pin(&pin("12")).unwrap().collect();
        // In-play set is {1, 2}; 2^2 = 4 candidates, no dedup needed here,
        // but cardinality must be exactly |in-play|^len regardless.
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn test_brute_force_leading_zero_candidates() {
        let mut layout = KeypadLayout::empty();
        layout.insert(D0, [D0, D1]);
        layout.insert(D1, [D0, D1]);

        let cracker = PinCracker::new().with_sequence(false).with_layout(layout);
        let candidates: Vec<_> = cracker.crack_pin(&pin("10")).unwrap().collect();
        assert_eq!(candidates, ["00", "01", "10", "11"]);
    }

    #[test]
    fn test_defaults() {
        let cracker = PinCracker::new();
        assert!(cracker.adjacent_digits());
        assert!(cracker.sequence());
    }
}
