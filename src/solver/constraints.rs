//! Constraint aggregation
//!
//! Folds every guess record on a board into one compact [`ConstraintSet`]:
//! fixed positions, per-letter excluded positions, globally absent letters
//! and lower/upper bounds on letter counts.
//!
//! Folding only ever tightens: minimums rise, maximums fall, positions and
//! absences accumulate. The result does not depend on record order.

use crate::core::{
    ALPHABET_SIZE, Board, FeedbackSymbol, GuessRecord, LetterVector, WORD_LENGTH,
};
use std::fmt;

/// Everything the feedback so far says about the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Bit `l` set: letter `b'a' + l` is not in the answer
    absent: u32,
    /// Bit `p` of entry `l`: letter `l` is known not to sit at position `p`
    excluded: [u8; ALPHABET_SIZE],
    fixed: [Option<u8>; WORD_LENGTH],
    min_count: [u8; ALPHABET_SIZE],
    max_count: [Option<u8>; ALPHABET_SIZE],
    /// Two records fixed different letters at the same position
    conflicting_fixed: bool,
}

impl ConstraintSet {
    /// The empty constraint set, satisfied by every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            absent: 0,
            excluded: [0; ALPHABET_SIZE],
            fixed: [None; WORD_LENGTH],
            min_count: [0; ALPHABET_SIZE],
            max_count: [None; ALPHABET_SIZE],
            conflicting_fixed: false,
        }
    }

    /// Tighten this set with one guess record
    pub fn add_record(&mut self, record: &GuessRecord) {
        let symbols = record.pattern.symbols();
        let letters = record.guess.chars();

        // Copies of each letter confirmed (Correct or Present) in this record
        let hits = LetterVector::from_letters(
            &letters
                .iter()
                .zip(symbols)
                .filter(|(_, symbol)| symbol.is_hit())
                .map(|(&letter, _)| letter)
                .collect::<Vec<u8>>(),
        );

        for (position, (&letter, symbol)) in letters.iter().zip(symbols).enumerate() {
            let confirmed = hits.count(letter);
            match symbol {
                FeedbackSymbol::Correct => {
                    self.fix(position, letter);
                    self.raise_min(letter, confirmed);
                }
                FeedbackSymbol::Present => {
                    self.excluded[slot(letter)] |= 1 << position;
                    self.raise_min(letter, confirmed);
                }
                FeedbackSymbol::Absent => {
                    if confirmed == 0 {
                        self.absent |= 1 << slot(letter);
                    }
                    self.lower_max(letter, confirmed);
                }
            }
        }
    }

    fn fix(&mut self, position: usize, letter: u8) {
        match self.fixed[position] {
            Some(existing) if existing != letter => self.conflicting_fixed = true,
            _ => self.fixed[position] = Some(letter),
        }
    }

    fn raise_min(&mut self, letter: u8, count: u8) {
        let min = &mut self.min_count[slot(letter)];
        *min = (*min).max(count);
    }

    fn lower_max(&mut self, letter: u8, count: u8) {
        let max = &mut self.max_count[slot(letter)];
        *max = Some(max.map_or(count, |m| m.min(count)));
    }

    /// Letter fixed at `position`, if any
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// All `(position, letter)` pairs fixed by `Correct` feedback
    pub fn fixed_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.fixed
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| (position, l)))
    }

    /// True if `letter` was marked absent with no confirmed copy in its record
    #[must_use]
    pub const fn is_absent(&self, letter: u8) -> bool {
        self.absent & (1 << slot(letter)) != 0
    }

    /// Letters confirmed absent, alphabetically
    pub fn absent_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&l| self.is_absent(l))
    }

    /// True if `letter` is known not to sit at `position`
    #[must_use]
    pub const fn is_excluded(&self, letter: u8, position: usize) -> bool {
        self.excluded[slot(letter)] & (1 << position) != 0
    }

    /// Positions `letter` is known not to occupy
    pub fn excluded_positions(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(move |&p| self.is_excluded(letter, p))
    }

    /// Lower bound on copies of `letter` in the answer (0 when unrecorded)
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[slot(letter)]
    }

    /// Minimum counts of every letter as one vector
    ///
    /// A candidate meets every lower bound iff this vector
    /// [fits within](crate::core::is_within) the candidate's own letters.
    #[must_use]
    pub const fn required_letters(&self) -> LetterVector {
        LetterVector::from_counts(self.min_count)
    }

    /// Upper bound on copies of `letter` in the answer, if one was recorded
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_count[slot(letter)]
    }

    /// True when no word can satisfy the set
    ///
    /// Happens only with inconsistent feedback: two letters fixed at one
    /// position, or a minimum above a maximum.
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.conflicting_fixed
            || self
                .min_count
                .iter()
                .zip(self.max_count.iter())
                .any(|(&min, max)| max.is_some_and(|max| min > max))
    }

    /// True when nothing has been learned yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Aggregate every record on `board` into one constraint set
#[must_use]
pub fn aggregate(board: &Board) -> ConstraintSet {
    board.iter().fold(ConstraintSet::new(), |mut set, record| {
        set.add_record(record);
        set
    })
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .fixed
            .iter()
            .map(|l| l.map_or('_', char::from))
            .collect();
        write!(f, "fixed {pattern}")?;

        let absent: String = self.absent_letters().map(char::from).collect();
        if !absent.is_empty() {
            write!(f, " | absent {absent}")?;
        }

        for letter in b'a'..=b'z' {
            let min = self.min_count(letter);
            let max = self.max_count(letter);
            let excluded: Vec<String> = self
                .excluded_positions(letter)
                .map(|p| p.to_string())
                .collect();
            if min == 0 && excluded.is_empty() && max.is_none_or(|m| m == 0) {
                continue;
            }
            write!(f, " | {}", char::from(letter))?;
            if !excluded.is_empty() {
                write!(f, " not@{}", excluded.join(","))?;
            }
            match max {
                Some(max) => write!(f, " {min}..={max}")?,
                None => write!(f, " >={min}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackPattern, Word};

    fn record(guess: &str, answer: &str) -> GuessRecord {
        GuessRecord::evaluated(Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    fn manual(guess: &str, feedback: &str) -> GuessRecord {
        GuessRecord::new(
            Word::new(guess).unwrap(),
            FeedbackPattern::parse(feedback).unwrap(),
        )
    }

    #[test]
    fn empty_board_is_unconstrained() {
        let set = aggregate(&Board::new());
        assert!(set.is_unconstrained());
        assert!(!set.is_contradictory());
        assert_eq!(set.fixed_positions().count(), 0);
    }

    #[test]
    fn crane_against_trace() {
        let board: Board = [record("crane", "trace")].into_iter().collect();
        let set = aggregate(&board);

        assert_eq!(
            set.fixed_positions().collect::<Vec<_>>(),
            vec![(1, b'r'), (2, b'a'), (4, b'e')]
        );
        assert!(set.is_excluded(b'c', 0));
        assert_eq!(set.min_count(b'c'), 1);
        assert_eq!(set.min_count(b'r'), 1);
        assert!(set.is_absent(b'n'));
        assert_eq!(set.max_count(b'n'), Some(0));
        assert_eq!(set.max_count(b'c'), None);
    }

    #[test]
    fn repeated_letter_sets_upper_bound() {
        // sassy vs abyss: Y Y Y - Y
        let set = aggregate(&[record("sassy", "abyss")].into_iter().collect());

        assert_eq!(set.min_count(b's'), 2);
        assert_eq!(set.max_count(b's'), Some(2));
        assert!(!set.is_absent(b's'));
        assert_eq!(set.excluded_positions(b's').collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn required_letters_collects_minimums() {
        let set = aggregate(&[record("sassy", "abyss")].into_iter().collect());
        let required = set.required_letters();

        assert_eq!(required.count(b's'), 2);
        assert_eq!(required.count(b'a'), 1);
        assert_eq!(required.count(b'y'), 1);
        assert_eq!(required.total(), 4);
        assert!(crate::core::is_within(&required, Word::new("abyss").unwrap().letters()));
        assert!(!crate::core::is_within(&required, Word::new("bliss").unwrap().letters()));
    }

    #[test]
    fn absent_copy_next_to_correct_copy_bounds_count() {
        // e correct at 4 but absent at 1 and 2: exactly one e
        let set = aggregate(&[manual("geese", "----G")].into_iter().collect());
        assert_eq!(set.min_count(b'e'), 1);
        assert_eq!(set.max_count(b'e'), Some(1));
        assert_eq!(set.fixed_at(4), Some(b'e'));
        assert!(!set.is_absent(b'e'));
        assert!(set.is_absent(b'g'));
        assert!(set.is_absent(b's'));
    }

    #[test]
    fn later_records_only_tighten() {
        let loose = manual("eerie", "Y----");
        let tight = manual("geese", "-YY--");

        let forward = aggregate(&[loose.clone(), tight.clone()].into_iter().collect());
        let backward = aggregate(&[tight, loose].into_iter().collect());

        assert_eq!(forward, backward);
        assert_eq!(forward.min_count(b'e'), 2);
        // eerie capped e at 1; the tighter cap survives a later higher minimum
        assert_eq!(forward.max_count(b'e'), Some(1));
        assert!(forward.is_contradictory());
    }

    #[test]
    fn conflicting_fixed_letters_are_contradictory() {
        let board: Board = [manual("crane", "G----"), manual("slate", "G----")]
            .into_iter()
            .collect();
        let set = aggregate(&board);
        assert!(set.is_contradictory());
    }

    #[test]
    fn consistent_board_is_not_contradictory() {
        let answer = "plate";
        let board: Board = ["crane", "slate", "eerie"]
            .iter()
            .map(|g| record(g, answer))
            .collect();
        assert!(!aggregate(&board).is_contradictory());
    }

    #[test]
    fn display_summarises_constraints() {
        let set = aggregate(&[record("crane", "trace")].into_iter().collect());
        let text = set.to_string();
        assert!(text.starts_with("fixed _ra_e"));
        assert!(text.contains("absent n"));
        assert!(text.contains("c not@0 >=1"));
    }
}
