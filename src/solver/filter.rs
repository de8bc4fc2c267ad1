//! Candidate filtering
//!
//! Keeps the words of a universe that satisfy every constraint aggregated
//! from the board. Universe order is preserved.

use super::constraints::{ConstraintSet, aggregate};
use crate::core::{Board, Word, is_within};

/// Words consistent with the feedback so far, in universe order
pub type CandidateSet<'a> = Vec<&'a Word>;

/// True iff `word` satisfies every constraint in `constraints`
#[must_use]
pub fn is_consistent(word: &Word, constraints: &ConstraintSet) -> bool {
    let chars = word.chars();
    let counts = word.letters();

    let fixed_ok = constraints
        .fixed_positions()
        .all(|(position, letter)| chars[position] == letter);
    if !fixed_ok {
        return false;
    }

    let placement_ok = chars
        .iter()
        .enumerate()
        .all(|(position, &letter)| !constraints.is_excluded(letter, position));
    if !placement_ok {
        return false;
    }

    if chars.iter().any(|&letter| constraints.is_absent(letter)) {
        return false;
    }

    if !is_within(&constraints.required_letters(), counts) {
        return false;
    }

    (b'a'..=b'z').all(|letter| {
        constraints
            .max_count(letter)
            .is_none_or(|max| counts.count(letter) <= max)
    })
}

/// Keep the words of `universe` consistent with `constraints`
///
/// A contradictory constraint set yields an empty candidate set.
pub fn filter<'a, I>(universe: I, constraints: &ConstraintSet) -> CandidateSet<'a>
where
    I: IntoIterator<Item = &'a Word>,
{
    if constraints.is_contradictory() {
        return Vec::new();
    }

    universe
        .into_iter()
        .filter(|word| is_consistent(word, constraints))
        .collect()
}

/// Aggregate `board` and filter `universe` in one step
#[must_use]
pub fn candidates_for<'a>(universe: &'a [Word], board: &Board) -> CandidateSet<'a> {
    filter(universe, &aggregate(board))
}
