//! Letter-count vectors
//!
//! A fixed-size multiset of letter occurrences, one slot per letter of the
//! 26-letter alphabet. Every [`Word`](super::Word) caches its vector at
//! construction so feedback evaluation and filtering never recount.

use super::Word;
use std::fmt;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Occurrence count of each letter `a..=z` within a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterVector([u8; ALPHABET_SIZE]);

impl LetterVector {
    /// Build a vector from lowercase ASCII letters
    ///
    /// Callers must only pass bytes in `b'a'..=b'z'`; [`Word`] guarantees this.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in letters {
            debug_assert!(letter.is_ascii_lowercase(), "letter out of alphabet");
            counts[slot(letter)] += 1;
        }
        Self(counts)
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u8 {
        self.0[slot(letter)]
    }

    /// Sum of all counts (the word length)
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// True iff every count in `self` is <= the matching count in `sup`
    #[must_use]
    pub fn is_within(&self, sup: &Self) -> bool {
        self.0.iter().zip(sup.0.iter()).all(|(sub, sup)| sub <= sup)
    }

    /// Iterate over `(letter, count)` for letters that occur at least once
    pub fn present(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Wrap raw counts indexed by `letter - b'a'`
    #[must_use]
    pub const fn from_counts(counts: [u8; ALPHABET_SIZE]) -> Self {
        Self(counts)
    }
}

impl fmt::Display for LetterVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.present() {
            write!(f, "{}{count}", letter as char)?;
        }
        Ok(())
    }
}

#[inline]
const fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Letter-count vector of a word (cached on the word)
#[inline]
#[must_use]
pub fn vector_of(word: &Word) -> LetterVector {
    *word.letters()
}

/// True iff `sub` fits inside `sup` letter by letter
#[inline]
#[must_use]
pub fn is_within(sub: &LetterVector, sup: &LetterVector) -> bool {
    sub.is_within(sup)
}
