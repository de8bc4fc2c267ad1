//! Guess records and the board they accumulate on

use super::feedback::{FeedbackPattern, evaluate};
use super::word::Word;

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: FeedbackPattern,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, pattern: FeedbackPattern) -> Self {
        Self { guess, pattern }
    }

    /// Record `guess` with the feedback it gets against `answer`
    #[must_use]
    pub fn evaluated(guess: Word, answer: &Word) -> Self {
        let pattern = evaluate(&guess, answer);
        Self { guess, pattern }
    }
}

/// Ordered guess history of one game
///
/// Only ever grows by appending evaluated records; constraint and candidate
/// sets are rebuilt from it every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    records: Vec<GuessRecord>,
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append an evaluated record
    pub fn push(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    /// True once any record carries an all-correct pattern
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.records.iter().any(|r| r.pattern.is_perfect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }
}

impl FromIterator<GuessRecord> for Board {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluated_record_matches_evaluator() {
        let record = GuessRecord::evaluated(word("crane"), &word("trace"));
        assert_eq!(record.pattern.to_code(), "YGG-G");
        assert_eq!(record.guess.text(), "crane");
    }

    #[test]
    fn board_tracks_order_and_solved() {
        let answer = word("plate");
        let mut board = Board::new();
        assert!(board.is_empty());

        board.push(GuessRecord::evaluated(word("crane"), &answer));
        assert!(!board.is_solved());
        board.push(GuessRecord::evaluated(word("plate"), &answer));

        assert_eq!(board.len(), 2);
        assert!(board.is_solved());
        assert_eq!(board.last().unwrap().guess.text(), "plate");
        let guesses: Vec<&str> = board.iter().map(|r| r.guess.text()).collect();
        assert_eq!(guesses, vec!["crane", "plate"]);
    }
}
